//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::{
    thread,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

/// Returns the wall-clock time in microseconds since the Unix epoch.
/// Clocks before the epoch read as 0.
pub fn unix_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// Paces a frame loop to a fixed tick duration.
///
/// Call [`Ticker::begin`] at the top of the frame and [`Ticker::end`] at the
/// bottom; `end` sleeps off whatever remains of the tick. A frame that ran
/// long sleeps nothing.
pub struct Ticker {
    tick: Duration,
    start: Option<Instant>,
}

impl Ticker {
    /// Creates a ticker targeting one frame per `tick`.
    pub fn new(tick: Duration) -> Self { Self { tick, start: None } }

    /// Marks the start of the current frame.
    pub fn begin(&mut self) { self.start = Some(Instant::now()); }

    /// Sleeps until the frame's tick has elapsed. Without a preceding
    /// [`Ticker::begin`] this is a no-op.
    pub fn end(&mut self) {
        let Some(start) = self.start.take() else {
            return;
        };
        let remaining = self.tick.saturating_sub(start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}

/// One-shot profiling timer reporting through the `log` facade.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts measuring.
    pub fn start() -> Self { Self { start: Instant::now() } }

    /// Returns the microseconds elapsed since the stopwatch started.
    pub fn elapsed_micros(&self) -> u64 { self.start.elapsed().as_micros() as u64 }

    /// Consumes the stopwatch, logging the elapsed time under `name`.
    pub fn log(self, name: &str) { log::debug!("profile: {}: {}", name, self.elapsed_micros()); }
}
