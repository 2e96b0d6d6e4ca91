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
use std::f32::consts::{PI, TAU};

/// Returns the shortest signed arc from angle `a` to angle `b`, in radians.
/// The result lies in `(-PI, PI]` up to floating-point wrap.
pub fn shortest_angle(a: f32, b: f32) -> f32 {
    let d = (b - a) % TAU;
    (2.0 * d) % TAU - d
}

/// Interpolates from angle `a` toward angle `b` along the shortest arc by
/// fraction `t`.
pub fn interp_angle(a: f32, b: f32, t: f32) -> f32 { a + shortest_angle(a, b) * t }

/// Converts radians to degrees.
pub fn degrees(rad: f32) -> f32 { rad / PI * 180.0 }

/// Converts degrees to radians.
pub fn radians(deg: f32) -> f32 { deg / 180.0 * PI }

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 1e-4 }

    #[test]
    fn shortest_arc_goes_the_short_way_around() {
        assert!(close(shortest_angle(0.1, TAU - 0.1), -0.2));
        assert!(close(shortest_angle(TAU - 0.1, 0.1), 0.2));
        assert!(close(shortest_angle(0.0, PI / 2.0), PI / 2.0));
        assert!(close(shortest_angle(1.0, 1.0), 0.0));
    }

    #[test]
    fn interpolation_crosses_the_wrap_point() {
        let mid = interp_angle(0.1, TAU - 0.1, 0.5);
        assert!(close(mid, 0.0));
        assert!(close(interp_angle(1.0, 2.0, 0.0), 1.0));
        assert!(close(interp_angle(1.0, 2.0, 1.0), 2.0));
    }

    #[test]
    fn degree_radian_round_trip() {
        assert!(close(degrees(PI), 180.0));
        assert!(close(radians(90.0), PI / 2.0));
        assert!(close(radians(degrees(1.25)), 1.25));
    }
}
