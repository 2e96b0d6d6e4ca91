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

/// Number of tracked key states. Keycodes normalize into this range; anything
/// outside reads as "not down".
const KEY_STATES: usize = 1024;

/// ASCII text input only; the high half of the byte range is discarded.
const TEXT_STATES: usize = 128;

/// Keycodes for non-character keys carry this marker bit (SDL layout).
const EXTENDED_BIT: i32 = 1 << 30;

#[derive(Copy, Clone)]
struct BitArray<const BYTES: usize>([u8; BYTES]);

impl<const BYTES: usize> BitArray<BYTES> {
    fn new() -> Self { Self([0; BYTES]) }

    fn set(&mut self, idx: usize) { self.0[idx / 8] |= 1 << (idx % 8); }

    fn clear(&mut self, idx: usize) { self.0[idx / 8] &= !(1 << (idx % 8)); }

    fn get(&self, idx: usize) -> bool { self.0[idx / 8] & 1 << (idx % 8) != 0 }

    fn reset(&mut self) { self.0.fill(0); }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// Keyboard key identified by its keycode in the SDL value space.
///
/// Character keys carry their ASCII value; navigation and editing keys carry
/// a marker bit that state tracking folds into a compact index.
pub struct Key(pub i32);

impl Key {
    /// Backspace key.
    pub const BACKSPACE: Key = Key(0x08);
    /// Return/Enter key.
    pub const RETURN: Key = Key(0x0D);
    /// Escape key.
    pub const ESCAPE: Key = Key(0x1B);
    /// Space bar.
    pub const SPACE: Key = Key(0x20);
    /// Right arrow key.
    pub const RIGHT: Key = Key(EXTENDED_BIT | 0x4F);
    /// Left arrow key.
    pub const LEFT: Key = Key(EXTENDED_BIT | 0x50);
    /// Down arrow key.
    pub const DOWN: Key = Key(EXTENDED_BIT | 0x51);
    /// Up arrow key.
    pub const UP: Key = Key(EXTENDED_BIT | 0x52);

    /// Folds the keycode into the contiguous tracked range: extended codes
    /// drop the marker bit and shift up by 128 past the ASCII block. This is
    /// a compression scheme, not a hash; distinct tracked keys stay distinct.
    /// Returns `None` for codes that land outside the tracked range.
    fn state_index(self) -> Option<usize> {
        let mut code = self.0;
        if code & EXTENDED_BIT != 0 {
            code = (code & !EXTENDED_BIT) + 128;
        }
        if (0..KEY_STATES as i32).contains(&code) { Some(code as usize) } else { None }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
/// Mouse buttons by their SDL ordinal.
pub enum MouseButton {
    /// Left mouse button.
    Left = 1,
    /// Middle mouse button.
    Middle = 2,
    /// Right mouse button.
    Right = 3,
    /// First extra mouse button.
    X1 = 4,
    /// Second extra mouse button.
    X2 = 5,
}

impl MouseButton {
    fn mask(self) -> u8 { 1 << self as u8 }
}

#[derive(Copy, Clone, Debug)]
/// Platform input event consumed by [`Input::handle_event`].
///
/// Backends translate their native events into this shape; the
/// `sdl2-backend` feature ships `convert_event` for SDL2.
pub enum Event<'a> {
    /// A key transitioned to down, or is auto-repeating while held.
    KeyDown {
        /// The affected key.
        key: Key,
        /// Set for OS auto-repeat; repeats never re-trigger edges.
        repeat: bool,
    },
    /// A key transitioned to up.
    KeyUp {
        /// The affected key.
        key: Key,
    },
    /// A mouse button transitioned to down.
    MouseDown {
        /// The affected button.
        button: MouseButton,
    },
    /// A mouse button transitioned to up.
    MouseUp {
        /// The affected button.
        button: MouseButton,
    },
    /// Text was typed. Only the first byte is inspected; non-ASCII payloads
    /// are silently dropped.
    TextInput {
        /// Raw text payload as delivered by the platform.
        text: &'a str,
    },
}

#[derive(Copy, Clone)]
/// Frame-coherent input state.
///
/// Level-triggered `down` state accumulates across frames while the
/// edge-triggered `pressed`/`released`/text sets hold only the transitions
/// seen since the last [`Input::end_frame`]. One value is owned by the
/// application and threaded by reference into event handling and widget
/// calls; independent contexts (tests, secondary views) simply own their own
/// value.
pub struct Input {
    key_down: BitArray<{ KEY_STATES / 8 }>,
    key_pressed: BitArray<{ KEY_STATES / 8 }>,
    key_released: BitArray<{ KEY_STATES / 8 }>,
    mouse_down: u8,
    mouse_pressed: u8,
    mouse_released: u8,
    text_typed: BitArray<{ TEXT_STATES / 8 }>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            key_down: BitArray::new(),
            key_pressed: BitArray::new(),
            key_released: BitArray::new(),
            mouse_down: 0,
            mouse_pressed: 0,
            mouse_released: 0,
            text_typed: BitArray::new(),
        }
    }
}

impl Input {
    /// Creates an input state with nothing held and no pending edges.
    pub fn new() -> Self { Self::default() }

    /// Feeds one platform event into the state.
    ///
    /// Key edges are recorded at event time: a down transition sets both the
    /// level bit and the pressed edge, an up transition clears the level bit
    /// and sets the released edge. Auto-repeat key events are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::KeyDown { key, repeat } => {
                if repeat {
                    return;
                }
                if let Some(idx) = key.state_index() {
                    self.key_down.set(idx);
                    self.key_pressed.set(idx);
                }
            }
            Event::KeyUp { key } => {
                if let Some(idx) = key.state_index() {
                    self.key_down.clear(idx);
                    self.key_released.set(idx);
                }
            }
            Event::MouseDown { button } => {
                self.mouse_down |= button.mask();
                self.mouse_pressed |= button.mask();
            }
            Event::MouseUp { button } => {
                self.mouse_down &= !button.mask();
                self.mouse_released |= button.mask();
            }
            Event::TextInput { text } => {
                let Some(&byte) = text.as_bytes().first() else {
                    return;
                };
                if byte & 0x80 != 0 {
                    return;
                }
                self.text_typed.set(byte as usize);
            }
        }
    }

    /// Retires the frame's edges: clears every pressed/released bit and the
    /// typed-text set, leaving held state untouched.
    ///
    /// Call exactly once per frame, after the frame's widget calls have
    /// consumed the edges and before the next batch of platform events is
    /// pumped.
    pub fn end_frame(&mut self) {
        self.key_pressed.reset();
        self.key_released.reset();
        self.mouse_pressed = 0;
        self.mouse_released = 0;
        self.text_typed.reset();
    }

    /// Returns `true` while `key` is held.
    pub fn key_down(&self, key: Key) -> bool { key.state_index().is_some_and(|idx| self.key_down.get(idx)) }

    /// Returns `true` only on the frame `key` transitioned to down.
    pub fn key_pressed(&self, key: Key) -> bool { key.state_index().is_some_and(|idx| self.key_pressed.get(idx)) }

    /// Returns `true` only on the frame `key` transitioned to up.
    pub fn key_released(&self, key: Key) -> bool { key.state_index().is_some_and(|idx| self.key_released.get(idx)) }

    /// Returns `true` while `button` is held.
    pub fn mouse_down(&self, button: MouseButton) -> bool { self.mouse_down & button.mask() != 0 }

    /// Returns `true` only on the frame `button` transitioned to down.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed & button.mask() != 0 }

    /// Returns `true` only on the frame `button` transitioned to up.
    pub fn mouse_released(&self, button: MouseButton) -> bool { self.mouse_released & button.mask() != 0 }

    /// Returns `true` when `ch` was typed this frame. Non-ASCII characters
    /// always read `false`.
    pub fn text_input(&self, ch: char) -> bool { ch.is_ascii() && self.text_typed.get(ch as usize) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Key = Key('a' as i32);

    #[test]
    fn key_edges_track_transitions() {
        let mut input = Input::new();

        input.handle_event(&Event::KeyDown { key: A, repeat: false });
        assert!(input.key_down(A));
        assert!(input.key_pressed(A));
        assert!(!input.key_released(A));

        input.end_frame();
        assert!(input.key_down(A));
        assert!(!input.key_pressed(A));
        assert!(!input.key_released(A));

        input.handle_event(&Event::KeyUp { key: A });
        assert!(!input.key_down(A));
        assert!(!input.key_pressed(A));
        assert!(input.key_released(A));

        input.end_frame();
        assert!(!input.key_down(A));
        assert!(!input.key_released(A));
    }

    #[test]
    fn end_frame_is_idempotent() {
        let mut input = Input::new();
        input.handle_event(&Event::KeyDown { key: A, repeat: false });
        input.handle_event(&Event::MouseDown { button: MouseButton::Left });

        input.end_frame();
        input.end_frame();

        assert!(input.key_down(A));
        assert!(input.mouse_down(MouseButton::Left));
        assert!(!input.key_pressed(A));
        assert!(!input.key_released(A));
        assert!(!input.mouse_pressed(MouseButton::Left));
        assert!(!input.mouse_released(MouseButton::Left));
    }

    #[test]
    fn auto_repeat_is_discarded() {
        let mut input = Input::new();
        input.handle_event(&Event::KeyDown { key: A, repeat: false });
        input.end_frame();

        input.handle_event(&Event::KeyDown { key: A, repeat: true });
        assert!(input.key_down(A));
        assert!(!input.key_pressed(A));
    }

    #[test]
    fn extended_keys_fold_without_colliding() {
        let mut input = Input::new();
        input.handle_event(&Event::KeyDown { key: Key::LEFT, repeat: false });

        assert!(input.key_pressed(Key::LEFT));
        // the folded slot must not alias the plain code with the same low bits
        assert!(!input.key_pressed(Key(0x50)));
        assert!(!input.key_pressed(Key::RIGHT));
    }

    #[test]
    fn out_of_range_keys_read_not_down() {
        let mut input = Input::new();
        input.handle_event(&Event::KeyDown { key: Key(i32::MAX & !EXTENDED_BIT), repeat: false });
        input.handle_event(&Event::KeyDown { key: Key(-3), repeat: false });

        assert!(!input.key_down(Key(i32::MAX & !EXTENDED_BIT)));
        assert!(!input.key_down(Key(-3)));
    }

    #[test]
    fn mouse_edges_track_transitions() {
        let mut input = Input::new();
        input.handle_event(&Event::MouseDown { button: MouseButton::Left });
        assert!(input.mouse_down(MouseButton::Left));
        assert!(input.mouse_pressed(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Right));

        input.end_frame();
        input.handle_event(&Event::MouseUp { button: MouseButton::Left });
        assert!(!input.mouse_down(MouseButton::Left));
        assert!(input.mouse_released(MouseButton::Left));
    }

    #[test]
    fn text_input_keeps_ascii_only() {
        let mut input = Input::new();
        input.handle_event(&Event::TextInput { text: "a" });
        input.handle_event(&Event::TextInput { text: "é" });
        input.handle_event(&Event::TextInput { text: "" });

        assert!(input.text_input('a'));
        assert!(!input.text_input('é'));
        assert!(!input.text_input('b'));

        input.end_frame();
        assert!(!input.text_input('a'));
    }

    #[test]
    fn text_input_takes_first_byte_only() {
        let mut input = Input::new();
        input.handle_event(&Event::TextInput { text: "xyz" });

        assert!(input.text_input('x'));
        assert!(!input.text_input('y'));
    }
}
