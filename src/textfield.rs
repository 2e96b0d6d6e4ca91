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
use crate::{Input, Key};

#[derive(Clone, Debug)]
/// Persistent state for one text field.
///
/// Owns the edited buffer, the cursor, the first visible column of the
/// horizontal scroll window, and the focus flag. Created once by the caller,
/// persists across frames, and is mutated only by
/// [`Panel::text_field`](crate::Panel::text_field) while focused.
///
/// Invariants kept by every mutation, for a field shown with `columns`
/// visible columns: `cursor <= len() < capacity`, `first_visible <= cursor`,
/// and `cursor - first_visible <= columns`.
pub struct TextFieldState {
    buf: String,
    capacity: usize,
    cursor: usize,
    first: usize,
    selected: bool,
}

impl TextFieldState {
    /// Creates an empty text field holding at most `capacity - 1` characters.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
            cursor: 0,
            first: 0,
            selected: false,
        }
    }

    /// Creates a text field pre-filled with the ASCII characters of `text`,
    /// truncated to the capacity, with the cursor at the start.
    pub fn with_text(text: &str, capacity: usize) -> Self {
        let mut buf = String::new();
        for ch in text.chars().filter(|c| c.is_ascii()) {
            if buf.len() + 1 >= capacity {
                break;
            }
            buf.push(ch);
        }
        Self {
            buf,
            capacity,
            cursor: 0,
            first: 0,
            selected: false,
        }
    }

    /// Returns the current buffer contents.
    pub fn text(&self) -> &str { &self.buf }

    /// Returns the cursor index, in `0..=len()`.
    pub fn cursor(&self) -> usize { self.cursor }

    /// Returns the leftmost displayed column.
    pub fn first_visible(&self) -> usize { self.first }

    /// Returns the buffer capacity the field was created with.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns `true` while the field holds keyboard focus.
    pub fn is_selected(&self) -> bool { self.selected }

    /// Grants or revokes focus, as a click inside or outside the field would.
    pub fn set_selected(&mut self, selected: bool) { self.selected = selected; }

    /// Empties the buffer and rewinds cursor and scroll window.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
        self.first = 0;
    }

    /// Runs one frame of editing against the input snapshot: cursor
    /// navigation, then character insertion, then backspace, with the scroll
    /// window dragged along so the cursor stays visible. Returns `true` when
    /// anything (buffer, cursor, or scroll) changed.
    ///
    /// Characters typed this frame are applied in ascending code order, not
    /// in typing order; with more than one printable character per frame the
    /// insertion order is by code. `columns` must be at least 1.
    pub(crate) fn apply_input(&mut self, input: &Input, columns: usize) -> bool {
        let mut changed = false;

        if input.key_pressed(Key::LEFT) {
            let before = (self.cursor, self.first);
            if self.cursor > 0 {
                self.cursor -= 1;
            }
            if self.cursor < self.first {
                self.first -= 1;
            }
            changed |= before != (self.cursor, self.first);
        }

        if input.key_pressed(Key::RIGHT) {
            let before = (self.cursor, self.first);
            if self.cursor < self.buf.len() {
                self.cursor += 1;
            }
            if self.cursor - self.first >= columns {
                self.first += 1;
            }
            changed |= before != (self.cursor, self.first);
        }

        if input.key_pressed(Key::UP) {
            changed |= self.cursor != 0 || self.first != 0;
            self.cursor = 0;
            self.first = 0;
        }

        if input.key_pressed(Key::DOWN) {
            let before = (self.cursor, self.first);
            self.cursor = self.buf.len();
            self.first = 0;
            while self.cursor - self.first > columns {
                self.first += 1;
            }
            changed |= before != (self.cursor, self.first);
        }

        for code in 0u8..128 {
            if self.buf.len() + 1 >= self.capacity {
                break;
            }
            let ch = code as char;
            if !(ch.is_ascii_graphic() || ch == ' ') {
                continue;
            }
            if input.text_input(ch) {
                self.buf.insert(self.cursor, ch);
                self.cursor += 1;
                if self.cursor - self.first >= columns {
                    self.first += 1;
                }
                changed = true;
            }
        }

        if input.key_pressed(Key::BACKSPACE) && self.cursor > 0 {
            self.buf.remove(self.cursor - 1);
            self.cursor -= 1;
            if self.cursor < self.first {
                self.first -= 1;
            }
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Event;
    use rand::Rng;

    fn type_text(input: &mut Input, text: &str) {
        for i in 0..text.len() {
            input.handle_event(&Event::TextInput { text: &text[i..] });
        }
    }

    fn press(input: &mut Input, key: Key) { input.handle_event(&Event::KeyDown { key, repeat: false }); }

    #[test]
    fn insert_then_backspace_round_trip() {
        let mut state = TextFieldState::new(10);
        let mut input = Input::new();

        type_text(&mut input, "ab");
        state.apply_input(&input, 5);
        input.end_frame();

        assert_eq!(state.text(), "ab");
        assert_eq!(state.cursor(), 2);

        press(&mut input, Key::BACKSPACE);
        let changed = state.apply_input(&input, 5);

        assert!(changed);
        assert_eq!(state.text(), "a");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn insertion_applies_in_ascending_code_order() {
        let mut state = TextFieldState::new(10);
        let mut input = Input::new();

        // typed "b" then "a"; the scan applies codes ascending
        type_text(&mut input, "b");
        type_text(&mut input, "a");
        state.apply_input(&input, 5);

        assert_eq!(state.text(), "ab");
    }

    #[test]
    fn capacity_leaves_room_for_terminator() {
        let mut state = TextFieldState::new(4);
        let mut input = Input::new();

        type_text(&mut input, "abcdef");
        let changed = state.apply_input(&input, 8);

        assert!(changed);
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn insert_mid_buffer_shifts_tail() {
        let mut state = TextFieldState::new(16);
        let mut input = Input::new();

        type_text(&mut input, "ac");
        state.apply_input(&input, 8);
        input.end_frame();

        press(&mut input, Key::LEFT);
        state.apply_input(&input, 8);
        input.end_frame();

        type_text(&mut input, "b");
        state.apply_input(&input, 8);

        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn navigation_reports_change_only_when_state_moves() {
        let mut state = TextFieldState::new(8);
        let mut input = Input::new();

        press(&mut input, Key::LEFT);
        assert!(!state.apply_input(&input, 5));
        input.end_frame();

        type_text(&mut input, "x");
        state.apply_input(&input, 5);
        input.end_frame();

        press(&mut input, Key::LEFT);
        assert!(state.apply_input(&input, 5));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn up_and_down_snap_to_ends() {
        let mut state = TextFieldState::new(32);
        let mut input = Input::new();

        type_text(&mut input, "0123456789");
        state.apply_input(&input, 4);
        input.end_frame();

        press(&mut input, Key::UP);
        state.apply_input(&input, 4);
        input.end_frame();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.first_visible(), 0);

        press(&mut input, Key::DOWN);
        state.apply_input(&input, 4);
        assert_eq!(state.cursor(), 10);
        assert_eq!(state.first_visible(), 6);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut state = TextFieldState::new(8);
        let mut input = Input::new();

        press(&mut input, Key::BACKSPACE);
        let changed = state.apply_input(&input, 5);

        assert!(!changed);
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn with_text_truncates_to_capacity() {
        let state = TextFieldState::with_text("hello world", 6);
        assert_eq!(state.text(), "hello");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn scroll_window_follows_cursor_under_fuzz() {
        const COLUMNS: usize = 5;
        let mut rng = rand::rng();
        let mut state = TextFieldState::new(24);

        for _ in 0..2000 {
            let mut input = Input::new();
            match rng.random_range(0..6) {
                0 => press(&mut input, Key::LEFT),
                1 => press(&mut input, Key::RIGHT),
                2 => press(&mut input, Key::UP),
                3 => press(&mut input, Key::DOWN),
                4 => press(&mut input, Key::BACKSPACE),
                _ => {
                    let ch = (b'a' + rng.random_range(0..26u8)) as char;
                    let text = ch.to_string();
                    input.handle_event(&Event::TextInput { text: &text });
                }
            }
            state.apply_input(&input, COLUMNS);

            assert!(state.first_visible() <= state.cursor());
            assert!(state.cursor() <= state.first_visible() + COLUMNS);
            assert!(state.cursor() <= state.text().len());
            assert!(state.text().len() < state.capacity());
        }
    }
}
