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
//! SDL2 glue: event translation, focus-guarded pointer queries, TTF text
//! metrics, and the message-box error reporter.

use crate::{Dimensioni, Event, Font, Key, MouseButton, Options, OptionsError, Pointer, Vec2i, vec2};

/// Translates an SDL2 event into a library [`Event`], or `None` for event
/// kinds the input state does not track.
pub fn convert_event(event: &sdl2::event::Event) -> Option<Event<'_>> {
    use sdl2::event::Event as SdlEvent;

    match event {
        SdlEvent::KeyDown { keycode: Some(code), repeat, .. } => Some(Event::KeyDown {
            key: Key(code.into_i32()),
            repeat: *repeat,
        }),
        SdlEvent::KeyUp { keycode: Some(code), .. } => Some(Event::KeyUp { key: Key(code.into_i32()) }),
        SdlEvent::MouseButtonDown { mouse_btn, .. } => convert_button(*mouse_btn).map(|button| Event::MouseDown { button }),
        SdlEvent::MouseButtonUp { mouse_btn, .. } => convert_button(*mouse_btn).map(|button| Event::MouseUp { button }),
        SdlEvent::TextInput { text, .. } => Some(Event::TextInput { text }),
        _ => None,
    }
}

fn convert_button(button: sdl2::mouse::MouseButton) -> Option<MouseButton> {
    use sdl2::mouse::MouseButton as SdlButton;

    match button {
        SdlButton::Left => Some(MouseButton::Left),
        SdlButton::Middle => Some(MouseButton::Middle),
        SdlButton::Right => Some(MouseButton::Right),
        SdlButton::X1 => Some(MouseButton::X1),
        SdlButton::X2 => Some(MouseButton::X2),
        SdlButton::Unknown => None,
    }
}

/// [`Pointer`] implementation for one SDL2 window.
///
/// Reports `(0, 0)` while the window lacks mouse focus, and queries SDL
/// fresh on every call.
pub struct SdlPointer<'a> {
    mouse: sdl2::mouse::MouseUtil,
    pump: &'a sdl2::EventPump,
    window_id: u32,
}

impl<'a> SdlPointer<'a> {
    /// Creates a pointer query bound to `window`.
    pub fn new(sdl: &sdl2::Sdl, pump: &'a sdl2::EventPump, window: &sdl2::video::Window) -> Self {
        Self {
            mouse: sdl.mouse(),
            pump,
            window_id: window.id(),
        }
    }
}

impl Pointer for SdlPointer<'_> {
    fn position(&self) -> Vec2i {
        if self.mouse.focused_window_id() != Some(self.window_id) {
            return vec2(0, 0);
        }
        let state = self.pump.mouse_state();
        vec2(state.x(), state.y())
    }
}

impl Font for sdl2::ttf::Font<'_, '_> {
    /// Measures through `TTF_SizeText`; metric failures degrade to `0 x 0`
    /// instead of propagating.
    fn text_size(&self, text: &str) -> Dimensioni {
        match self.size_of(text) {
            Ok((w, h)) => Dimensioni::new(w as i32, h as i32),
            Err(_) => Dimensioni::new(0, 0),
        }
    }
}

/// Shows `message` in an error message box titled `title`; when the box
/// cannot be shown the message goes to the log instead.
pub fn report_error(title: &str, message: &str) {
    use sdl2::messagebox::{MessageBoxFlag, show_simple_message_box};

    if show_simple_message_box(MessageBoxFlag::ERROR, title, message, None::<&sdl2::video::Window>).is_err() {
        log::error!("{}: {}", title, message);
    }
}

/// Returns the option under `key` resolved to a [`Key`] through SDL's key
/// name table (for example `Left`, `Space`, or `F5`).
pub fn option_key_code(options: &Options, key: &str) -> Result<Key, OptionsError> {
    let name = options.raw(key)?;
    match sdl2::keyboard::Keycode::from_name(name) {
        Some(code) => Ok(Key(code.into_i32())),
        None => Err(OptionsError::InvalidConversion(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_events_carry_their_payload() {
        let event = sdl2::event::Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: "a".to_string(),
        };
        assert!(matches!(convert_event(&event), Some(Event::TextInput { text: "a" })));
    }

    #[test]
    fn unknown_buttons_are_dropped() {
        assert!(convert_button(sdl2::mouse::MouseButton::Unknown).is_none());
        assert_eq!(convert_button(sdl2::mouse::MouseButton::Left), Some(MouseButton::Left));
    }

    #[test]
    fn untracked_events_convert_to_none() {
        let event = sdl2::event::Event::Quit { timestamp: 0 };
        assert!(convert_event(&event).is_none());
    }
}
