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
use crate::{ControlColor, Dimensioni, Font, Input, MouseButton, Pointer, Recti, Renderer, Style, TextFieldState, expand_rect, rect};

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Per-element flags captured at emission time.
    pub struct ElementFlags : u16 {
        /// The element was emitted while its panel was inactive; it renders
        /// as a flat rectangle and never interacted this frame.
        const INACTIVE = 0x1;
    }
}

#[derive(Copy, Clone, Debug)]
/// Geometry and flags shared by every element variant.
pub struct ElementBase {
    /// Resolved pixel rectangle of the element.
    pub rect: Recti,
    /// Flags captured when the element was emitted.
    pub flags: ElementFlags,
}

/// Render descriptor appended by each widget call.
///
/// One frame's widget calls build a list of these; [`Panel::render`] walks
/// the list in emission order and turns it into renderer callbacks.
pub enum Element<'a> {
    /// Unpadded line of text.
    Label {
        /// Shared geometry/flags.
        base: ElementBase,
        /// Text to display.
        text: &'a str,
    },
    /// Click button; reports on release inside its bounds.
    Button {
        /// Shared geometry/flags.
        base: ElementBase,
        /// Caption text.
        text: &'a str,
    },
    /// Horizontal value bar over the unit interval.
    Slider {
        /// Shared geometry/flags.
        base: ElementBase,
        /// Caption text.
        text: &'a str,
        /// Value in `[0, 1]` captured after this frame's clamping.
        value: f32,
    },
    /// Single-line editable text window.
    TextField {
        /// Shared geometry/flags.
        base: ElementBase,
        /// Placeholder prompt shown while the buffer is empty.
        prompt: &'a str,
        /// Field state viewed by the render pass.
        state: &'a TextFieldState,
        /// Number of visible columns.
        columns: u32,
    },
    /// Button that reports on every frame it is held down.
    HoldButton {
        /// Shared geometry/flags.
        base: ElementBase,
        /// Caption text.
        text: &'a str,
    },
}

impl Element<'_> {
    /// Returns the geometry/flags record shared by all variants.
    pub fn base(&self) -> &ElementBase {
        match self {
            Element::Label { base, .. }
            | Element::Button { base, .. }
            | Element::Slider { base, .. }
            | Element::TextField { base, .. }
            | Element::HoldButton { base, .. } => base,
        }
    }
}

/// Immediate-mode emission context for one frame of one UI region.
///
/// Widget calls measure their text, hit-test the pointer against the flow
/// cursor, append an [`Element`], advance the cursor, and return the
/// interaction result. Layout is pure sequential flow along one axis; set
/// [`Panel::x`]/[`Panel::y`] between calls to start rows or columns by hand.
///
/// A panel is built at the start of a frame and rendered at its end; the
/// element list is born empty at construction.
pub struct Panel<'a, F: Font, P: Pointer> {
    elems: Vec<Element<'a>>,
    capacity: usize,
    font: &'a F,
    pointer: &'a P,
    input: &'a Input,
    style: &'a Style,

    // can safely be modified by the caller between widget calls.
    /// Flow cursor, horizontal position.
    pub x: i32,
    /// Flow cursor, vertical position.
    pub y: i32,
    /// While `false`, widgets skip hit testing and render flat.
    pub active: bool,
    /// Advance the cursor along x instead of y.
    pub horizontal: bool,
}

impl<'a, F: Font, P: Pointer> Panel<'a, F, P> {
    /// Creates a panel whose element list holds at most `capacity` elements.
    ///
    /// The ceiling is hard: once reached, further widget calls do nothing
    /// and report no interaction.
    pub fn new(capacity: usize, x: i32, y: i32, font: &'a F, pointer: &'a P, input: &'a Input, style: &'a Style) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
            capacity,
            font,
            pointer,
            input,
            style,
            x,
            y,
            active: true,
            horizontal: false,
        }
    }

    /// Returns the elements emitted so far this frame.
    pub fn elements(&self) -> &[Element<'a>] { &self.elems }

    /// Returns the element capacity the panel was created with.
    pub fn capacity(&self) -> usize { self.capacity }

    fn flags(&self) -> ElementFlags {
        if self.active { ElementFlags::empty() } else { ElementFlags::INACTIVE }
    }

    fn pointer_inside(&self, w: i32, h: i32) -> bool {
        let m = self.pointer.position();
        m.x >= self.x && m.y >= self.y && m.x < self.x + w && m.y < self.y + h
    }

    fn advance(&mut self, size: Dimensioni) {
        if self.horizontal {
            self.x += size.width;
        } else {
            self.y += size.height;
        }
    }

    /// Moves the flow cursor by `(dx, dy)` without emitting an element.
    pub fn space(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Emits a line of text at the raw metrics of `text`, without padding.
    pub fn label(&mut self, text: &'a str) {
        if self.elems.len() >= self.capacity {
            return;
        }

        let size = self.font.text_size(text);
        let base = ElementBase {
            rect: rect(self.x, self.y, size.width, size.height),
            flags: self.flags(),
        };
        self.elems.push(Element::Label { base, text });
        self.advance(size);
    }

    /// Emits a button and returns `true` exactly once, on the frame the left
    /// button is released inside its bounds.
    ///
    /// Only the release position is tested; a press that started outside and
    /// is released inside still counts.
    pub fn button(&mut self, text: &'a str) -> bool {
        if self.elems.len() >= self.capacity {
            return false;
        }

        let mut size = self.font.text_size(text);
        size.width += 2 * self.style.padding;
        size.height += 2 * self.style.padding;

        let mut clicked = false;
        if self.active {
            clicked = self.input.mouse_released(MouseButton::Left) && self.pointer_inside(size.width, size.height);
        }

        let base = ElementBase {
            rect: rect(self.x, self.y, size.width, size.height),
            flags: self.flags(),
        };
        self.elems.push(Element::Button { base, text });
        self.advance(size);

        clicked
    }

    /// Emits a button that returns `true` on every frame the left button is
    /// held down inside its bounds, for continuous/repeat actions.
    pub fn hold_button(&mut self, text: &'a str) -> bool {
        if self.elems.len() >= self.capacity {
            return false;
        }

        let mut size = self.font.text_size(text);
        size.width += 2 * self.style.padding;
        size.height += 2 * self.style.padding;

        let mut held = false;
        if self.active {
            held = self.input.mouse_down(MouseButton::Left) && self.pointer_inside(size.width, size.height);
        }

        let base = ElementBase {
            rect: rect(self.x, self.y, size.width, size.height),
            flags: self.flags(),
        };
        self.elems.push(Element::HoldButton { base, text });
        self.advance(size);

        held
    }

    /// Emits a unit-interval slider and returns `true` on the frame the
    /// value was changed by interaction.
    ///
    /// On a left-button release inside the bounds the value becomes the
    /// pointer's relative x position. The value is clamped to `[0, 1]` on
    /// every call while the panel is active, so externally assigned
    /// out-of-range values are repaired even without interaction.
    pub fn slider(&mut self, text: &'a str, value: &mut f32) -> bool {
        if self.elems.len() >= self.capacity {
            return false;
        }

        let mut size = self.font.text_size(text);
        size.width += 2 * self.style.padding;
        size.height += 2 * self.style.padding;

        let mut changed = false;
        if self.active {
            let m = self.pointer.position();
            if self.input.mouse_released(MouseButton::Left) && self.pointer_inside(size.width, size.height) {
                *value = (m.x - self.x) as f32 / size.width as f32;
                changed = true;
            }

            *value = value.clamp(0.0, 1.0);
        }

        let base = ElementBase {
            rect: rect(self.x, self.y, size.width, size.height),
            flags: self.flags(),
        };
        self.elems.push(Element::Slider { base, text, value: *value });
        self.advance(size);

        changed
    }

    /// Emits an editable single-line text field showing `columns` characters
    /// and returns `true` when this frame's input mutated the field.
    ///
    /// A left-button release grants focus when it lands inside the bounds
    /// and revokes it otherwise; while focused, the frame's key and text
    /// input is applied to `state`. The element keeps a view of `state` for
    /// the render pass, so the state is borrowed until the panel is dropped.
    ///
    /// The field is sized and drawn from the metrics of a single space
    /// character: the font must be monospace, proportional fonts will
    /// misrender. `columns` must be at least 1.
    pub fn text_field(&mut self, prompt: &'a str, state: &'a mut TextFieldState, columns: u32) -> bool {
        if self.elems.len() >= self.capacity {
            return false;
        }

        let cell = self.font.text_size(" ");
        let size = Dimensioni::new(
            columns as i32 * cell.width + 2 * self.style.padding,
            cell.height + 2 * self.style.padding,
        );

        let mut changed = false;
        if self.active {
            if self.input.mouse_released(MouseButton::Left) {
                state.set_selected(self.pointer_inside(size.width, size.height));
            }

            if state.is_selected() {
                changed = state.apply_input(self.input, columns as usize);
            }
        }

        let base = ElementBase {
            rect: rect(self.x, self.y, size.width, size.height),
            flags: self.flags(),
        };
        self.elems.push(Element::TextField { base, prompt, state, columns });
        self.advance(size);

        changed
    }

    /// Draws the backing panel and every element through the renderer.
    ///
    /// No-op when nothing was emitted. The backing rectangle is the padded
    /// bounding box of all elements. Inactive elements draw one flat
    /// rectangle and nothing else. Hover/press styling is recomputed here
    /// from the live pointer and held-button state, not from state captured
    /// at emission time; keep widget calls and `render` inside the same
    /// frame or the visuals can disagree with the returned interactions.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        if self.elems.is_empty() {
            return;
        }

        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for elem in &self.elems {
            let r = elem.base().rect;
            min_x = min_x.min(r.x);
            min_y = min_y.min(r.y);
            max_x = max_x.max(r.x + r.width);
            max_y = max_y.max(r.y + r.height);
        }

        let pad = self.style.padding;
        renderer.render_rect(
            expand_rect(rect(min_x, min_y, max_x - min_x, max_y - min_y), pad),
            ControlColor::Panel,
        );

        let m = self.pointer.position();
        let held = self.input.mouse_down(MouseButton::Left);
        for elem in &self.elems {
            let r = elem.base().rect;

            if elem.base().flags.contains(ElementFlags::INACTIVE) {
                renderer.render_rect(r, ControlColor::Inactive);
                continue;
            }

            let hovered = m.x >= r.x && m.y >= r.y && m.x < r.x + r.width && m.y < r.y + r.height;

            match elem {
                Element::Label { text, .. } => {
                    renderer.render_text(r, text, ControlColor::LabelText);
                }
                Element::Button { text, .. } | Element::HoldButton { text, .. } => {
                    let (body, caption) = match (hovered, held) {
                        (true, true) => (ControlColor::ButtonPress, ControlColor::ButtonTextPress),
                        (true, false) => (ControlColor::ButtonHover, ControlColor::ButtonTextHover),
                        (false, _) => (ControlColor::Button, ControlColor::ButtonText),
                    };
                    renderer.render_rect(r, body);
                    renderer.render_text(inset(r, pad), text, caption);
                }
                Element::Slider { text, value, .. } => {
                    let (body, bar, caption) = match (hovered, held) {
                        (true, true) => (ControlColor::SliderPress, ControlColor::SliderBarPress, ControlColor::SliderTextPress),
                        (true, false) => (ControlColor::SliderHover, ControlColor::SliderBarHover, ControlColor::SliderTextHover),
                        (false, _) => (ControlColor::Slider, ControlColor::SliderBar, ControlColor::SliderText),
                    };
                    renderer.render_rect(r, body);
                    renderer.render_rect(rect(r.x, r.y, (*value * r.width as f32) as i32, r.height), bar);
                    renderer.render_text(inset(r, pad), text, caption);
                }
                Element::TextField { prompt, state, columns, .. } => {
                    let (body, content, bar, placeholder) = match (hovered, held) {
                        (true, true) => (
                            ControlColor::TextFieldPress,
                            ControlColor::TextFieldTextPress,
                            ControlColor::TextFieldBarPress,
                            ControlColor::TextFieldPromptPress,
                        ),
                        (true, false) => (
                            ControlColor::TextFieldHover,
                            ControlColor::TextFieldTextHover,
                            ControlColor::TextFieldBarHover,
                            ControlColor::TextFieldPromptHover,
                        ),
                        (false, _) => (
                            ControlColor::TextField,
                            ControlColor::TextFieldText,
                            ControlColor::TextFieldBar,
                            ControlColor::TextFieldPrompt,
                        ),
                    };
                    renderer.render_rect(r, body);

                    let span = r.width - 2 * pad;
                    let char_w = span / *columns as i32;
                    let char_h = r.height - 2 * pad;

                    let (text, first, color) = if state.text().is_empty() {
                        (*prompt, 0, placeholder)
                    } else {
                        (state.text(), state.first_visible(), content)
                    };

                    let mut dx = 0;
                    let mut glyph = [0u8; 4];
                    for ch in text.chars().skip(first) {
                        if dx >= span {
                            break;
                        }
                        renderer.render_text(rect(r.x + pad + dx, r.y + pad, char_w, char_h), ch.encode_utf8(&mut glyph), color);
                        dx += char_w;
                    }

                    if state.is_selected() {
                        let caret = (state.cursor() - state.first_visible()) as i32;
                        renderer.render_rect(rect(r.x + pad + caret * char_w, r.y + pad, self.style.caret_width, char_h), bar);
                    }
                }
            }
        }
    }
}

fn inset(r: Recti, pad: i32) -> Recti { rect(r.x + pad, r.y + pad, r.width - 2 * pad, r.height - 2 * pad) }
