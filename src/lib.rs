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
#![deny(missing_docs)]
//! `flowui` is an immediate-mode UI panel toolkit for SDL2-style 2D backends.
//! Widgets are re-declared every frame against a flow cursor; each widget call
//! reads a frame-coherent [`Input`] snapshot, appends a render-ready
//! [`Element`] descriptor, and returns its interaction result immediately.
//! Rendering and text measurement stay with the host through the [`Renderer`]
//! and [`Font`] collaborator traits.

mod angles;
mod clock;
mod input;
mod options;
mod panel;
mod textfield;

#[cfg(feature = "sdl2-backend")]
mod backend;

pub use angles::*;
pub use clock::*;
pub use input::*;
pub use options::*;
pub use panel::*;
pub use rs_math3d::{Dimensioni, Recti, Vec2i};
pub use textfield::*;

#[cfg(feature = "sdl2-backend")]
pub use backend::*;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Symbolic color roles passed to the [`Renderer`] callbacks.
///
/// The core never resolves colors itself; the host maps each role to an RGBA
/// value, typically through [`Style::colors`].
pub enum ControlColor {
    /// Backing panel rectangle.
    Panel = 0,
    /// Label text.
    LabelText,
    /// Button background.
    Button,
    /// Button background while pressed.
    ButtonPress,
    /// Button background while hovered.
    ButtonHover,
    /// Button text.
    ButtonText,
    /// Button text while pressed.
    ButtonTextPress,
    /// Button text while hovered.
    ButtonTextHover,
    /// Slider background.
    Slider,
    /// Slider background while pressed.
    SliderPress,
    /// Slider background while hovered.
    SliderHover,
    /// Slider fill bar.
    SliderBar,
    /// Slider fill bar while pressed.
    SliderBarPress,
    /// Slider fill bar while hovered.
    SliderBarHover,
    /// Slider text.
    SliderText,
    /// Slider text while pressed.
    SliderTextPress,
    /// Slider text while hovered.
    SliderTextHover,
    /// Text field background.
    TextField,
    /// Text field background while pressed.
    TextFieldPress,
    /// Text field background while hovered.
    TextFieldHover,
    /// Text field content text.
    TextFieldText,
    /// Text field content text while pressed.
    TextFieldTextPress,
    /// Text field content text while hovered.
    TextFieldTextHover,
    /// Text field caret bar.
    TextFieldBar,
    /// Text field caret bar while pressed.
    TextFieldBarPress,
    /// Text field caret bar while hovered.
    TextFieldBarHover,
    /// Text field placeholder prompt.
    TextFieldPrompt,
    /// Text field placeholder prompt while pressed.
    TextFieldPromptPress,
    /// Text field placeholder prompt while hovered.
    TextFieldPromptHover,
    /// Flat fill used for widgets emitted by an inactive panel.
    Inactive,
}

impl ControlColor {
    /// Number of color roles, sized for [`Style::colors`].
    pub const COUNT: usize = Self::Inactive as usize + 1;
}

/// Trait implemented by render backends driven by [`Panel::render`].
///
/// The panel hands over fully resolved pixel geometry and a symbolic color
/// role; palette, font, and the actual draw calls belong to the implementor.
pub trait Renderer {
    /// Fills a rectangle with the color mapped to `color`.
    fn render_rect(&mut self, rect: Recti, color: ControlColor);
    /// Draws `text` fitted into `rect` with the color mapped to `color`.
    fn render_text(&mut self, rect: Recti, text: &str, color: ControlColor);
}

/// Text measurement collaborator used to size widgets.
///
/// Called once per widget per frame without caching, so implementations
/// should be cheap or memoize internally.
pub trait Font {
    /// Returns the pixel extent of `text` under this font.
    fn text_size(&self, text: &str) -> Dimensioni;
}

/// Resolves the pointer position for one specific window.
///
/// Implementations must report `(0, 0)` whenever that window does not hold
/// OS input focus, so hit tests never see coordinates belonging to another
/// window. Queried fresh on every call.
pub trait Pointer {
    /// Returns the current pointer position, or `(0, 0)` without focus.
    fn position(&self) -> Vec2i;
}

#[derive(Copy, Clone)]
/// Visual constants shared by every panel of an application.
pub struct Style {
    /// Inner padding applied to button, slider, hold-button, and text-field
    /// frames on both axes. Labels are laid out unpadded.
    pub padding: i32,
    /// Width in pixels of the text-field caret bar.
    pub caret_width: i32,
    /// Default palette indexed by [`ControlColor`]; hosts may replace it
    /// wholesale.
    pub colors: [Color; ControlColor::COUNT],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 5,
            caret_width: 2,
            colors: [
                color(0, 0, 0, 128),       // panel
                color(255, 255, 255, 255), // label text
                color(255, 255, 255, 128), // button
                color(0, 0, 0, 255),       // button press
                color(128, 128, 128, 255), // button hover
                color(255, 255, 255, 255), // button text
                color(255, 255, 255, 255), // button press text
                color(255, 255, 255, 255), // button hover text
                color(0, 0, 0, 128),       // slider
                color(0, 0, 0, 255),       // slider press
                color(0, 0, 0, 255),       // slider hover
                color(128, 128, 128, 255), // slider bar
                color(128, 128, 128, 255), // slider press bar
                color(128, 128, 128, 255), // slider hover bar
                color(255, 255, 255, 255), // slider text
                color(255, 255, 255, 255), // slider press text
                color(255, 255, 255, 255), // slider hover text
                color(0, 0, 0, 128),       // text field
                color(0, 0, 0, 255),       // text field press
                color(0, 0, 0, 255),       // text field hover
                color(255, 255, 255, 255), // text field text
                color(255, 255, 255, 255), // text field press text
                color(255, 255, 255, 255), // text field hover text
                color(255, 255, 255, 255), // text field bar
                color(255, 255, 255, 255), // text field press bar
                color(255, 255, 255, 255), // text field hover bar
                color(128, 128, 128, 255), // text field prompt
                color(128, 128, 128, 255), // text field press prompt
                color(128, 128, 128, 255), // text field hover prompt
                color(0, 0, 0, 128),       // inactive
            ],
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub const fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Expands (or shrinks) a rectangle uniformly on all sides.
pub fn expand_rect(r: Recti, n: i32) -> Recti { rect(r.x - n, r.y - n, r.width + n * 2, r.height + n * 2) }
