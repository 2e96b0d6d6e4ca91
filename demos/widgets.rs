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
//! Windowed tour of every widget. Pass a monospace TTF path as the first
//! argument; defaults to the DejaVu mono font path.

use std::time::Duration;

use flowui::*;
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;

const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";

struct CanvasRenderer<'a> {
    canvas: &'a mut sdl2::render::WindowCanvas,
    font: &'a sdl2::ttf::Font<'a, 'static>,
    style: &'a Style,
}

impl CanvasRenderer<'_> {
    fn resolve(&self, color: ControlColor) -> SdlColor {
        let c = self.style.colors[color as usize];
        SdlColor::RGBA(c.r, c.g, c.b, c.a)
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render_rect(&mut self, r: Recti, color: ControlColor) {
        if r.width <= 0 || r.height <= 0 {
            return;
        }
        self.canvas.set_draw_color(self.resolve(color));
        let _ = self.canvas.fill_rect(Rect::new(r.x, r.y, r.width as u32, r.height as u32));
    }

    fn render_text(&mut self, r: Recti, text: &str, color: ControlColor) {
        if text.is_empty() || r.width <= 0 || r.height <= 0 {
            return;
        }
        let Ok(surface) = self.font.render(text).blended(self.resolve(color)) else {
            return;
        };
        let creator = self.canvas.texture_creator();
        let Ok(texture) = creator.create_texture_from_surface(&surface) else {
            return;
        };
        let _ = self.canvas.copy(&texture, None, Rect::new(r.x, r.y, r.width as u32, r.height as u32));
    }
}

fn main() -> Result<(), String> {
    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let ttf = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video
        .window("flowui widgets", 800, 600)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);

    let font_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_FONT.to_string());
    let font = ttf.load_font(&font_path, 16)?;

    let mut pump = sdl.event_pump()?;
    let style = Style::default();
    let mut input = Input::new();
    let mut ticker = Ticker::new(Duration::from_micros(16_667));

    let mut volume = 0.5f32;
    let mut name = TextFieldState::new(32);
    let mut clicks = 0u32;
    let mut enabled = true;

    'running: loop {
        ticker.begin();

        for event in pump.poll_iter() {
            match event {
                SdlEvent::Quit { .. } | SdlEvent::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'running,
                _ => {}
            }
            if let Some(converted) = convert_event(&event) {
                input.handle_event(&converted);
            }
        }

        let clicks_text = format!("clicks: {}", clicks);
        let volume_text = format!("volume: {:.2}", volume);
        let name_text = format!("name: {}", name.text());

        canvas.set_draw_color(SdlColor::RGB(40, 44, 52));
        canvas.clear();

        {
            let pointer = SdlPointer::new(&sdl, &pump, canvas.window());
            let mut panel = Panel::new(16, 40, 40, &font, &pointer, &input, &style);

            panel.label("flowui widgets");
            panel.space(0, 8);
            if panel.button("click me") {
                clicks += 1;
            }
            if panel.hold_button("hold to spin") {
                volume = (volume + 0.01) % 1.0;
            }
            panel.slider("volume", &mut volume);
            panel.text_field("your name", &mut name, 16);
            if panel.button(if enabled { "disable row" } else { "enable row" }) {
                enabled = !enabled;
            }
            panel.space(0, 8);
            panel.active = enabled;
            panel.horizontal = true;
            panel.label(&clicks_text);
            panel.space(12, 0);
            panel.label(&volume_text);
            panel.space(12, 0);
            panel.label(&name_text);

            let mut renderer = CanvasRenderer {
                canvas: &mut canvas,
                font: &font,
                style: &style,
            };
            panel.render(&mut renderer);
        }

        canvas.present();
        input.end_frame();
        ticker.end();
    }

    Ok(())
}
