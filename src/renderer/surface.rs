//! Minimal 2D drawing surface
//!
//! The renderer only needs a handful of Canvas 2D primitives. They are
//! assumed to be synchronous and infallible.

/// Drawing primitives the renderer issues, in canvas pixel coordinates
pub trait Surface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[cfg(target_arch = "wasm32")]
impl Surface for web_sys::CanvasRenderingContext2d {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.clear_rect(x, y, width, height);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        web_sys::CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn set_font(&mut self, font: &str) {
        web_sys::CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = web_sys::CanvasRenderingContext2d::fill_text(self, text, x, y) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// A recorded drawing call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(f64, f64, f64, f64),
    Fill(String),
    Rect(f64, f64, f64, f64),
    Font(String),
    Text(String, f64, f64),
}

/// Surface that records every call, for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingSurface {
    /// Rectangles filled with the given color, in draw order
    pub fn rects_in(&self, color: &str) -> Vec<(f64, f64, f64, f64)> {
        let mut current = None;
        let mut rects = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Fill(c) => current = Some(c.as_str()),
                DrawCommand::Rect(x, y, w, h) if current == Some(color) => {
                    rects.push((*x, *y, *w, *h))
                }
                _ => {}
            }
        }
        rects
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear(x, y, width, height));
    }

    fn set_fill(&mut self, color: &str) {
        self.commands.push(DrawCommand::Fill(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect(x, y, width, height));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::Text(text.to_string(), x, y));
    }
}
