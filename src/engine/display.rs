// Monochrome display interface

use glam::{IVec2, UVec2};

/// Display width in pixels
pub const DISPLAY_WIDTH: i32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: i32 = 64;

/// Glyph cell width of the built-in font
pub const GLYPH_WIDTH: i32 = 8;

/// Glyph cell height of the built-in font
pub const GLYPH_HEIGHT: i32 = 8;

/// Pixel width of `text` in the built-in font
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_WIDTH
}

/// Framebuffer-backed display
///
/// Every render pass is `clear`, any number of draw calls, then exactly one
/// `present`.
pub trait Display {
    /// Blank the framebuffer
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, pos: IVec2, text: &str);

    /// Outline a rectangle
    fn draw_rect(&mut self, origin: IVec2, size: UVec2);

    /// Push the framebuffer to the panel
    fn present(&mut self);

    /// Draw `text` horizontally centered at row `y`
    fn draw_text_centered(&mut self, text: &str, y: i32) {
        let x = (DISPLAY_WIDTH - text_width(text)).max(0) / 2;
        self.draw_text(IVec2::new(x, y), text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positions(Vec<IVec2>);

    impl Display for Positions {
        fn clear(&mut self) {}
        fn draw_text(&mut self, pos: IVec2, _text: &str) {
            self.0.push(pos);
        }
        fn draw_rect(&mut self, _origin: IVec2, _size: UVec2) {}
        fn present(&mut self) {}
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("Resp"), 32);
    }

    #[test]
    fn test_centered_text() {
        let mut display = Positions(Vec::new());
        display.draw_text_centered("Correct!", 8);
        assert_eq!(display.0, vec![IVec2::new(32, 8)]);
    }

    #[test]
    fn test_centered_text_wider_than_display() {
        let mut display = Positions(Vec::new());
        display.draw_text_centered("this line is far too long", 0);
        assert_eq!(display.0, vec![IVec2::new(0, 0)]);
    }
}
