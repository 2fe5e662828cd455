// Text-mode framebuffer

use std::io::Write;

use glam::{IVec2, UVec2};
use log::warn;

use crate::engine::display::{Display, DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::engine::DeviceError;

const COLS: usize = (DISPLAY_WIDTH / GLYPH_WIDTH) as usize;
const ROWS: usize = (DISPLAY_HEIGHT / GLYPH_HEIGHT) as usize;

/// Display that renders each glyph cell as one character
///
/// Pixel coordinates are mapped to 8x8 cells. Rectangle outlines only fill
/// cells that no text occupies. A frame is written out on `present` only
/// when it differs from the previous one.
pub struct ConsoleDisplay<W: Write> {
    cells: [[char; COLS]; ROWS],
    last_frame: String,
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            cells: [[' '; COLS]; ROWS],
            last_frame: String::new(),
            out,
        }
    }

    /// Cell containing pixel `pos`, `None` when off screen
    fn cell(pos: IVec2) -> Option<(usize, usize)> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (col, row) = ((pos.x / GLYPH_WIDTH) as usize, (pos.y / GLYPH_HEIGHT) as usize);
        (col < COLS && row < ROWS).then_some((row, col))
    }

    fn put_edge(&mut self, col: i32, row: i32, edge: char) {
        if col < 0 || row < 0 || col as usize >= COLS || row as usize >= ROWS {
            return;
        }
        let cell = &mut self.cells[row as usize][col as usize];
        if *cell == ' ' {
            *cell = edge;
        } else if matches!(*cell, '-' | '|' | '+') && *cell != edge {
            *cell = '+';
        }
    }

    fn render_frame(&self) -> String {
        let border = format!("+{}+\n", "-".repeat(COLS));
        let mut frame = border.clone();
        for row in &self.cells {
            frame.push('|');
            frame.extend(row.iter());
            frame.push_str("|\n");
        }
        frame.push_str(&border);
        frame
    }

    fn write_frame(&mut self, frame: &str) -> Result<(), DeviceError> {
        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(DeviceError::Display)
    }

    /// The underlying writer
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn clear(&mut self) {
        self.cells = [[' '; COLS]; ROWS];
    }

    fn draw_text(&mut self, pos: IVec2, text: &str) {
        let Some((row, first_col)) = Self::cell(pos) else {
            return;
        };
        for (col, ch) in (first_col..COLS).zip(text.chars()) {
            self.cells[row][col] = ch;
        }
    }

    fn draw_rect(&mut self, origin: IVec2, size: UVec2) {
        if size.x == 0 || size.y == 0 {
            return;
        }
        let far = origin + size.as_ivec2() - IVec2::ONE;
        let (left, top) = (origin.x.div_euclid(GLYPH_WIDTH), origin.y.div_euclid(GLYPH_HEIGHT));
        let (right, bottom) = (far.x.div_euclid(GLYPH_WIDTH), far.y.div_euclid(GLYPH_HEIGHT));

        for col in left..=right {
            self.put_edge(col, top, '-');
            self.put_edge(col, bottom, '-');
        }
        for row in top..=bottom {
            self.put_edge(left, row, '|');
            self.put_edge(right, row, '|');
        }
    }

    fn present(&mut self) {
        let frame = self.render_frame();
        if frame == self.last_frame {
            return;
        }
        if let Err(err) = self.write_frame(&frame) {
            warn!("{}", err);
        }
        self.last_frame = frame;
    }
}
