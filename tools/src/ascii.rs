//! Terminal render target: one character per grid cell.

use multiverse_core::{
    color::Rgb,
    error::GalaxyResult,
    render::{DrawCommand, RenderTarget},
};
use std::io::Write;

pub struct AsciiCanvas<W: Write> {
    out:       W,
    cell_size: i64,
    cols:      usize,
    rows:      usize,
    chars:     Vec<char>,
    notes:     Vec<String>,
}

impl<W: Write> AsciiCanvas<W> {
    /// `cell_size` logical pixels map to one character.
    pub fn new(out: W, width: i64, height: i64, cell_size: i64) -> Self {
        let cols = (width / cell_size).max(0) as usize;
        let rows = (height / cell_size).max(0) as usize;
        Self {
            out,
            cell_size,
            cols,
            rows,
            chars: vec![' '; cols * rows],
            notes: Vec::new(),
        }
    }

    fn slot(&self, x: i64, y: i64) -> Option<usize> {
        let (cx, cy) = (x.div_euclid(self.cell_size), y.div_euclid(self.cell_size));
        if cx < 0 || cy < 0 || cx as usize >= self.cols || cy as usize >= self.rows {
            return None;
        }
        Some(cy as usize * self.cols + cx as usize)
    }

    fn put(&mut self, x: i64, y: i64, ch: char) {
        if let Some(i) = self.slot(x, y) {
            self.chars[i] = ch;
        }
    }
}

/// Brightest channel picks the glyph; near-white is a plain star.
fn glyph(color: Rgb) -> char {
    let Rgb { r, g, b } = color;
    if r > 200 && g > 200 && b > 200 {
        '*'
    } else if r > 200 && g > 200 {
        'Y'
    } else if r > 200 && g > 100 {
        'O'
    } else if r > 200 {
        'R'
    } else if b > 200 {
        'B'
    } else {
        '+'
    }
}

impl<W: Write> RenderTarget for AsciiCanvas<W> {
    fn draw(&mut self, cmd: &DrawCommand) -> GalaxyResult<()> {
        match cmd {
            DrawCommand::Fill { .. } => {
                self.chars.iter_mut().for_each(|c| *c = '.');
                self.notes.clear();
            }
            DrawCommand::Circle { x, y, color, .. } => self.put(*x, *y, glyph(*color)),
            DrawCommand::CircleOutline { x, y, .. } => self.put(*x, *y, '@'),
            DrawCommand::Text { text, .. } => self.notes.push(text.replace('\n', "  ")),
        }
        Ok(())
    }

    fn present(&mut self) -> GalaxyResult<()> {
        for row in self.chars.chunks(self.cols.max(1)) {
            let line: String = row.iter().collect();
            writeln!(self.out, "{line}")?;
        }
        for note in &self.notes {
            writeln!(self.out, "{note}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("flush on shutdown failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiverse_core::color::{GREEN, WHITE};

    #[test]
    fn draws_bodies_rings_and_notes() {
        let mut buf = Vec::new();
        {
            let mut canvas = AsciiCanvas::new(&mut buf, 48, 32, 16);
            canvas.draw(&DrawCommand::Fill { color: Rgb::default() }).unwrap();
            canvas
                .draw(&DrawCommand::Circle { x: 8, y: 8, radius: 3.0, color: WHITE })
                .unwrap();
            canvas
                .draw(&DrawCommand::CircleOutline { x: 40, y: 24, radius: 8.0, color: GREEN, width: 1 })
                .unwrap();
            canvas
                .draw(&DrawCommand::Text {
                    x: 10,
                    y: 10,
                    text: "x=0\ny=0".into(),
                    color: WHITE,
                    font: "mono-medium".into(),
                })
                .unwrap();
            canvas.present().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "*..\n..@\nx=0  y=0\n\n");
    }
}
