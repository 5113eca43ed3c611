//! Rotation-aware text layout on top of single-pixel access.
//!
//! Glyph column bitmaps come from the device's current font table; this
//! module only decides where each column bit lands. Text can run in four
//! directions, always anchored so the first character of the string sits at
//! the `(x, y)` passed to [`Panel::draw_text`].
//!
//! Both the glyph off-bits and the inter-character spacing columns are
//! actively drawn in the *inverse* of the requested state, so text drawn
//! over existing pixels carries its own background.

use heapless::Vec;

use crate::device::{MAX_GLYPH_COLUMNS, PixelDevice};
use crate::panel::Panel;

/// Writing direction for [`Panel::draw_text`], anchored to the string's
/// first character.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRotation {
    /// First character leftmost, text running right (normal orientation).
    #[default]
    Rot0,
    /// First character lowest, text running up.
    Rot90,
    /// First character rightmost, text running left, upside down.
    Rot180,
    /// First character highest, text running down.
    Rot270,
}

impl<D: PixelDevice> Panel<D> {
    /// Pixel length of `text` along its writing direction, including one
    /// inter-character spacing gap between consecutive characters (none
    /// after the last).
    ///
    /// Matches the span [`draw_text`](Self::draw_text) actually occupies.
    #[must_use]
    pub fn text_width(&self, text: &str) -> u16 {
        let font = self.device().font();
        let spacing = u16::from(self.char_spacing());
        let bytes = text.as_bytes();

        let mut sum = 0;
        for (index, &code) in bytes.iter().enumerate() {
            sum += font.width_of(code);
            if index + 1 < bytes.len() {
                sum += spacing;
            }
        }
        sum
    }

    /// Draw `text` with its first character anchored at `(x, y)` (the
    /// character cell's corner nearest the string start), running in the
    /// direction given by `rotation`.
    ///
    /// Pixels that fall outside the panel are skipped; the string keeps
    /// drawing as far as it fits. Returns the pixel length the string
    /// occupied along its writing direction.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        rotation: TextRotation,
        state: bool,
    ) -> u16 {
        let font = self.device().font();
        let height = font.height;
        let spacing = self.char_spacing();
        let bytes = text.as_bytes();

        trace!("text at ({}, {}), {} chars", x, y, bytes.len());

        self.suspend_updates();

        let mut pen_x = i32::from(x);
        let mut pen_y = i32::from(y);
        let mut sum = 0;

        for (index, &code) in bytes.iter().enumerate() {
            let mut columns: Vec<u8, MAX_GLYPH_COLUMNS> = Vec::new();
            if let Some(glyph) = font.glyph(code) {
                for &column in glyph.columns {
                    if columns.push(column).is_err() {
                        break;
                    }
                }
            }
            if index + 1 < bytes.len() {
                // Spacing columns are drawn too: they blank the gap.
                for _ in 0..spacing {
                    if columns.push(0).is_err() {
                        break;
                    }
                }
            }
            let size = columns.len() as u16;
            sum += size;

            for (offset, &column) in columns.iter().enumerate() {
                let offset = offset as i32;
                for bit in 0..i32::from(height) {
                    let lit = bit < 8 && (column >> bit) & 1 != 0;
                    let pixel_state = if lit { state } else { !state };
                    let (px, py) = match rotation {
                        TextRotation::Rot0 => (pen_x + offset, pen_y - bit),
                        TextRotation::Rot90 => (pen_x + bit, pen_y + offset),
                        TextRotation::Rot180 => (pen_x - offset, pen_y + bit),
                        TextRotation::Rot270 => (pen_x - bit, pen_y - offset),
                    };
                    let _ = self.set_point_signed(px, py, pixel_state);
                }
            }

            match rotation {
                TextRotation::Rot0 => pen_x += i32::from(size),
                TextRotation::Rot90 => pen_y += i32::from(size),
                TextRotation::Rot180 => pen_x -= i32::from(size),
                TextRotation::Rot270 => pen_y -= i32::from(size),
            }
        }

        self.resume_updates();
        sum
    }
}
