//! An in-memory [`PixelDevice`] for host tests and experiments.
//!
//! [`SimDevice`] keeps the same state a real cascade keeps: one byte of row
//! bits per column register, eight registers per device. It also counts how
//! often buffered changes would have reached the hardware, which lets tests
//! assert that shape drawing batches its pixel writes into one update.

use crate::device::{BLOCK_SIZE, FontTable, Glyph, PixelDevice};

/// Compact 5×7 font carried by the simulator: space, digits, and a handful
/// of uppercase letters. Column bytes, bit 0 = top row.
pub const SIM_FONT: FontTable = FontTable {
    height: 7,
    max_width: 5,
    glyphs: &[
        Glyph {
            code: b' ',
            columns: &[0x00, 0x00],
        },
        Glyph {
            code: b'0',
            columns: &[0x3e, 0x51, 0x49, 0x45, 0x3e],
        },
        Glyph {
            code: b'1',
            columns: &[0x00, 0x42, 0x7f, 0x40, 0x00],
        },
        Glyph {
            code: b'2',
            columns: &[0x42, 0x61, 0x51, 0x49, 0x46],
        },
        Glyph {
            code: b'3',
            columns: &[0x21, 0x41, 0x45, 0x4b, 0x31],
        },
        Glyph {
            code: b'4',
            columns: &[0x18, 0x14, 0x12, 0x7f, 0x10],
        },
        Glyph {
            code: b'5',
            columns: &[0x27, 0x45, 0x45, 0x45, 0x39],
        },
        Glyph {
            code: b'6',
            columns: &[0x3c, 0x4a, 0x49, 0x49, 0x30],
        },
        Glyph {
            code: b'7',
            columns: &[0x01, 0x71, 0x09, 0x05, 0x03],
        },
        Glyph {
            code: b'8',
            columns: &[0x36, 0x49, 0x49, 0x49, 0x36],
        },
        Glyph {
            code: b'9',
            columns: &[0x06, 0x49, 0x49, 0x29, 0x1e],
        },
        Glyph {
            code: b'A',
            columns: &[0x7e, 0x11, 0x11, 0x11, 0x7e],
        },
        Glyph {
            code: b'B',
            columns: &[0x7f, 0x49, 0x49, 0x49, 0x36],
        },
        Glyph {
            code: b'C',
            columns: &[0x3e, 0x41, 0x41, 0x41, 0x22],
        },
        Glyph {
            code: b'R',
            columns: &[0x7f, 0x09, 0x19, 0x29, 0x46],
        },
        Glyph {
            code: b'S',
            columns: &[0x46, 0x49, 0x49, 0x49, 0x31],
        },
        Glyph {
            code: b'T',
            columns: &[0x01, 0x01, 0x7f, 0x01, 0x01],
        },
        Glyph {
            code: b'U',
            columns: &[0x3f, 0x40, 0x40, 0x40, 0x3f],
        },
    ],
};

/// Simulated chain of `DEVICES` 8×8 modules.
#[derive(Clone, Debug)]
pub struct SimDevice<const DEVICES: usize> {
    // columns[device][col] holds the row bits of one column register.
    columns: [[u8; 8]; DEVICES],
    redraw_enabled: bool,
    dirty: bool,
    flush_count: usize,
    intensity: u8,
    font: &'static FontTable,
}

impl<const DEVICES: usize> SimDevice<DEVICES> {
    /// Create a blank chain with redraw enabled and the built-in font.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: [[0; 8]; DEVICES],
            redraw_enabled: true,
            dirty: false,
            flush_count: 0,
            intensity: 8,
            font: &SIM_FONT,
        }
    }

    /// How many times buffered changes were pushed to the "hardware".
    #[must_use]
    pub const fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Number of LEDs currently on across the whole chain.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .map(|register| register.count_ones() as usize)
            .sum()
    }

    /// The configured brightness, `0..=15`.
    #[must_use]
    pub const fn intensity(&self) -> u8 {
        self.intensity
    }

    const fn in_range(row: u16, col: u16) -> bool {
        row < BLOCK_SIZE && (col as usize) < DEVICES * BLOCK_SIZE as usize
    }
}

impl<const DEVICES: usize> Default for SimDevice<DEVICES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEVICES: usize> PixelDevice for SimDevice<DEVICES> {
    fn begin(&mut self) {
        self.columns = [[0; 8]; DEVICES];
        self.redraw_enabled = true;
        self.dirty = false;
    }

    fn device_count(&self) -> u16 {
        DEVICES as u16
    }

    fn set_point(&mut self, row: u16, col: u16, state: bool) -> bool {
        if !Self::in_range(row, col) {
            return false;
        }
        let device = (col / BLOCK_SIZE) as usize;
        let register = (col % BLOCK_SIZE) as usize;
        let mask = 1u8 << row;
        if state {
            self.columns[device][register] |= mask;
        } else {
            self.columns[device][register] &= !mask;
        }
        self.dirty = true;
        if self.redraw_enabled {
            self.flush();
        }
        true
    }

    fn get_point(&self, row: u16, col: u16) -> bool {
        if !Self::in_range(row, col) {
            return false;
        }
        let device = (col / BLOCK_SIZE) as usize;
        let register = (col % BLOCK_SIZE) as usize;
        self.columns[device][register] & (1u8 << row) != 0
    }

    fn set_redraw(&mut self, enabled: bool) {
        self.redraw_enabled = enabled;
        if enabled {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.dirty {
            self.flush_count += 1;
            self.dirty = false;
        }
    }

    fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity & 0x0f;
    }

    fn clear(&mut self, first_device: u16, count: u16) {
        let first = first_device as usize;
        let last = (first_device + count) as usize;
        for device in first..last.min(DEVICES) {
            self.columns[device] = [0; 8];
        }
        self.dirty = true;
        if self.redraw_enabled {
            self.flush();
        }
    }

    fn set_font(&mut self, font: Option<&'static FontTable>) {
        self.font = font.unwrap_or(&SIM_FONT);
    }

    fn font(&self) -> &'static FontTable {
        self.font
    }
}
