//! The seam between the panel and the hardware driver.
//!
//! A [`PixelDevice`] is the chain-level driver collaborator: it owns the
//! on/off state of every LED, shifts bits out to the cascaded chips, and
//! stores the current font table. The panel never talks to the wire; it only
//! calls the point-level and control-level operations declared here, always
//! after translating panel coordinates into chain addresses.
//!
//! Chain addressing is flat: `row` is `0..8` within a device block and `col`
//! runs `0..devices*8` along the whole cascade, exactly as the hardware
//! exposes its digit registers.

/// Pixel height and width of one device block in the cascade.
pub const BLOCK_SIZE: u16 = 8;

/// Largest number of columns a single glyph may occupy, including the
/// inter-character spacing appended while rendering text.
pub const MAX_GLYPH_COLUMNS: usize = 32;

/// One character of a [`FontTable`].
///
/// `columns` holds one byte per pixel column, bit 0 = top row of the glyph.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Character code this glyph renders (ASCII).
    pub code: u8,
    /// Column bitmaps, left to right.
    pub columns: &'static [u8],
}

/// A variable-width column-bitmap font, as stored by the device driver.
///
/// Fonts are plain static data so they can live in flash. Glyph widths vary
/// per character; characters without a glyph render as zero width.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontTable {
    /// Pixel height of every glyph in the table.
    pub height: u16,
    /// Widest glyph in the table, in pixel columns.
    pub max_width: u16,
    /// Glyph definitions, in no particular order.
    pub glyphs: &'static [Glyph],
}

impl FontTable {
    /// Look up the glyph for a character code.
    #[must_use]
    pub fn glyph(&self, code: u8) -> Option<&'static Glyph> {
        self.glyphs.iter().find(|glyph| glyph.code == code)
    }

    /// Width of a character in pixel columns, zero when the font has no
    /// glyph for it.
    #[must_use]
    pub fn width_of(&self, code: u8) -> u16 {
        self.glyph(code)
            .map_or(0, |glyph| glyph.columns.len() as u16)
    }
}

/// Chain-level LED driver operations consumed by [`Panel`](crate::Panel).
///
/// Implementations maintain the full pixel buffer for the cascade and decide
/// when buffered changes reach the hardware: while redraw is disabled via
/// [`set_redraw`](Self::set_redraw), point writes only touch the buffer and a
/// flush happens on the next [`flush`](Self::flush) or redraw re-enable.
///
/// The trait is also implemented for `&mut D`, so a panel can borrow a driver
/// that outlives it instead of taking ownership.
pub trait PixelDevice {
    /// One-time hardware initialization.
    fn begin(&mut self);

    /// Number of device blocks in the cascade.
    fn device_count(&self) -> u16;

    /// Set a single LED at a chain address. Returns `false` when the address
    /// is outside the chain.
    fn set_point(&mut self, row: u16, col: u16, state: bool) -> bool;

    /// Read a single LED at a chain address; `false` when off or when the
    /// address is outside the chain.
    fn get_point(&self, row: u16, col: u16) -> bool;

    /// Enable or disable pushing buffered changes to the hardware. Enabling
    /// flushes anything pending.
    fn set_redraw(&mut self, enabled: bool);

    /// Force a flush of buffered changes regardless of the redraw setting.
    fn flush(&mut self);

    /// Set the display brightness, `0..=15`.
    fn set_intensity(&mut self, intensity: u8);

    /// Clear the buffers of `count` devices starting at `first_device`.
    fn clear(&mut self, first_device: u16, count: u16);

    /// Select the font used for glyph lookups; `None` restores the driver's
    /// default font.
    fn set_font(&mut self, font: Option<&'static FontTable>);

    /// The currently selected font table.
    fn font(&self) -> &'static FontTable;
}

impl<D: PixelDevice + ?Sized> PixelDevice for &mut D {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn device_count(&self) -> u16 {
        (**self).device_count()
    }

    fn set_point(&mut self, row: u16, col: u16, state: bool) -> bool {
        (**self).set_point(row, col, state)
    }

    fn get_point(&self, row: u16, col: u16) -> bool {
        (**self).get_point(row, col)
    }

    fn set_redraw(&mut self, enabled: bool) {
        (**self).set_redraw(enabled);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn set_intensity(&mut self, intensity: u8) {
        (**self).set_intensity(intensity);
    }

    fn clear(&mut self, first_device: u16, count: u16) {
        (**self).clear(first_device, count);
    }

    fn set_font(&mut self, font: Option<&'static FontTable>) {
        (**self).set_font(font);
    }

    fn font(&self) -> &'static FontTable {
        (**self).font()
    }
}
