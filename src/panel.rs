//! The panel object: geometry, configuration, and single-pixel access.
//!
//! [`Panel`] wraps a [`PixelDevice`] and is the single choke point through
//! which every drawing primitive reads or writes a pixel. It owns the
//! panel-wide configuration (device grid size, rotation, auto-update,
//! character spacing) and performs bounds checking before any address
//! translation reaches the device.

pub mod translate;

use crate::device::{FontTable, PixelDevice};
use crate::error::{Error, Result};

/// Pixel columns inserted between characters until changed with
/// [`Panel::set_char_spacing`].
pub const CHAR_SPACING_DEFAULT: u8 = 1;

/// A rectangular LED panel built from a zig-zag cascade of 8×8 modules.
///
/// Generic over the device driver `D`; pass a `&mut` driver to keep ownership
/// outside the panel, or move a driver in to let the panel own it.
///
/// See the [crate docs](crate) for the coordinate system and an example.
#[derive(Debug)]
pub struct Panel<D> {
    device: D,
    x_devices: u8,
    y_devices: u8,
    rotated: bool,
    auto_update: bool,
    char_spacing: u8,
}

impl<D: PixelDevice> Panel<D> {
    /// Create a panel over `device` with a module grid of
    /// `x_devices × y_devices`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDevices`] when either axis is zero; a degenerate
    /// coordinate space is rejected at construction.
    pub fn new(device: D, x_devices: u8, y_devices: u8) -> Result<Self> {
        if x_devices == 0 || y_devices == 0 {
            return Err(Error::ZeroDevices {
                x_devices,
                y_devices,
            });
        }
        debug_assert!(
            device.device_count() >= u16::from(x_devices) * u16::from(y_devices),
            "device chain shorter than the module grid"
        );
        Ok(Self {
            device,
            x_devices,
            y_devices,
            rotated: false,
            auto_update: true,
            char_spacing: CHAR_SPACING_DEFAULT,
        })
    }

    /// One-time initialization: brings up the device and resets the
    /// character spacing and auto-update defaults.
    pub fn begin(&mut self) {
        self.device.begin();
        self.char_spacing = CHAR_SPACING_DEFAULT;
        self.auto_update = true;
    }

    /// Largest valid x coordinate.
    #[must_use]
    pub const fn x_max(&self) -> u16 {
        translate::x_max(self.x_devices, self.y_devices, self.rotated)
    }

    /// Largest valid y coordinate.
    #[must_use]
    pub const fn y_max(&self) -> u16 {
        translate::y_max(self.x_devices, self.y_devices, self.rotated)
    }

    /// Module count across the panel width.
    #[must_use]
    pub const fn x_devices(&self) -> u8 {
        self.x_devices
    }

    /// Module count across the panel height.
    #[must_use]
    pub const fn y_devices(&self) -> u8 {
        self.y_devices
    }

    /// Treat the panel as mounted rotated 90° (or back to native).
    ///
    /// Only the coordinate space flips; pixels already drawn stay on the
    /// LEDs they lit.
    pub fn set_rotated(&mut self, rotated: bool) {
        self.rotated = rotated;
    }

    /// Whether the rotated mounting orientation is active.
    #[must_use]
    pub const fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Turn automatic hardware redraw on or off.
    ///
    /// With auto-update off the display stops refreshing after each
    /// operation; call [`flush`](Self::flush) to push changes explicitly.
    pub fn set_auto_update(&mut self, enabled: bool) {
        self.auto_update = enabled;
        self.device.set_redraw(enabled);
    }

    /// Whether automatic hardware redraw is enabled.
    #[must_use]
    pub const fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Push any buffered pixel changes to the hardware now, regardless of
    /// the auto-update setting.
    pub fn flush(&mut self) {
        self.device.flush();
    }

    /// Set the display brightness, `0..=15`.
    pub fn set_intensity(&mut self, intensity: u8) {
        self.device.set_intensity(intensity);
    }

    /// Clear the whole panel.
    pub fn clear(&mut self) {
        let count = u16::from(self.x_devices) * u16::from(self.y_devices);
        self.device.clear(0, count);
    }

    /// Clear the rectangular region spanned by the two corners, column by
    /// column.
    pub fn clear_region(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        for x in x1..=x2 {
            let _ = self.draw_vline(x, y1, y2, false);
        }
    }

    /// Set a single pixel.
    ///
    /// Returns `false` without touching the device when `(x, y)` is outside
    /// the panel, `true` on success. Unless auto-update is suspended, the
    /// write reaches the hardware immediately.
    pub fn set_point(&mut self, x: u16, y: u16, state: bool) -> bool {
        if x > self.x_max() || y > self.y_max() {
            return false;
        }
        let (row, col) = self.address(x, y);
        self.device.set_point(row, col, state)
    }

    /// Read a single pixel. Out-of-range coordinates read as off.
    #[must_use]
    pub fn get_point(&self, x: u16, y: u16) -> bool {
        if x > self.x_max() || y > self.y_max() {
            return false;
        }
        let (row, col) = self.address(x, y);
        self.device.get_point(row, col)
    }

    /// Select the font used for text operations; `None` restores the
    /// device's default font.
    pub fn set_font(&mut self, font: Option<&'static FontTable>) {
        self.device.set_font(font);
    }

    /// Pixel height of the current font.
    #[must_use]
    pub fn font_height(&self) -> u16 {
        self.device.font().height
    }

    /// Pixel columns inserted between characters in displayed text.
    #[must_use]
    pub const fn char_spacing(&self) -> u8 {
        self.char_spacing
    }

    /// Set the pixel columns inserted between characters in displayed text.
    pub fn set_char_spacing(&mut self, spacing: u8) {
        self.char_spacing = spacing;
    }

    /// Borrow the underlying device driver.
    #[must_use]
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Mutably borrow the underlying device driver.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the panel, returning the device driver.
    #[must_use]
    pub fn into_device(self) -> D {
        self.device
    }

    const fn address(&self, x: u16, y: u16) -> (u16, u16) {
        translate::device_address(self.x_devices, self.y_devices, self.rotated, x, y)
    }

    /// Set a pixel from signed working coordinates.
    ///
    /// Rasterization and text layout walk pen positions that can step below
    /// zero; negative coordinates are out of range like any coordinate past
    /// the maxima, never wrapped back into the panel.
    pub(crate) fn set_point_signed(&mut self, x: i32, y: i32, state: bool) -> bool {
        if x < 0 || y < 0 || x > i32::from(u16::MAX) || y > i32::from(u16::MAX) {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (x as u16, y as u16);
        self.set_point(x, y, state)
    }

    /// Disable hardware redraw for the duration of a multi-pixel operation.
    pub(crate) fn suspend_updates(&mut self) {
        self.device.set_redraw(false);
    }

    /// Re-apply the current auto-update setting after a multi-pixel
    /// operation; when enabled this flushes the batched writes.
    pub(crate) fn resume_updates(&mut self) {
        self.device.set_redraw(self.auto_update);
    }
}
