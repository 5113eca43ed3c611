//! A Cartesian, pixel-addressable drawing surface over chains of cascaded
//! 8×8 LED matrix modules (MAX7219/MAX7221 style).
//!
//! The hardware is a zig-zag chain of fixed-size device blocks; this crate
//! presents it as one flat raster. Callers draw in panel coordinates and the
//! crate validates bounds, folds each pixel into the (row, column) address of
//! the right device in the chain, and rasterizes lines, circles, polygons and
//! text on top of the single-pixel primitives.
//!
//! # Coordinate system
//!
//! The origin is the lower left corner of the panel:
//!
//! - `x` increases to the right, `0..=`[`Panel::x_max`],
//! - `y` increases upwards, `0..=`[`Panel::y_max`].
//!
//! In trigonometric terms the display lives in the first quadrant. A panel
//! may also be mounted rotated 90°; see [`Panel::set_rotated`].
//!
//! # Example
//!
//! Draw a border and a centered circle on a simulated 4×3-device panel
//! (32×24 pixels):
//!
//! ```rust
//! use matrix_panel::{Panel, sim::SimDevice};
//!
//! let mut panel = Panel::new(SimDevice::<12>::new(), 4, 3)?;
//! panel.begin();
//!
//! assert_eq!(panel.x_max(), 31);
//! assert_eq!(panel.y_max(), 23);
//!
//! panel.draw_rectangle(0, 0, panel.x_max(), panel.y_max(), true);
//! panel.draw_circle(16, 12, 8, true);
//! assert!(panel.get_point(0, 0));
//! # Ok::<(), matrix_panel::Error>(())
//! ```
//!
//! The device driver itself (serial bit-shifting, LED state, font storage) is
//! a collaborator behind the [`device::PixelDevice`] trait; this crate never
//! touches the wire protocol.
#![no_std]

// Logging shim: forwards to defmt when the feature is enabled, otherwise
// compiles out entirely so host test binaries link without a logger.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

pub mod device;
mod error;
pub mod panel;
pub mod raster;
pub mod sim;
pub mod text;

pub use crate::error::{Error, Result};
pub use crate::panel::Panel;
pub use crate::text::TextRotation;
