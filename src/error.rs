//! Crate error type and result alias.

use derive_more::{Display, Error};

/// Errors reported by panel construction and configuration.
///
/// Drawing operations never produce an `Error`: out-of-range pixels are
/// reported through the `bool` results of the drawing primitives so that
/// partially off-panel shapes can still be drawn best-effort.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The device grid must be at least 1×1 modules.
    #[display("panel needs at least 1x1 devices, got {x_devices}x{y_devices}")]
    ZeroDevices {
        /// Requested module count across the panel width.
        x_devices: u8,
        /// Requested module count across the panel height.
        y_devices: u8,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
