//! Pure panel-coordinate to chain-address arithmetic.
//!
//! A panel is a `x_devices × y_devices` grid of 8×8 blocks, cabled as one
//! cascade that folds zig-zag: the chain's column index grows monotonically
//! along the logical width, while alternate module rows are wired in reverse
//! column order. The functions here undo that folding, turning an in-range
//! panel coordinate into the `(row, col)` address the chain understands.
//!
//! Everything is a `const fn` over plain integers so the mapping can be
//! checked at compile time, mirrored by doctests below.

use crate::device::BLOCK_SIZE;

/// Largest valid x coordinate for a panel.
///
/// Rotation swaps which device axis bounds x.
///
/// ```rust
/// use matrix_panel::panel::translate::x_max;
///
/// assert_eq!(x_max(4, 5, false), 31);
/// assert_eq!(x_max(4, 5, true), 39);
/// ```
#[must_use]
pub const fn x_max(x_devices: u8, y_devices: u8, rotated: bool) -> u16 {
    if rotated {
        (y_devices as u16 * BLOCK_SIZE) - 1
    } else {
        (x_devices as u16 * BLOCK_SIZE) - 1
    }
}

/// Largest valid y coordinate for a panel.
///
/// ```rust
/// use matrix_panel::panel::translate::y_max;
///
/// assert_eq!(y_max(4, 5, false), 39);
/// assert_eq!(y_max(4, 5, true), 31);
/// ```
#[must_use]
pub const fn y_max(x_devices: u8, y_devices: u8, rotated: bool) -> u16 {
    if rotated {
        (x_devices as u16 * BLOCK_SIZE) - 1
    } else {
        (y_devices as u16 * BLOCK_SIZE) - 1
    }
}

/// Translate an in-range panel coordinate to a chain `(row, col)` address.
///
/// The caller must have bounds-checked `(x, y)` already; there is no error
/// path here. The row is the coordinate's offset within its block, flipped
/// because block row 0 is the top of the module. The column folds the
/// coordinate's vertical band of modules into the cascade, reversed within
/// the band to undo the zig-zag wiring.
///
/// When `rotated` is set the whole panel is treated as mounted 90° turned:
/// x is mirrored to `x_max - x` and then x and y swap roles in the same
/// folding formulas.
///
/// ```rust
/// use matrix_panel::panel::translate::device_address;
///
/// // 4×5-device panel, native orientation.
/// assert_eq!(device_address(4, 5, false, 0, 0), (7, 31));
/// assert_eq!(device_address(4, 5, false, 31, 0), (7, 0));
/// // One block up: same row flip, next band of the cascade.
/// assert_eq!(device_address(4, 5, false, 0, 8), (7, 63));
/// ```
///
/// Rotation is a bijection on the coordinate space: the rotated panel's
/// `(x, y)` lands on the same LED as the unrotated `(y, y_max − x)`:
///
/// ```rust
/// use matrix_panel::panel::translate::{device_address, y_max};
///
/// let (x, y) = (11, 3);
/// let flipped = y_max(4, 5, false) - x;
/// assert_eq!(
///     device_address(4, 5, true, x, y),
///     device_address(4, 5, false, y, flipped),
/// );
/// ```
#[must_use]
pub const fn device_address(
    x_devices: u8,
    y_devices: u8,
    rotated: bool,
    x: u16,
    y: u16,
) -> (u16, u16) {
    let chain_width = x_devices as u16 * BLOCK_SIZE;

    if rotated {
        // Mirror x across the rotated width, then fold with x and y swapped.
        let x = x_max(x_devices, y_devices, true) - x;
        let row = BLOCK_SIZE - (x % BLOCK_SIZE) - 1;
        let col = (x / BLOCK_SIZE) * chain_width + chain_width - 1 - (y % chain_width);
        (row, col)
    } else {
        let row = BLOCK_SIZE - (y % BLOCK_SIZE) - 1;
        let col = (y / BLOCK_SIZE) * chain_width + chain_width - 1 - (x % chain_width);
        (row, col)
    }
}
