//! Image decoding, resizing and re-encoding via the `image` crate.
//!
//! - [`optimize`]: rewrites one file in place under a profile.
//! - [`resize`]: width-capped, aspect-preserving downscale.
//! - [`formats`]: maps a `Profile` to JPEG, PNG (oxipng) or WebP (libwebp) encoders.

mod executor;
mod formats;
mod resize;

pub use executor::{optimize, optimize_entry};
