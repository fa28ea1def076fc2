//! Asset preparation for the app's launcher icons and splash screen.
//!
//! Each operation is exposed as a function returning a printable report;
//! the binaries under `src/bin/` run them with the default presets.

pub mod config;
pub mod error;
pub mod geometry;
pub mod png_io;
pub mod repair;
pub mod splash;
pub mod square_icon;
pub mod verify;

pub use error::{AssetError, Result};
