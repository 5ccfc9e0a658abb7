//! Utility modules for mail-labels.
//!
//! - [`color`] - Swatch to terminal color conversion

pub mod color;
