//! Fixed palette, strings, and the backdrop gradient.

use crate::core::{Rgb8, rgb};

pub const TEXT_GRAY: Rgb8 = rgb(80, 80, 80);
pub const ACCENT_STEEL_BLUE: Rgb8 = rgb(70, 130, 180);
pub const ARROW_GRAY: Rgb8 = rgb(150, 150, 150);
pub const SILHOUETTE_GRAY: Rgb8 = rgb(200, 200, 200);
pub const VERSION_GRAY: Rgb8 = rgb(180, 180, 180);

pub const TITLE_TEXT: &str = "BangoCat for macOS";
pub const INSTRUCTION_TEXT: &str = "Drag BangoCat.app to the Applications folder to install";
pub const VERSION_LABEL: &str = "v1.5.2";

pub const TITLE_SIZE_PX: f32 = 24.0;
pub const BODY_SIZE_PX: f32 = 14.0;

/// Scanline color of the vertical backdrop gradient: pale blue-gray at the
/// top easing toward white at the bottom, with the red channel held 5 below
/// the others for a faint cool tint.
pub fn gradient_row(y: u32, height: u32) -> Rgb8 {
    debug_assert!(height > 0 && y < height);
    let v = (240.0 + 15.0 * f64::from(y) / f64::from(height)) as u8;
    rgb(v - 5, v, v)
}
