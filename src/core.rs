use crate::error::{BackdropError, BackdropResult};

/// Target pixel dimensions of the composed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Reference size every layout constant is expressed against.
pub const DMG_WIDTH: u32 = 540;
pub const DMG_HEIGHT: u32 = 300;

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The standard DMG window background size.
    pub fn dmg_default() -> Self {
        Self {
            width: DMG_WIDTH,
            height: DMG_HEIGHT,
        }
    }

    /// The CPU rasterizer allocates u16-sized surfaces; anything beyond that
    /// (or empty) is rejected before any drawing starts.
    pub fn validate(&self) -> BackdropResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BackdropError::canvas("canvas dimensions must be non-zero"));
        }
        if u16::try_from(self.width).is_err() || u16::try_from(self.height).is_err() {
            return Err(BackdropError::canvas("canvas dimensions exceed u16"));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::dmg_default()
    }
}

/// Plain RGB triple. Doubles as the parley text brush, so the derives
/// mirror what the brush trait expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
    Rgb8 { r, g, b }
}

/// Composed frame: tightly packed row-major RGB8, no alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb8 {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgb8 {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some(rgb(self.data[i], self.data[i + 1], self.data[i + 2]))
    }
}
