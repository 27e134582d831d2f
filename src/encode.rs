//! Writing the composed frame to disk.

use std::path::Path;

use anyhow::Context as _;

use crate::{core::FrameRgb8, error::BackdropResult};

/// Create the output path's parent directory if it is missing. Kept separate
/// from the write itself so a directory failure is attributed to this step,
/// not to PNG encoding.
pub fn ensure_parent_dir(path: &Path) -> BackdropResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode the frame as an RGB8 PNG at `path`. Failures propagate; no partial
/// file is cleaned up.
pub fn write_png(frame: &FrameRgb8, path: &Path) -> BackdropResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
