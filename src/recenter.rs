use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;
use thiserror::Error;

use crate::layout::{centered_content, ScaleRatio};

#[derive(Debug, Error)]
pub enum RecenterError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Shrinks the image's content to `scale` of its dimensions and re-centers
/// it on a transparent canvas of the original size, overwriting `path` in
/// place. The content's own transparency is preserved through the composite.
///
/// Not idempotent: each run shrinks the previous output further, so apply it
/// once per exported asset.
pub fn recenter_in_place(path: &Path, scale: ScaleRatio) -> Result<(), RecenterError> {
    if !path.exists() {
        return Err(RecenterError::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|source| RecenterError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = img.dimensions();

    let layout = centered_content(width, height, scale);
    debug!(
        "{}x{} content -> {}x{} at ({}, {})",
        width,
        height,
        layout.content_width,
        layout.content_height,
        layout.offset_x,
        layout.offset_y
    );

    let resized = imageops::resize(
        &img,
        layout.content_width,
        layout.content_height,
        FilterType::Lanczos3,
    );

    // A fresh buffer is zero-filled, i.e. fully transparent.
    let mut canvas = RgbaImage::new(width, height);
    imageops::overlay(
        &mut canvas,
        &resized,
        i64::from(layout.offset_x),
        i64::from(layout.offset_y),
    );

    canvas.save(path).map_err(|source| RecenterError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
