use std::fmt;

use thiserror::Error;

/// Android masks adaptive icons down to a circle of diameter 72/108dp, so
/// only the central ~66% of the canvas is guaranteed visible. 0.65 keeps the
/// content just under that; drop to 0.5 for wide artwork.
pub const DEFAULT_SCALE: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("scale ratio must be in (0, 1], got {0}")]
pub struct InvalidScale(pub f64);

/// Fraction of the canvas the content should occupy. Valid values are
/// (0, 1]; construction enforces the range so the transform never has to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatio(f64);

impl ScaleRatio {
    pub const DEFAULT: ScaleRatio = ScaleRatio(DEFAULT_SCALE);

    pub fn new(value: f64) -> Result<Self, InvalidScale> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(InvalidScale(value))
        }
    }

    /// Builds the ratio from the fraction removed around the content
    /// instead, i.e. a scale of `1 - padding`.
    pub fn from_padding(padding: f64) -> Result<Self, InvalidScale> {
        Self::new(1.0 - padding)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Truncated percentage for status messages (0.65 -> 65).
    pub fn percent(self) -> u32 {
        (self.0 * 100.0) as u32
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the shrunk content lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    pub content_width: u32,
    pub content_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Computes the content dimensions and centered paste offset for a
/// `width` x `height` canvas. Dimensions truncate; when the leftover margin
/// is odd the extra pixel goes to the right/bottom edge.
pub fn centered_content(width: u32, height: u32, scale: ScaleRatio) -> ContentLayout {
    let content_width = (width as f64 * scale.get()) as u32;
    let content_height = (height as f64 * scale.get()) as u32;
    ContentLayout {
        content_width,
        content_height,
        offset_x: (width - content_width) / 2,
        offset_y: (height - content_height) / 2,
    }
}
