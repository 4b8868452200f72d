use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::Result;

/// Output format inferred from the extension of `path`.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    Ok(ImageFormat::from_path(path)?)
}

/// Encodes `image` to `path`, replacing any existing file.
///
/// The image is encoded in memory first; `path` is only opened once the
/// encoder has accepted it.
pub fn write_image(path: &Path, image: &DynamicImage) -> Result<()> {
    let format = output_format(path)?;
    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, format)?;
    fs::write(path, encoded.into_inner())?;
    Ok(())
}
