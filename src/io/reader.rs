//! Source image decoding.
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::Result;

/// Opens and decodes `path`. The decoder is picked from the file contents,
/// falling back to the extension when the contents are not recognized.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Decoding {:?} as {:?}", path, reader.format());
    let image = reader.decode()?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
