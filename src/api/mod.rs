//! High-level library API: generate a whole icon set from a plan, or resize a
//! single source into an in-memory buffer. Prefer these entrypoints over the
//! low-level processing modules when integrating iconset.
use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::Serialize;
use tracing::info;

use crate::core::params::IconSetParams;
use crate::core::processing::resize::resize_exact;
use crate::error::Result;
use crate::io::reader::load_image;
use crate::io::writers::raster::write_image;
use crate::types::{ColorMode, TargetSize};

/// Description of one image on disk, source or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: ColorMode,
}

impl ImageInfo {
    fn describe(path: &Path, image: &DynamicImage) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
            color: ColorMode::try_from(image.color())?,
        })
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSetReport {
    pub source: ImageInfo,
    pub outputs: Vec<ImageInfo>,
}

/// Decode the plan's input once, then resize and write every output in order.
///
/// The plan is validated first, so a bad plan or a missing source never
/// touches an output file. The first write failure aborts the run; outputs
/// after it are not attempted.
pub fn generate_icon_set(params: &IconSetParams) -> Result<IconSetReport> {
    params.validate()?;

    info!("Loading source image: {:?}", params.input);
    let source = load_image(&params.input)?;
    let source_info = ImageInfo::describe(&params.input, &source)?;
    info!(
        "Source: {}x{} {}",
        source_info.width, source_info.height, source_info.color
    );

    let mut outputs = Vec::with_capacity(params.outputs.len());
    for spec in &params.outputs {
        let resized = resize_exact(&source, spec.size)?;
        write_image(&spec.path, &resized)?;
        info!("Wrote {} -> {:?}", spec.size, spec.path);
        outputs.push(ImageInfo::describe(&spec.path, &resized)?);
    }

    Ok(IconSetReport {
        source: source_info,
        outputs,
    })
}

/// Run the fixed plan: `icon512.png` to `icon16.png`, `icon48.png` and
/// `icon128.png` in the working directory.
pub fn generate_default_icon_set() -> Result<IconSetReport> {
    generate_icon_set(&IconSetParams::default())
}

/// Decode `input` and return it resized to `size` (no disk output)
pub fn resize_to_buffer(input: &Path, size: TargetSize) -> Result<DynamicImage> {
    let source = load_image(input)?;
    resize_exact(&source, size)
}
