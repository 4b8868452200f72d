use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{ColorType, DynamicImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::TargetSize;

fn pixel_type_for(color: ColorType) -> Result<PixelType> {
    Ok(match color {
        ColorType::L8 => PixelType::U8,
        ColorType::La8 => PixelType::U8x2,
        ColorType::Rgb8 => PixelType::U8x3,
        ColorType::Rgba8 => PixelType::U8x4,
        ColorType::L16 => PixelType::U16,
        ColorType::La16 => PixelType::U16x2,
        ColorType::Rgb16 => PixelType::U16x3,
        ColorType::Rgba16 => PixelType::U16x4,
        ColorType::Rgb32F => PixelType::F32x3,
        ColorType::Rgba32F => PixelType::F32x4,
        other => {
            return Err(Error::UnsupportedColor {
                color: format!("{:?}", other),
            });
        }
    })
}

/// Lanczos3-resamples raw interleaved pixel bytes to `target_cols` x `target_rows`.
/// Multi-byte samples are in native byte order, as `DynamicImage::as_bytes` yields them.
pub fn resize_pixels(
    data: &[u8],
    pixel_type: PixelType,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = ImageRef::new(original_cols, original_rows, data, pixel_type)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

fn u16_samples(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect()
}

fn f32_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn buffer<P: Pixel>(
    width: u32,
    height: u32,
    samples: Vec<P::Subpixel>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    ImageBuffer::from_raw(width, height, samples).ok_or_else(|| Error::InvalidArgument {
        arg: "pixel_buffer",
        value: format!("{}x{}", width, height),
    })
}

fn rebuild(color: ColorType, width: u32, height: u32, bytes: Vec<u8>) -> Result<DynamicImage> {
    Ok(match color {
        ColorType::L8 => DynamicImage::ImageLuma8(buffer::<Luma<u8>>(width, height, bytes)?),
        ColorType::La8 => DynamicImage::ImageLumaA8(buffer::<LumaA<u8>>(width, height, bytes)?),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(buffer::<Rgb<u8>>(width, height, bytes)?),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(buffer::<Rgba<u8>>(width, height, bytes)?),
        ColorType::L16 => {
            DynamicImage::ImageLuma16(buffer::<Luma<u16>>(width, height, u16_samples(&bytes))?)
        }
        ColorType::La16 => {
            DynamicImage::ImageLumaA16(buffer::<LumaA<u16>>(width, height, u16_samples(&bytes))?)
        }
        ColorType::Rgb16 => {
            DynamicImage::ImageRgb16(buffer::<Rgb<u16>>(width, height, u16_samples(&bytes))?)
        }
        ColorType::Rgba16 => {
            DynamicImage::ImageRgba16(buffer::<Rgba<u16>>(width, height, u16_samples(&bytes))?)
        }
        ColorType::Rgb32F => {
            DynamicImage::ImageRgb32F(buffer::<Rgb<f32>>(width, height, f32_samples(&bytes))?)
        }
        ColorType::Rgba32F => {
            DynamicImage::ImageRgba32F(buffer::<Rgba<f32>>(width, height, f32_samples(&bytes))?)
        }
        other => {
            return Err(Error::UnsupportedColor {
                color: format!("{:?}", other),
            });
        }
    })
}

/// Resizes `image` to exactly `target`, keeping its color type.
///
/// Uses Lanczos3 convolution; images with alpha are filtered premultiplied.
/// A source already at `target` is returned as an unfiltered copy.
pub fn resize_exact(image: &DynamicImage, target: TargetSize) -> Result<DynamicImage> {
    let color = image.color();
    let pixel_type = pixel_type_for(color)?;
    let (original_cols, original_rows) = (image.width(), image.height());

    if (original_cols, original_rows) == (target.width, target.height) {
        debug!("Source already {}, copying without resampling", target);
        return Ok(image.clone());
    }

    debug!(
        "Original size: {}x{}, New size: {} ({:?})",
        original_cols, original_rows, target, color
    );

    let resized = resize_pixels(
        image.as_bytes(),
        pixel_type,
        original_cols,
        original_rows,
        target.width,
        target.height,
    )?;
    rebuild(color, target.width, target.height, resized)
}
