use std::io::Cursor;

use anyhow::Context;

use crate::{
    foundation::error::{MondrianError, MondrianResult},
    render::format::ExportFormat,
};

/// Bitmap exports are drawn at twice the document's physical size.
pub const DEFAULT_RASTER_SCALE: f32 = 2.0;

const MAX_DIM: u32 = 16_384;

/// Bitmap encodings a rendered document can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RasterFormat {
    Png,
    /// Lossless; the encoder takes no quality factor.
    Webp,
}

impl RasterFormat {
    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Webp => image::ImageFormat::WebP,
        }
    }
}

impl TryFrom<ExportFormat> for RasterFormat {
    type Error = MondrianError;

    fn try_from(format: ExportFormat) -> Result<Self, Self::Error> {
        match format {
            ExportFormat::Png => Ok(Self::Png),
            ExportFormat::Webp => Ok(Self::Webp),
            ExportFormat::Svg => Err(MondrianError::unsupported_format(
                "svg is not a raster format",
            )),
        }
    }
}

impl From<RasterFormat> for ExportFormat {
    fn from(format: RasterFormat) -> Self {
        match format {
            RasterFormat::Png => Self::Png,
            RasterFormat::Webp => Self::Webp,
        }
    }
}

/// Rasterize an SVG document at `scale` times its declared size and encode it as `format`.
#[tracing::instrument(skip(svg))]
pub fn rasterize(svg: &str, format: RasterFormat, scale: f32) -> MondrianResult<Vec<u8>> {
    let img = rasterize_rgba8(svg, scale)?;

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), format.image_format())
        .with_context(|| format!("encode {}", ExportFormat::from(format)))?;

    tracing::debug!(bytes = bytes.len(), "encoded raster");
    Ok(bytes)
}

/// Rasterize an SVG document into straight (non-premultiplied) RGBA8.
pub fn rasterize_rgba8(svg: &str, scale: f32) -> MondrianResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MondrianError::validation(format!(
            "raster scale must be positive, got {scale}"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    // Avoid pathological allocations from oversized documents or scales.
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(MondrianError::render(format!(
            "raster size {width}x{height} outside 1..={MAX_DIM}"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MondrianError::render("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| MondrianError::render("pixmap size does not match its buffer"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
