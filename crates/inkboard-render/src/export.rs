//! Surface snapshot to PNG bytes.

use crate::surface::Surface;
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Serialize the surface's current pixel content as a PNG.
///
/// The one supported encoding; there is no format negotiation.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(surface.pixels())?;
    writer.finish()?;

    Ok(bytes)
}
