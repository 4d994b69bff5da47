use std::path::Path;
use crate::rendering::BlittableSurface;

/// Decodes any format the `image` crate understands (PNG in practice) into a 32 bit surface
pub fn load_from_path(path: impl AsRef<Path>) -> Result<BlittableSurface, image::ImageError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8().into())
}
