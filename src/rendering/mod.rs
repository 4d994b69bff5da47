pub mod blittable;
pub mod fonts;
pub mod shapes;

use blittable::{Blittable, SizedSurface};
use crate::rendering::blittable::{BufferProvider, BufferProviderMut};

pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

#[inline(always)]
pub fn blend_alpha(dst: &mut Rgba, src: &Rgba) {
    match src[3] {
        0 => {}
        255 => *dst = *src,
        alpha => {
            let alpha = alpha as u16;
            let inv_alpha = 255 - alpha;
            for i in 0..3 {
                dst[i] = ((src[i] as u16 * alpha + dst[i] as u16 * inv_alpha) / 255) as u8;
            }
            dst[3] = (alpha + dst[3] as u16 * inv_alpha / 255) as u8;
        }
    }
}

#[derive(Clone)]
pub struct BlittableSurface {
    width: usize,
    height: usize,
    buffer: Vec<Rgba>
}

impl BlittableSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            width,
            height,
            buffer: vec![color; width * height]
        }
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            let idx = y as usize * self.width + x as usize;
            self.buffer[idx] = color;
        }
    }

    /// Wraps the surface so that alpha is ignored and pixels are copied as is
    pub fn opaque(&self) -> OpaqueWrapper {
        OpaqueWrapper {
            wrapped: self
        }
    }
}

impl SizedSurface for BlittableSurface {
    fn get_width(&self) -> usize { self.width }

    fn get_height(&self) -> usize { self.height }
}

impl BufferProvider<Rgba> for BlittableSurface {
    fn get_buffer(&self) -> &[Rgba] {
        &self.buffer
    }
}

impl BufferProviderMut<Rgba> for BlittableSurface {
    fn get_buffer_mut(&mut self) -> &mut [Rgba] {
        &mut self.buffer
    }
}

impl From<image::RgbaImage> for BlittableSurface {
    fn from(img: image::RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let buffer = img.pixels().map(|it| it.0).collect::<Vec<_>>();
        Self { width, height, buffer }
    }
}

impl Blittable<Rgba> for BlittableSurface {
    #[inline(always)]
    fn blend_function(&self, dst: &mut Rgba, src: &Rgba) {
        blend_alpha(dst, src);
    }
}

pub struct OpaqueWrapper<'a> {
    wrapped: &'a BlittableSurface
}

impl SizedSurface for OpaqueWrapper<'_> {
    fn get_width(&self) -> usize {
        self.wrapped.get_width()
    }

    fn get_height(&self) -> usize {
        self.wrapped.get_height()
    }
}

impl BufferProvider<Rgba> for OpaqueWrapper<'_> {
    fn get_buffer(&self) -> &[Rgba] {
        self.wrapped.get_buffer()
    }
}

impl Blittable<Rgba> for OpaqueWrapper<'_> {
    #[inline(always)]
    fn blend_function(&self, dst: &mut Rgba, src: &Rgba) {
        *dst = [src[0], src[1], src[2], 255];
    }
}

impl<'a, TBlittable: Blittable<Rgba>> blittable::BlitDestination<'a, Rgba, TBlittable> for BlittableSurface {
}

impl<'a, TBlittable: Blittable<Rgba>> blittable::BlitDestination<'a, Rgba, TBlittable> for crate::window::BlitContext {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_alpha_blends_evenly() {
        let mut dst = [0, 0, 0, 255];
        blend_alpha(&mut dst, &[255, 255, 255, 128]);
        assert!((127..=129).contains(&dst[0]));
        assert_eq!(dst[0], dst[1]);
        assert_eq!(dst[3], 255);
    }

    #[test]
    fn test_image_conversion_keeps_layout() {
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
        let surface = BlittableSurface::from(img);
        assert_eq!(surface.get_width(), 3);
        assert_eq!(surface.get_height(), 2);
        assert_eq!(surface.get_buffer()[5], [1, 2, 3, 4]);
    }

    #[test]
    fn test_opaque_wrapper_ignores_alpha() {
        let surface = BlittableSurface::filled(1, 1, [10, 20, 30, 0]);
        let mut dst = [0, 0, 0, 0];
        surface.opaque().blend_function(&mut dst, &surface.get_buffer()[0]);
        assert_eq!(dst, [10, 20, 30, 255]);
    }
}
