use std::ops::Range;

pub struct Rect {
    pub x_range: Range<usize>,
    pub y_range: Range<usize>
}

pub trait SizedSurface {
    fn get_width(&self) -> usize;
    fn get_height(&self) -> usize;
}

pub trait BufferProvider<T> {
    fn get_buffer(&self) -> &[T];
}

pub trait BufferProviderMut<T> {
    fn get_buffer_mut(&mut self) -> &mut [T];
}

pub trait Blittable<T> : SizedSurface + BufferProvider<T> {
    fn blend_function(&self, dst: &mut T, src: &T);
}

/// Clips a destination span of `len` pixels starting at `start` against `0..limit`
fn clip_span(start: i32, len: usize, limit: usize) -> Range<usize> {
    let lo = (start as i64).clamp(0, limit as i64) as usize;
    let hi = (start as i64 + len as i64).clamp(0, limit as i64) as usize;
    lo..hi.max(lo)
}

fn blit_ext<T, TBlittable: Blittable<T>>(
    drawable: &TBlittable, buffer: &mut [T], buffer_width: usize,
    dst_x: i32, dst_y: i32,
    dst_width: usize, dst_height: usize
) {
    let (src_width, src_height) = (drawable.get_width(), drawable.get_height());
    if buffer_width == 0 || dst_width == 0 || dst_height == 0 || src_width == 0 || src_height == 0 {
        return;
    }

    let buffer_height = buffer.len() / buffer_width;
    let dst_rect = Rect {
        x_range: clip_span(dst_x, dst_width, buffer_width),
        y_range: clip_span(dst_y, dst_height, buffer_height)
    };

    let src_buffer = drawable.get_buffer();

    // nearest neighbour sampling, so equal sizes degrade to a plain copy
    for y in dst_rect.y_range.clone() {
        let local_y = (y as i64 - dst_y as i64) as usize;
        let src_row = local_y * src_height / dst_height * src_width;
        let dst_row = y * buffer_width;
        for x in dst_rect.x_range.clone() {
            let local_x = (x as i64 - dst_x as i64) as usize;
            let sx = local_x * src_width / dst_width;
            drawable.blend_function(&mut buffer[dst_row + x], &src_buffer[src_row + sx]);
        }
    }
}

pub struct BlitBuilder<'a, T, TBlittable: Blittable<T>> {
    drawable: &'a TBlittable,
    buffer: &'a mut [T],
    buffer_width: usize,
    dst_x: i32,
    dst_y: i32,
    dst_width: usize,
    dst_height: usize
}
impl<'a, T, TBlittable: Blittable<T>> BlitBuilder<'a, T, TBlittable> {
    pub fn create_ext(buffer: &'a mut [T], buffer_width: usize, drawable: &'a TBlittable) -> Self {
        Self {
            drawable,
            buffer,
            buffer_width,
            dst_x: 0,
            dst_y: 0,
            dst_width: drawable.get_width(),
            dst_height: drawable.get_height()
        }
    }
    pub fn create(
        dest: &'a mut impl BlitDestination<'a, T, TBlittable>,
        src: &'a TBlittable
    ) -> Self {
        dest.initiate_blit_on_self(src)
    }
    pub fn with_dest_pos(self, dst_x: i32, dst_y: i32) -> Self {
        Self {
            dst_x,
            dst_y,
            ..self
        }
    }
    /// Stretches the whole source to the given size on the destination
    pub fn with_dest_size(self, dst_width: usize, dst_height: usize) -> Self {
        Self {
            dst_width,
            dst_height,
            ..self
        }
    }
    pub fn blit(&mut self) {
        blit_ext(
            self.drawable,
            self.buffer,
            self.buffer_width,
            self.dst_x,
            self.dst_y,
            self.dst_width,
            self.dst_height
        )
    }
}

pub trait BlitDestination<'a, T, TBlittable: Blittable<T>> : BufferProviderMut<T> + SizedSurface + Sized {
    fn initiate_blit_on_self(&'a mut self, source_blittable: &'a TBlittable) -> BlitBuilder<'a, T, TBlittable> {
        let width = self.get_width();
        BlitBuilder::create_ext(
            self.get_buffer_mut(),
            width,
            source_blittable
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::rendering::{BlittableSurface, Rgba};
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const BLUE: Rgba = [0, 0, 255, 255];

    fn pixel(surface: &BlittableSurface, x: usize, y: usize) -> Rgba {
        surface.get_buffer()[y * surface.get_width() + x]
    }

    #[test]
    fn test_plain_blit_copies_at_position() {
        let mut dest = BlittableSurface::filled(8, 8, BLUE);
        let sprite = BlittableSurface::filled(2, 2, RED);
        BlitBuilder::create(&mut dest, &sprite)
            .with_dest_pos(3, 4)
            .blit();
        assert_eq!(pixel(&dest, 3, 4), RED);
        assert_eq!(pixel(&dest, 4, 5), RED);
        assert_eq!(pixel(&dest, 5, 4), BLUE);
        assert_eq!(pixel(&dest, 3, 6), BLUE);
    }

    #[test]
    fn test_stretch_blit_covers_whole_dest_rect() {
        let mut dest = BlittableSurface::filled(10, 10, BLUE);
        let sprite = BlittableSurface::filled(1, 1, RED);
        BlitBuilder::create(&mut dest, &sprite)
            .with_dest_pos(2, 2)
            .with_dest_size(5, 3)
            .blit();
        let red_count = dest.get_buffer().iter().filter(|it| **it == RED).count();
        assert_eq!(red_count, 15);
        assert_eq!(pixel(&dest, 6, 4), RED);
        assert_eq!(pixel(&dest, 7, 4), BLUE);
    }

    #[test]
    fn test_stretch_blit_samples_nearest_source_pixel() {
        let mut dest = BlittableSurface::filled(4, 1, [0, 0, 0, 255]);
        let mut sprite = BlittableSurface::filled(2, 1, RED);
        sprite.put_pixel(1, 0, BLUE);
        BlitBuilder::create(&mut dest, &sprite)
            .with_dest_size(4, 1)
            .blit();
        assert_eq!(dest.get_buffer(), &[RED, RED, BLUE, BLUE]);
    }

    #[test]
    fn test_blit_is_clipped_at_negative_coordinates() {
        let mut dest = BlittableSurface::filled(4, 4, BLUE);
        let sprite = BlittableSurface::filled(3, 3, RED);
        BlitBuilder::create(&mut dest, &sprite)
            .with_dest_pos(-2, -2)
            .blit();
        assert_eq!(pixel(&dest, 0, 0), RED);
        assert_eq!(pixel(&dest, 1, 0), BLUE);
        assert_eq!(pixel(&dest, 0, 1), BLUE);
    }

    #[test]
    fn test_blit_fully_outside_is_noop() {
        let mut dest = BlittableSurface::filled(4, 4, BLUE);
        let sprite = BlittableSurface::filled(3, 3, RED);
        BlitBuilder::create(&mut dest, &sprite)
            .with_dest_pos(10, -20)
            .blit();
        assert!(dest.get_buffer().iter().all(|it| *it == BLUE));
    }

    #[test]
    fn test_transparent_pixels_keep_destination() {
        let mut dest = BlittableSurface::filled(2, 1, BLUE);
        let mut sprite = BlittableSurface::filled(2, 1, RED);
        sprite.put_pixel(1, 0, [0, 0, 0, 0]);
        BlitBuilder::create(&mut dest, &sprite).blit();
        assert_eq!(pixel(&dest, 0, 0), RED);
        assert_eq!(pixel(&dest, 1, 0), BLUE);
    }
}
