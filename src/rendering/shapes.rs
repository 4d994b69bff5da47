use crate::rendering::blittable::{BufferProviderMut, SizedSurface};

pub fn fill_rectangle<T: Copy>(
    dest: &mut (impl BufferProviderMut<T> + SizedSurface),
    x: i32, y: i32,
    w: i32, h: i32,
    color: T
) {
    let (dw, dh) = (dest.get_width(), dest.get_height());
    let mut w = w;
    let mut h = h;

    if x < 0 { w += x; }
    if y < 0 { h += y; }
    if w <= 0 || h <= 0 { return; }

    let x = x.max(0) as usize;
    let y = y.max(0) as usize;
    let w = w as usize;
    let h = h as usize;

    let left = x.min(dw);
    let right = (x + w).min(dw);
    let buffer = dest.get_buffer_mut();

    let mut stride = y * dw;
    for _ in y..(y + h).min(dh) {
        for px in &mut buffer[stride+left..stride+right] {
            *px = color;
        }
        stride += dw;
    }
}

/// One pixel wide outline, drawn inside the rectangle bounds
pub fn draw_rectangle<T: Copy>(
    dest: &mut (impl BufferProviderMut<T> + SizedSurface),
    x: i32, y: i32,
    w: i32, h: i32,
    color: T
) {
    if w <= 0 || h <= 0 { return; }
    fill_rectangle(dest, x, y, w, 1, color);
    fill_rectangle(dest, x, y + h - 1, w, 1, color);
    fill_rectangle(dest, x, y, 1, h, color);
    fill_rectangle(dest, x + w - 1, y, 1, h, color);
}
