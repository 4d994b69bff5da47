use fontdue::{FontSettings, Metrics};
use crate::rendering::{BlittableSurface, Rgba};

/// Glyph coverage at or above this value is painted, anything below is left transparent
const SOLID_COVERAGE_THRESHOLD: u8 = 128;

struct PlacedGlyph {
    pen_x: i32,
    metrics: Metrics,
    coverage: Vec<u8>
}

/// A TrueType font rasterized at a fixed pixel size.
///
/// Text is rendered "solid": no anti-aliasing, every covered pixel gets the
/// full color. The result is a standalone surface which the caller blits
/// (and usually stretches) into place.
pub struct Font {
    face: fontdue::Font,
    px: f32,
    arena: bumpalo::Bump
}

impl Font {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, &'static str> {
        let face = fontdue::Font::from_bytes(bytes, FontSettings::default())?;
        Ok(Self {
            face,
            px,
            arena: bumpalo::Bump::new()
        })
    }

    fn vertical_metrics(&self) -> (f32, f32) {
        self.face
            .horizontal_line_metrics(self.px)
            .map(|it| (it.ascent, it.descent))
            .unwrap_or((self.px, 0.0))
    }

    pub fn measure_text(&self, text: &str) -> (usize, usize) {
        let width: f32 = text.chars()
            .map(|c| self.face.metrics(c, self.px).advance_width)
            .sum();
        let (ascent, descent) = self.vertical_metrics();
        (width.ceil().max(1.0) as usize, (ascent - descent).ceil().max(1.0) as usize)
    }

    pub fn render_text(&mut self, text: &str, color: Rgba) -> BlittableSurface {
        self.arena.reset();

        let (ascent, _) = self.vertical_metrics();
        let baseline = ascent.ceil() as i32;
        let (width, height) = self.measure_text(text);

        let mut glyphs = bumpalo::collections::Vec::new_in(&self.arena);
        let mut pen_x = 0.0f32;
        for c in text.chars() {
            let (metrics, coverage) = self.face.rasterize(c, self.px);
            glyphs.push(PlacedGlyph {
                pen_x: pen_x.round() as i32,
                metrics,
                coverage
            });
            pen_x += metrics.advance_width;
        }

        let mut surface = BlittableSurface::new(width, height);
        for glyph in glyphs.iter() {
            let left = glyph.pen_x + glyph.metrics.xmin;
            let top = baseline - glyph.metrics.ymin - glyph.metrics.height as i32;
            for gy in 0..glyph.metrics.height {
                let row = &glyph.coverage[gy * glyph.metrics.width..(gy + 1) * glyph.metrics.width];
                for (gx, &coverage) in row.iter().enumerate() {
                    if coverage >= SOLID_COVERAGE_THRESHOLD {
                        surface.put_pixel(left + gx as i32, top + gy as i32, color);
                    }
                }
            }
        }
        surface
    }
}
