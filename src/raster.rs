use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::blob::Point;
use crate::error::{Error, Result};
use crate::scene::{FontWeight, Scene, TextAnnotation};

/// CPU render surface. Rasterizes a [`Scene`] into a greyscale buffer, one
/// intensity per pixel, row-major from the top-left.
///
/// Scene coordinates live in the unit square with y pointing up; pixel rows
/// run top to bottom. Anything outside the canvas clips.
pub struct PosterCanvas {
    width: u32,
    height: u32,
    pixels: Vec<f64>,
    regular: Option<fontdue::Font>,
    bold: Option<fontdue::Font>,
}

impl PosterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0.0; width as usize * height as usize],
            regular: None,
            bold: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at pixel `(x, y)`, `(0, 0)` top-left.
    pub fn intensity(&self, x: u32, y: u32) -> f64 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Parses and stores a TrueType or OpenType font for the given weight.
    /// Captions fall back to the regular font when no bold one is loaded.
    pub fn load_font(&mut self, weight: FontWeight, bytes: &[u8]) -> Result<()> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| Error::FontLoad(e.to_string()))?;
        match weight {
            FontWeight::Regular => self.regular = Some(font),
            FontWeight::Bold => self.bold = Some(font),
        }
        Ok(())
    }

    /// Paints the whole scene: background, then layers in order, then
    /// captions.
    pub fn render(&mut self, scene: &Scene) {
        self.pixels.fill(scene.background.luma());
        for layer in &scene.layers {
            self.fill_outline(&layer.blob.outline, layer.color.luma(), layer.opacity);
        }
        for note in &scene.annotations {
            self.draw_caption(note);
        }
    }

    /// Scanline fill with the even-odd rule, blending `tone` over the
    /// existing pixels at `opacity`.
    fn fill_outline(&mut self, outline: &[Point], tone: f64, opacity: f64) {
        let w = self.width as usize;
        let mut crossings: Vec<f64> = Vec::new();
        for row in 0..self.height as usize {
            // scanline through the pixel centers of this row
            let sy = 1.0 - (row as f64 + 0.5) / self.height as f64;
            crossings.clear();
            for edge in outline.windows(2) {
                let (a, b) = (edge[0], edge[1]);
                if (a.y <= sy) != (b.y <= sy) {
                    let t = (sy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let first = ((span[0] * self.width as f64 - 0.5).ceil() as i64).max(0);
                let last =
                    ((span[1] * self.width as f64 - 0.5).floor() as i64).min(self.width as i64 - 1);
                for col in first..=last {
                    let idx = row * w + col as usize;
                    self.pixels[idx] += (tone - self.pixels[idx]) * opacity;
                }
            }
        }
    }

    fn draw_caption(&mut self, note: &TextAnnotation) {
        let font = match note.weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref(),
        };
        let Some(font) = font else {
            log::warn!("no font loaded, skipping caption {:?}", note.content);
            return;
        };

        let (w, h) = (self.width as i64, self.height as i64);
        let pixels = &mut self.pixels;
        let ink = note.color.luma();
        let px = (note.size * h as f64) as f32;
        let baseline = ((1.0 - note.position.y) * h as f64).round() as i64;
        let mut pen = note.position.x * w as f64;

        for ch in note.content.chars() {
            let (metrics, bitmap) = font.rasterize(ch, px);
            let left = pen.round() as i64 + metrics.xmin as i64;
            let top = baseline - metrics.ymin as i64 - metrics.height as i64;
            for (i, coverage) in bitmap.iter().enumerate() {
                let x = left + (i % metrics.width) as i64;
                let y = top + (i / metrics.width) as i64;
                if x < 0 || x >= w || y < 0 || y >= h {
                    continue;
                }
                let alpha = *coverage as f64 / 255.0;
                let idx = (y * w + x) as usize;
                pixels[idx] += (ink - pixels[idx]) * alpha;
            }
            pen += metrics.advance_width as f64;
        }
    }

    /// Writes the canvas as an 8-bit greyscale PNG.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let file_writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(file_writer, self.width, self.height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;
        let image: Vec<u8> = self
            .pixels
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        png_writer.write_image_data(&image)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::Blob;
    use crate::palette::Color;
    use crate::scene::Layer;

    fn square_outline(lo: f64, hi: f64) -> Vec<Point> {
        vec![
            Point::new(lo, lo),
            Point::new(hi, lo),
            Point::new(hi, hi),
            Point::new(lo, hi),
            Point::new(lo, lo),
        ]
    }

    fn square_scene(lo: f64, hi: f64, tone: f64, opacity: f64) -> Scene {
        Scene {
            background: Color::grey(1.0),
            layers: vec![Layer {
                blob: Blob {
                    outline: square_outline(lo, hi),
                    center: Point::new((lo + hi) / 2.0, (lo + hi) / 2.0),
                    radius: (hi - lo) / 2.0,
                    wobble: 0.0,
                },
                color: Color::grey(tone),
                opacity,
            }],
            annotations: Vec::new(),
        }
    }

    #[test]
    fn opaque_fill_covers_inside_only() {
        let mut canvas = PosterCanvas::new(20, 20);
        canvas.render(&square_scene(0.25, 0.75, 0.0, 1.0));
        assert_eq!(canvas.intensity(10, 10), 0.0);
        assert_eq!(canvas.intensity(1, 1), 1.0);
        assert_eq!(canvas.intensity(18, 18), 1.0);
    }

    #[test]
    fn half_opacity_blends_toward_the_tone() {
        let mut canvas = PosterCanvas::new(20, 20);
        canvas.render(&square_scene(0.25, 0.75, 0.0, 0.5));
        assert!((canvas.intensity(10, 10) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn outlines_past_the_edge_clip() {
        let mut canvas = PosterCanvas::new(20, 20);
        canvas.render(&square_scene(-0.5, 0.5, 0.0, 1.0));
        // bottom-left quadrant is inside, top-right stays background
        assert_eq!(canvas.intensity(0, 19), 0.0);
        assert_eq!(canvas.intensity(19, 0), 1.0);
    }

    #[test]
    fn missing_font_skips_captions_without_painting() {
        let mut canvas = PosterCanvas::new(10, 10);
        let mut scene = square_scene(0.2, 0.8, 0.5, 1.0);
        scene.annotations.push(TextAnnotation {
            position: Point::new(0.05, 0.95),
            content: "title".to_owned(),
            size: 0.2,
            weight: FontWeight::Bold,
            color: Color::BLACK,
        });
        canvas.render(&scene);
        assert_eq!(canvas.intensity(0, 0), 1.0);
    }

    #[test]
    fn writes_a_png_file() {
        let mut canvas = PosterCanvas::new(16, 16);
        canvas.render(&square_scene(0.25, 0.75, 0.3, 0.7));
        let path = std::env::temp_dir().join("wobble_n_layer_raster_test.png");
        canvas.write_png(&path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
        std::fs::remove_file(&path).unwrap();
    }
}
