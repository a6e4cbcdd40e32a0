use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::RngCore;

use crate::blob::{Blob, Point, DEFAULT_VERTICES};
use crate::error::{Error, Result};
use crate::palette::{self, Color};

/// Caption sizes as fractions of the canvas height.
const TITLE_SIZE: f64 = 0.025;
const SUBTITLE_SIZE: f64 = 0.015;

/// Weight hint for a caption. The render surface maps this onto whatever
/// fonts it has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A short caption anchored in fractional canvas coordinates.
#[derive(Debug, Clone)]
pub struct TextAnnotation {
    pub position: Point,
    pub content: String,
    /// Glyph height as a fraction of the canvas height.
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

/// One blob with its assigned tone and opacity. Layers are painted in
/// creation order, later layers on top.
#[derive(Debug, Clone)]
pub struct Layer {
    pub blob: Blob,
    pub color: Color,
    pub opacity: f64,
}

/// A finished poster description, handed as-is to a render surface.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub layers: Vec<Layer>,
    pub annotations: Vec<TextAnnotation>,
}

/// Sampling tunables for composition. The default matches the classic look.
#[derive(Debug, Clone)]
pub struct PosterConfig {
    /// Number of grey tones sampled per poster.
    pub palette_size: usize,
    /// Outline resolution of every blob.
    pub vertices: usize,
    /// Base radius band layers draw from.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Smallest wobble a layer may get while the cap allows it.
    pub wobble_floor: f64,
    /// Opacity band for layer fills.
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub background: Color,
    pub title: String,
    pub subtitle: String,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            palette_size: 8,
            vertices: DEFAULT_VERTICES,
            radius_min: 0.15,
            radius_max: 0.45,
            wobble_floor: 0.05,
            opacity_min: 0.5,
            opacity_max: 0.8,
            background: Color::grey(0.95),
            title: "Monochrome Layers".to_owned(),
            subtitle: "Generative Art Study".to_owned(),
        }
    }
}

/// Poster generator. Owns its entropy source; every call to
/// [`compose`](PosterComposer::compose) yields a fresh scene.
pub struct PosterComposer<R: RngCore> {
    rng: R,
    config: PosterConfig,
}

impl<R: RngCore> PosterComposer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: PosterConfig::default(),
        }
    }

    pub fn with_config(rng: R, config: PosterConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &PosterConfig {
        &self.config
    }

    /// Lays down `layer_count` wobbly blobs plus the caption block.
    ///
    /// One palette is sampled up front and shared by every layer. Each layer
    /// then draws its own center, radius, wobble, tone and opacity.
    /// `max_wobble` caps the per-layer wobble; caps below the configured
    /// floor collapse the sampling range to `max_wobble` itself.
    pub fn compose(&mut self, layer_count: usize, max_wobble: f64) -> Result<Scene> {
        if layer_count == 0 {
            return Err(Error::EmptyPoster);
        }
        if max_wobble < 0.0 {
            return Err(Error::NegativeWobble(max_wobble));
        }
        if self.config.palette_size == 0 {
            return Err(Error::EmptyPalette);
        }

        let palette = palette::random_monochrome(&mut self.rng, self.config.palette_size);
        log::debug!(
            "composing {} layers from a {}-tone palette, wobble cap {}",
            layer_count,
            palette.len(),
            max_wobble
        );

        let mut layers = Vec::with_capacity(layer_count);
        for _ in 0..layer_count {
            let center = Point::new(self.rng.gen_range(0.0..1.0), self.rng.gen_range(0.0..1.0));
            let radius = self
                .rng
                .gen_range(self.config.radius_min..=self.config.radius_max);
            let wobble = if max_wobble <= self.config.wobble_floor {
                max_wobble
            } else {
                self.rng.gen_range(self.config.wobble_floor..=max_wobble)
            };
            let blob = Blob::shape(&mut self.rng, center, radius, self.config.vertices, wobble)?;
            let color = *palette.choose(&mut self.rng).ok_or(Error::EmptyPalette)?;
            let opacity = self
                .rng
                .gen_range(self.config.opacity_min..=self.config.opacity_max);
            layers.push(Layer {
                blob,
                color,
                opacity,
            });
        }

        Ok(Scene {
            background: self.config.background,
            layers,
            annotations: vec![
                TextAnnotation {
                    position: Point::new(0.05, 0.95),
                    content: self.config.title.clone(),
                    size: TITLE_SIZE,
                    weight: FontWeight::Bold,
                    color: Color::BLACK,
                },
                TextAnnotation {
                    position: Point::new(0.05, 0.91),
                    content: self.config.subtitle.clone(),
                    size: SUBTITLE_SIZE,
                    weight: FontWeight::Regular,
                    color: Color::BLACK,
                },
            ],
        })
    }
}
