use std::f64::consts::TAU;

use rand::Rng;
use rand_core::RngCore;

use crate::error::{Error, Result};

/// Outline resolution used when the caller does not ask for one.
pub const DEFAULT_VERTICES: usize = 200;
/// Default jitter amplitude as a fraction of the base radius.
pub const DEFAULT_WOBBLE: f64 = 0.15;

/// A coordinate in the unit square, y pointing up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A closed outline approximating a circle with per-vertex radius jitter.
///
/// Every vertex sits within `radius * (1 ± wobble / 2)` of the center; the
/// jitter is drawn independently per vertex, so the edge is rough rather
/// than undulating.
#[derive(Debug, Clone)]
pub struct Blob {
    pub outline: Vec<Point>,
    pub center: Point,
    pub radius: f64,
    pub wobble: f64,
}

impl Blob {
    /// Builds a wobbly outline of `vertices` points around `center`.
    ///
    /// The full turn is split into equally spaced angles inclusive of both
    /// endpoints. The closing vertex reuses the first one, so the outline is
    /// closed exactly and fill routines need no special casing.
    pub fn shape<R: RngCore>(
        rng: &mut R,
        center: Point,
        radius: f64,
        vertices: usize,
        wobble: f64,
    ) -> Result<Blob> {
        if vertices < 3 {
            return Err(Error::TooFewVertices(vertices));
        }
        if radius <= 0.0 || !radius.is_finite() {
            return Err(Error::InvalidRadius(radius));
        }
        if wobble < 0.0 {
            return Err(Error::NegativeWobble(wobble));
        }

        let mut outline = Vec::with_capacity(vertices);
        let step = TAU / (vertices - 1) as f64;
        for i in 0..vertices - 1 {
            let angle = step * i as f64;
            let noise = rng.gen_range(-0.5..0.5);
            let r = radius * (1.0 + wobble * noise);
            outline.push(Point::new(
                center.x + r * angle.cos(),
                center.y + r * angle.sin(),
            ));
        }
        // closing vertex sits at the same angle as the first one
        outline.push(outline[0]);

        Ok(Blob {
            outline,
            center,
            radius,
            wobble,
        })
    }
}
