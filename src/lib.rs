//! Parametric generator of abstract monochrome poster art.
//!
//! [`scene::PosterComposer`] turns two numbers, a layer count and a wobble
//! cap, into a [`scene::Scene`] of semi-transparent blob shapes drawn from a
//! random grey palette. [`raster::PosterCanvas`] rasterizes such a scene to
//! an 8-bit greyscale PNG. Entropy is injected, so any
//! [`rand_core::RngCore`] drives generation.

pub mod blob;
pub mod error;
pub mod palette;
pub mod raster;
pub mod scene;

pub use blob::{Blob, Point};
pub use error::{Error, Result};
pub use palette::Color;
pub use raster::PosterCanvas;
pub use scene::{Layer, PosterComposer, PosterConfig, Scene};
