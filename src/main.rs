use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use wobble_n_layer::raster::PosterCanvas;
use wobble_n_layer::scene::{FontWeight, PosterComposer};

/// Renders a layered monochrome blob poster to a greyscale PNG.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of blob layers (density), clamped to 5..=25.
    #[arg(long, default_value_t = 12)]
    layers: usize,
    /// Upper bound on shape roughness, clamped to 0.0..=0.5.
    #[arg(long, default_value_t = 0.2)]
    wobble: f64,
    /// Output width in pixels.
    #[arg(long, default_value_t = 700)]
    width: u32,
    /// Output height in pixels.
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Where to write the poster.
    #[arg(long, default_value = "./out/poster.png")]
    out: PathBuf,
    /// TrueType font for the captions; captions are skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Bold variant for the title; falls back to --font.
    #[arg(long)]
    font_bold: Option<PathBuf>,
    /// Fixed generator seed. Fresh entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // slider-range inputs; the composer trusts these bounds
    let layers = cli.layers.clamp(5, 25);
    let wobble = cli.wobble.clamp(0.0, 0.5);

    let rng = match cli.seed {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    };

    let mut composer = PosterComposer::new(rng);
    let scene = composer.compose(layers, wobble)?;

    let mut canvas = PosterCanvas::new(cli.width, cli.height);
    if let Some(path) = &cli.font {
        let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        canvas.load_font(FontWeight::Regular, &bytes)?;
        match &cli.font_bold {
            Some(bold_path) => {
                let bold_bytes = fs::read(bold_path)
                    .with_context(|| format!("reading font {}", bold_path.display()))?;
                canvas.load_font(FontWeight::Bold, &bold_bytes)?;
            }
            None => log::info!("no bold font given, the title uses the regular one"),
        }
    }
    canvas.render(&scene);

    if let Some(dir) = cli.out.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    canvas.write_png(&cli.out)?;
    log::info!(
        "wrote {} ({} layers, wobble cap {})",
        cli.out.display(),
        scene.layers.len(),
        wobble
    );

    Ok(())
}
