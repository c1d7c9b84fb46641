use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;
use eyre::{ensure, Result, WrapErr};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weekend_tracer::render::{render, RenderSettings, MAX_DIMENSION};
use weekend_tracer::scene::{default_camera, random_scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logger(args.log_level.into());

    ensure!(
        args.aspect_ratio.is_finite() && args.aspect_ratio > 0.0,
        "aspect ratio must be positive, got {}",
        args.aspect_ratio
    );

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let settings = RenderSettings::new(args.width as usize, args.aspect_ratio, args.samples, args.depth);
    ensure!(
        settings.fits(),
        "image of {}x{} exceeds the {} pixel limit per side",
        settings.width,
        settings.height,
        MAX_DIMENSION
    );

    let world = random_scene(&mut rng);
    info!("scene has {} spheres", world.len());

    let camera = default_camera(settings.aspect_ratio());

    let image = render(&camera, &world, &settings, &mut rng);

    let file = File::create(&args.output).wrap_err_with(|| format!("creating {}", args.output))?;
    let mut w = BufWriter::new(file);
    image.write_ppm(&mut w).wrap_err_with(|| format!("writing {}", args.output))?;
    w.flush().wrap_err_with(|| format!("writing {}", args.output))?;

    info!("wrote {}", args.output);

    Ok(())
}
