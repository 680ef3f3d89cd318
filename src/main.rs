use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use sphere_tracer::output::{save_image, write_ppm};
use sphere_tracer::progress::{row_progress_bar, RenderProgress, Silent};
use sphere_tracer::RenderConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("sphere_tracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);

    if args.dump_config {
        print!("{}", config.to_toml().context("serializing configuration")?);
        return Ok(());
    }

    let world = config.world();
    let camera = config.camera();
    info!(
        "Scene has {} objects, image {}x{}",
        world.len(),
        camera.image_width(),
        camera.image_height()
    );

    let progress: Box<dyn RenderProgress> = if args.no_progress {
        Box::new(Silent)
    } else {
        Box::new(row_progress_bar(camera.image_height()))
    };
    let image = camera.render(&world, progress.as_ref());

    match &args.output {
        Some(path) => save_image(&image, path)
            .with_context(|| format!("writing image to {}", path.display()))?,
        None => write_ppm(&image, BufWriter::new(io::stdout().lock()))
            .context("writing image to stdout")?,
    }

    Ok(())
}
