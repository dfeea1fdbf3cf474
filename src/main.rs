#![warn(clippy::all)]

use std::io;

use anyhow::{Context, Result};
use conway_term::{
    load_grid, run, Config, DefaultGrid, FpsLimiter, Options, Source, TerminalRenderer, USAGE,
};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(options) = Options::parse(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut life: DefaultGrid = match &options.source {
        Source::File(path) => load_grid(path)
            .with_context(|| format!("could not load first generation from {}", path.display()))?,
        Source::Random { seed } => {
            info!("random soup, seed {:?}", seed);
            DefaultGrid::random(*seed, Config::DEFAULT_FILL_RATE)
        }
    };

    let mut renderer = TerminalRenderer::new(io::stdout().lock());
    let mut limiter = FpsLimiter::new(Config::MAX_FPS);
    run(&mut life, &mut renderer, &mut limiter, options.generations)
}
