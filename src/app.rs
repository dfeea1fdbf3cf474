use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, trace};

use crate::{Config, FpsLimiter, LifeGrid, TerminalRenderer};

pub const USAGE: &str = "\
usage: conway_term [PATH] [--random [SEED]] [--generations N]

  PATH             pattern file, plaintext ('.' dead, '#' alive) or .rle
                   (default: first.map)
  --random [SEED]  start from a random soup instead of a pattern file
  --generations N  stop after N generations (default: run forever)
  --help           print this message";

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Random { seed: Option<u64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source: Source,
    pub generations: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: Source::File(PathBuf::from(Config::DEFAULT_PATTERN_PATH)),
            generations: None,
        }
    }
}

impl Options {
    /// Parses the command line without the program name.
    ///
    /// Returns `Ok(None)` when `--help` was requested.
    pub fn parse<I>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut path = None;
        let mut random = None;
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "--random" => {
                    let seed = match args.next_if(|next| !next.starts_with("--")) {
                        Some(seed) => Some(
                            seed.parse::<u64>()
                                .with_context(|| format!("invalid seed {seed:?}"))?,
                        ),
                        None => None,
                    };
                    random = Some(seed);
                }
                "--generations" => {
                    let Some(n) = args.next() else {
                        bail!("--generations needs a value");
                    };
                    let n = n
                        .parse::<u64>()
                        .with_context(|| format!("invalid generation count {n:?}"))?;
                    options.generations = Some(n);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ if path.is_some() => bail!("unexpected argument {arg:?}"),
                _ => path = Some(PathBuf::from(&arg)),
            }
        }

        options.source = match (path, random) {
            (Some(_), Some(_)) => bail!("a pattern file and --random are mutually exclusive"),
            (Some(path), None) => Source::File(path),
            (None, Some(seed)) => Source::Random { seed },
            (None, None) => options.source,
        };
        Ok(Some(options))
    }
}

/// Renders, steps and waits in a loop, `generations` times or forever.
pub fn run<W: Write, const WIDTH: usize, const HEIGHT: usize>(
    life: &mut LifeGrid<WIDTH, HEIGHT>,
    renderer: &mut TerminalRenderer<W>,
    limiter: &mut FpsLimiter,
    generations: Option<u64>,
) -> Result<()> {
    debug!(
        "running {}x{} at {:?} per frame, limit: {:?}",
        WIDTH,
        HEIGHT,
        limiter.target_frametime(),
        generations
    );
    renderer.start().context("failed to prepare terminal")?;

    let mut remaining = generations;
    while remaining != Some(0) {
        renderer.render(life).context("failed to render frame")?;
        life.step();
        limiter.delay();
        trace!(
            "generation {} population {} fps {:.1}",
            life.generation(),
            life.population(),
            limiter.fps()
        );
        remaining = remaining.map(|n| n - 1);
    }

    renderer.finish().context("failed to restore terminal")?;
    Ok(())
}
