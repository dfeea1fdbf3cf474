mod app;
mod engine;
mod error;
mod pattern;
mod render;
mod utils;

pub use app::{run, Options, Source, USAGE};
pub use engine::{Cell, DefaultGrid, LifeGrid};
pub use error::PatternError;
pub use pattern::{load_grid, load_pattern, parse_plaintext, parse_rle};
pub use render::TerminalRenderer;
pub use utils::{Config, FpsLimiter};
