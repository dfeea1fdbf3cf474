pub struct Config;

impl Config {
    pub const WIDTH: usize = 64;
    pub const HEIGHT: usize = 32;
    pub const MAX_FPS: f64 = 15.;

    // glyphs of the plaintext pattern files
    pub const DEAD_GLYPH: u8 = b'.';
    pub const ALIVE_GLYPH: u8 = b'#';
    pub const COMMENT_GLYPH: u8 = b'!';

    pub const RENDER_ALIVE: char = '0';
    pub const RENDER_DEAD: char = ' ';

    pub const DEFAULT_PATTERN_PATH: &'static str = "first.map";
    pub const DEFAULT_FILL_RATE: f64 = 0.3;
}
