use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveDown, MoveLeft, MoveUp, MoveToColumn, Show},
    queue,
};

use crate::{Cell, Config, LifeGrid};

/// Lines printed below the field: generation and population.
const STATUS_LINES: usize = 2;

/// Draws frames in place: after every frame the cursor goes back to the
/// top left corner so the next frame overwrites the previous one.
pub struct TerminalRenderer<W: Write> {
    out: W,
    line: String,
    frame_height: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
            frame_height: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush()
    }

    pub fn render<const WIDTH: usize, const HEIGHT: usize>(
        &mut self,
        life: &LifeGrid<WIDTH, HEIGHT>,
    ) -> io::Result<()> {
        for row in life.rows() {
            self.line.clear();
            self.line.extend(row.iter().map(|cell| match cell {
                Cell::Alive => Config::RENDER_ALIVE,
                Cell::Dead => Config::RENDER_DEAD,
            }));
            writeln!(self.out, "{}", self.line)?;
        }
        writeln!(self.out, "Generation: {}", life.generation())?;
        writeln!(self.out, "Population: {}", life.population())?;

        self.frame_height = HEIGHT + STATUS_LINES;
        queue!(
            self.out,
            MoveLeft(WIDTH as u16),
            MoveUp(self.frame_height as u16)
        )?;
        self.out.flush()
    }

    /// Leaves the cursor below the last frame and makes it visible again.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.frame_height > 0 {
            queue!(self.out, MoveDown(self.frame_height as u16), MoveToColumn(0))?;
        }
        queue!(self.out, Show)?;
        self.out.flush()
    }
}
