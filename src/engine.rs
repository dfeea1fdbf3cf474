use std::fmt;

use crate::{Config, PatternError};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Offsets of the Moore neighborhood.
const NEIGHBORHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Game of Life on a fixed `WIDTH x HEIGHT` field with a dead border.
///
/// Cells live in a row-major buffer, `index = y * WIDTH + x`. A second buffer
/// of the same size receives the next generation and the two are swapped
/// after every step, so neighbors are always read from the pre-step state.
#[derive(Clone)]
pub struct LifeGrid<const WIDTH: usize, const HEIGHT: usize> {
    cells_curr: Vec<Cell>,
    cells_next: Vec<Cell>,
    generation: u64,
    population: usize,
}

pub type DefaultGrid = LifeGrid<{ Config::WIDTH }, { Config::HEIGHT }>;

impl<const WIDTH: usize, const HEIGHT: usize> LifeGrid<WIDTH, HEIGHT> {
    pub const SIZE: usize = {
        assert!(WIDTH >= 1 && HEIGHT >= 1);
        WIDTH * HEIGHT
    };

    /// All cells dead, generation 1.
    pub fn blank() -> Self {
        Self {
            cells_curr: vec![Cell::Dead; Self::SIZE],
            cells_next: vec![Cell::Dead; Self::SIZE],
            generation: 1,
            population: 0,
        }
    }

    /// Takes ownership of a row-major buffer of exactly `WIDTH * HEIGHT` cells.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, PatternError> {
        if cells.len() != Self::SIZE {
            return Err(PatternError::BufferSize {
                expected: Self::SIZE,
                actual: cells.len(),
            });
        }
        let population = cells.iter().filter(|c| c.is_alive()).count();
        Ok(Self {
            cells_curr: cells,
            cells_next: vec![Cell::Dead; Self::SIZE],
            generation: 1,
            population,
        })
    }

    /// Create a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(seed: Option<u64>, fill_rate: f64) -> Self {
        let mut life = Self::blank();
        life.randomize(seed, fill_rate);
        life
    }

    /// Refills the field with random cells and restarts from generation 1.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = match seed {
            Some(x) => ChaCha8Rng::seed_from_u64(x),
            None => ChaCha8Rng::from_entropy(),
        };
        let fill_rate = fill_rate.clamp(0., 1.);
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate).into();
        }
        self.population = self.cells_curr.iter().filter(|c| c.is_alive()).count();
        self.generation = 1;
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// `x` and `y` must be in bounds.
    pub const fn coordinate_to_index(x: usize, y: usize) -> usize {
        debug_assert!(x < WIDTH && y < HEIGHT);
        y * WIDTH + x
    }

    pub const fn index_to_coordinate(index: usize) -> (usize, usize) {
        (index % WIDTH, index / WIDTH)
    }

    pub const fn is_in_bounds(x: i64, y: i64) -> bool {
        0 <= x && x < WIDTH as i64 && 0 <= y && y < HEIGHT as i64
    }

    /// Unchecked read; panics if `(x, y)` is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells_curr[Self::coordinate_to_index(x, y)]
    }

    /// Bounds-checked read.
    pub fn cell(&self, x: i64, y: i64) -> Option<Cell> {
        Self::is_in_bounds(x, y).then(|| self.get(x as usize, y as usize))
    }

    pub fn set(&mut self, x: usize, y: usize, state: Cell) {
        let cell = &mut self.cells_curr[Self::coordinate_to_index(x, y)];
        match (*cell, state) {
            (Cell::Dead, Cell::Alive) => self.population += 1,
            (Cell::Alive, Cell::Dead) => self.population -= 1,
            _ => {}
        }
        *cell = state;
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    /// Cells beyond the edge count as dead.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);
        NEIGHBORHOOD
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| Self::is_in_bounds(nx, ny))
            .filter(|&(nx, ny)| self.get(nx as usize, ny as usize).is_alive())
            .count() as u8
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) {
        for index in 0..Self::SIZE {
            let (x, y) = Self::index_to_coordinate(index);
            let neighbors = self.neighbor_count(x, y);
            self.cells_next[index] = match (self.cells_curr[index], neighbors) {
                (Cell::Alive, 2 | 3) => Cell::Alive,
                (Cell::Alive, _) => {
                    self.population -= 1;
                    Cell::Dead
                }
                (Cell::Dead, 3) => {
                    self.population += 1;
                    Cell::Alive
                }
                (Cell::Dead, _) => Cell::Dead,
            };
        }
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
        self.generation += 1;
    }

    /// Advances the field by `n` generations.
    pub fn update(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells_curr
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells_curr.chunks_exact(WIDTH)
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells_curr
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| Self::index_to_coordinate(i))
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for LifeGrid<WIDTH, HEIGHT> {
    fn default() -> Self {
        Self::blank()
    }
}

/// Plaintext picture of the field, one row per line.
impl<const WIDTH: usize, const HEIGHT: usize> fmt::Display for LifeGrid<WIDTH, HEIGHT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let glyph = match cell {
                    Cell::Alive => Config::ALIVE_GLYPH,
                    Cell::Dead => Config::DEAD_GLYPH,
                };
                write!(f, "{}", glyph as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> fmt::Debug for LifeGrid<WIDTH, HEIGHT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LifeGrid<{WIDTH}, {HEIGHT}> generation={} population={}",
            self.generation, self.population
        )?;
        fmt::Display::fmt(self, f)
    }
}
