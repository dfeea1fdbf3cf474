use std::path::{Path, PathBuf};

use conway_term::{
    load_grid, load_pattern, Cell, Config, DefaultGrid, LifeGrid, PatternError, TerminalRenderer,
};

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn alive<const W: usize, const H: usize>(life: &LifeGrid<W, H>) -> Vec<(usize, usize)> {
    life.alive_cells().collect()
}

#[test]
fn test_first_map() {
    let mut life: DefaultGrid = load_grid(&data_path("first.map")).unwrap();
    assert_eq!(life.generation(), 1);
    assert_eq!(life.population(), 43);
    assert_eq!(life.get(50, 4), Cell::Alive);
    assert_eq!(life.get(51, 4), Cell::Alive);
    assert_eq!(life.get(52, 4), Cell::Alive);

    life.step();
    assert_eq!(life.get(51, 3), Cell::Alive);
    assert_eq!(life.get(51, 5), Cell::Alive);
    assert_eq!(life.get(50, 4), Cell::Dead);

    for _ in 0..200 {
        life.step();
        let expected = life.cells().iter().filter(|c| c.is_alive()).count();
        assert_eq!(life.population(), expected);
    }
    assert_eq!(life.generation(), 202);
}

#[test]
fn test_glider_crosses_the_field() {
    let mut life: DefaultGrid = load_grid(&data_path("patterns/glider.rle")).unwrap();
    let start = alive(&life);
    assert_eq!(start, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);

    life.update(40);
    let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 10, y + 10)).collect();
    assert_eq!(alive(&life), shifted);
    assert_eq!(life.population(), 5);
}

#[test]
fn test_glider_dies_into_a_block_at_the_edge() {
    let mut life: DefaultGrid = load_grid(&data_path("patterns/glider.rle")).unwrap();
    // a glider hitting the dead border settles into a block
    life.update(4 * Config::HEIGHT);
    let settled = alive(&life);
    assert_eq!(settled.len(), 4);
    life.update(8);
    assert_eq!(alive(&life), settled);
}

#[test]
fn test_pulsar_period_three() {
    let mut life: LifeGrid<20, 20> = load_grid(&data_path("patterns/pulsar.cells")).unwrap();
    let start = alive(&life);
    assert_eq!(start.len(), 48);

    life.step();
    assert_ne!(alive(&life), start);
    life.step();
    assert_ne!(alive(&life), start);
    life.step();
    assert_eq!(alive(&life), start);
}

#[test]
fn test_pattern_too_large_for_grid() {
    let err = load_pattern(&data_path("first.map"), 16, 16).unwrap_err();
    assert!(matches!(err, PatternError::RowTooLong { line: 1, .. }));
}

#[test]
fn test_missing_pattern() {
    let err = load_grid::<8, 8>(&data_path("patterns/missing.map")).unwrap_err();
    assert!(matches!(err, PatternError::Io { .. }));
    assert!(err.to_string().contains("missing.map"));
}

#[test]
fn test_render_first_frame() {
    let life: DefaultGrid = load_grid(&data_path("first.map")).unwrap();
    let mut renderer = TerminalRenderer::new(Vec::new());
    renderer.render(&life).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    let (frame, cursor) = out.split_at(out.rfind("Population: 43\n").unwrap() + 15);
    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), Config::HEIGHT + 2);
    assert!(lines[..Config::HEIGHT]
        .iter()
        .all(|line| line.chars().count() == Config::WIDTH));
    assert_eq!(lines[4].chars().filter(|&c| c == '0').count(), 9);
    assert_eq!(lines[Config::HEIGHT], "Generation: 1");
    assert_eq!(cursor, "\x1b[64D\x1b[34A");
}
