//! Pattern loading: plaintext (`.` dead, `#` alive) and RLE.
//!
//! Both parsers produce a row-major buffer of exactly `width * height` cells.
//! Patterns smaller than the field are padded with dead cells; anything that
//! does not fit, or that contains glyphs outside the format, is rejected.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{Cell, Config, LifeGrid, PatternError};

/// Reads a pattern file and parses it according to its extension
/// (`.rle` is RLE, everything else is plaintext).
pub fn load_pattern(
    path: &Path,
    width: usize,
    height: usize,
) -> Result<Vec<Cell>, PatternError> {
    let data = fs::read(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_rle = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rle"));
    let cells = if is_rle {
        parse_rle(&data, width, height)?
    } else {
        parse_plaintext(&data, width, height)?
    };
    info!(
        "loaded {} ({}x{}, {} alive)",
        path.display(),
        width,
        height,
        cells.iter().filter(|c| c.is_alive()).count()
    );
    Ok(cells)
}

/// Loads a pattern file straight into a grid of matching dimensions.
pub fn load_grid<const WIDTH: usize, const HEIGHT: usize>(
    path: &Path,
) -> Result<LifeGrid<WIDTH, HEIGHT>, PatternError> {
    LifeGrid::from_cells(load_pattern(path, WIDTH, HEIGHT)?)
}

/// Parses the plaintext format, one row per line.
///
/// Lines starting with `!` are comments. Short rows and missing rows are
/// padded with dead cells.
pub fn parse_plaintext(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<Cell>, PatternError> {
    let mut result = vec![Cell::Dead; width * height];
    let mut y = 0;
    let mut padded_rows = 0;
    let mut blank_tail = 0;

    let data = data.strip_suffix(b"\n").unwrap_or(data);
    let mut lines = data
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, line)| line.first() != Some(&Config::COMMENT_GLYPH))
        .map(|(line_no, line)| (line_no + 1, line.trim_ascii_end()));
    while let Some((line_no, line)) = lines.next() {
        if line.is_empty() && y == height {
            blank_tail += 1;
            continue;
        }
        if y == height {
            // rows up to the last non-blank line
            let extra = lines
                .by_ref()
                .enumerate()
                .filter(|(_, (_, line))| !line.is_empty())
                .last()
                .map_or(0, |(k, _)| k + 1);
            return Err(PatternError::TooManyRows {
                rows: height + blank_tail + 1 + extra,
                height,
            });
        }
        if line.len() > width {
            return Err(PatternError::RowTooLong {
                line: line_no,
                length: line.len(),
                width,
            });
        }
        for (x, &glyph) in line.iter().enumerate() {
            result[y * width + x] = match glyph {
                Config::DEAD_GLYPH => Cell::Dead,
                Config::ALIVE_GLYPH => Cell::Alive,
                _ => {
                    return Err(PatternError::UnexpectedGlyph {
                        line: line_no,
                        column: x + 1,
                        glyph: glyph as char,
                    })
                }
            };
        }
        if line.len() < width {
            padded_rows += 1;
        }
        y += 1;
    }

    if padded_rows > 0 || y < height {
        debug!(
            "plaintext pattern padded: {} short rows, {} missing rows",
            padded_rows,
            height.saturating_sub(y)
        );
    }
    Ok(result)
}

/// Parses the RLE format; the pattern is placed at the top left corner.
pub fn parse_rle(data: &[u8], width: usize, height: usize) -> Result<Vec<Cell>, PatternError> {
    let invalid = |msg: &str| PatternError::InvalidRle(msg.to_owned());
    let overrun = || invalid("run exceeds the declared pattern size");

    let parse_next_number = |i: &mut usize| -> Result<usize, PatternError> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(invalid("expected a number"));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| invalid("expected a number"))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment lines and blank lines
    while i < data.len() && (data[i] == b'#' || data[i] == b'\n' || data[i] == b'\r') {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(invalid("missing `x = .., y = ..` header"));
    }
    let pattern_width = parse_next_number(&mut i)?;
    let pattern_height = parse_next_number(&mut i)?;
    if pattern_width > width {
        return Err(PatternError::RowTooLong {
            line: 1,
            length: pattern_width,
            width,
        });
    }
    if pattern_height > height {
        return Err(PatternError::TooManyRows {
            rows: pattern_height,
            height,
        });
    }
    // the rest of the header may name a rule; only B3/S23 is simulated
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;

    let mut result = vec![Cell::Dead; width * height];
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt): (usize, usize, usize) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= pattern_width && y < pattern_height)
                    .ok_or_else(overrun)?;
                result[y * width + x..y * width + end].fill(Cell::Alive);
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'b' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= pattern_width)
                    .ok_or_else(overrun)?;
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'$' => {
                let next = y
                    .checked_add(cnt)
                    .filter(|&next| next <= pattern_height)
                    .ok_or_else(overrun)?;
                (x, y, i, cnt) = (0, next, i + 1, 1);
            }
            b'!' => break,
            other => {
                return Err(invalid(&format!(
                    "unexpected symbol {:?}",
                    other as char
                )))
            }
        }
    }
    Ok(result)
}
