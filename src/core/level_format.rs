//! Text codec for level files.
//!
//! ```text
//! <rows>
//! <cols>
//! <row 0: exactly cols symbols>
//! ...
//! <row rows-1>
//! ```
//!
//! Symbols: `.` tile, `@` player on tile, `&` player on destination, `c` crate on tile,
//! `$` crate on destination, `#` wall, `C` empty destination.

use std::path::Path;

use crate::core::errors::{GameError, MapFormatError};
use crate::core::map::Map;
use crate::core::models::Cell;

pub fn parse(text: &str) -> Result<Map, MapFormatError> {
    let mut lines = text.lines();
    let rows = parse_header(lines.next(), "rows")?;
    let cols = parse_header(lines.next(), "columns")?;
    if rows == 0 || cols == 0 {
        return Err(MapFormatError::ZeroDimension { rows, cols });
    }

    let mut grid = Vec::new();
    for row in 0..rows {
        let line = lines.next().ok_or(MapFormatError::MissingRows {
            expected: rows,
            found: row,
        })?;
        let found = line.chars().count();
        if found != cols {
            return Err(MapFormatError::RowLength { row, expected: cols, found });
        }
        let cells = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                Cell::from_symbol(symbol).ok_or(MapFormatError::UnknownSymbol { symbol, row, col })
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(cells);
    }

    if let Some((offset, _)) = lines.enumerate().find(|(_, line)| !line.trim().is_empty()) {
        return Err(MapFormatError::TrailingContent { line: rows + 3 + offset });
    }

    Map::from_cells(grid)
}

fn parse_header(line: Option<&str>, field: &'static str) -> Result<usize, MapFormatError> {
    let value = line.unwrap_or_default();
    value.trim().parse::<usize>().map_err(|_| MapFormatError::BadHeader {
        field,
        value: value.to_string(),
    })
}

pub fn serialize(map: &Map) -> String {
    let mut result = format!("{}\n{}\n", map.row_count(), map.col_count());
    result.push_str(&render_rows(map));
    result
}

/// The grid part of the file format, one line per row.
pub fn render_rows(map: &Map) -> String {
    let mut result = String::with_capacity(map.row_count() * (map.col_count() + 1));
    for row in map.cells() {
        result.extend(row.iter().map(Cell::symbol));
        result.push('\n');
    }
    result
}

pub fn read_level_file(path: &Path) -> Result<Map, GameError> {
    let text = std::fs::read_to_string(path).map_err(|err| GameError::io(path, err))?;
    Ok(parse(&text)?)
}

pub fn write_level_file(path: &Path, map: &Map) -> Result<(), GameError> {
    std::fs::write(path, serialize(map)).map_err(|err| GameError::io(path, err))
}
