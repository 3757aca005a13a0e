//! Palette edits applied to an existing composition without regenerating its geometry.

use crate::{
    foundation::error::{MondrianError, MondrianResult},
    generate::grid::{Cell, color_for_index},
};

/// Re-resolve every cell's color against `palette`, keeping geometry and indices.
pub fn recolor(cells: &[Cell], palette: &[String]) -> Vec<Cell> {
    cells
        .iter()
        .map(|cell| Cell {
            color: color_for_index(palette, cell.color_index).to_string(),
            ..cell.clone()
        })
        .collect()
}

/// Palette with the entry at `index` replaced by `color`.
pub fn replace_palette_color(
    palette: &[String],
    index: usize,
    color: impl Into<String>,
) -> MondrianResult<Vec<String>> {
    if index >= palette.len() {
        return Err(MondrianError::validation(format!(
            "palette index {index} out of range (len {})",
            palette.len()
        )));
    }
    let mut out = palette.to_vec();
    out[index] = color.into();
    Ok(out)
}

/// Drop the palette entry at `index` and remap the cells onto what remains.
///
/// Cells at or past the removed slot keep their numeric index (so they pick up the following
/// color), clamped to the shorter palette. The last remaining color cannot be removed.
pub fn remove_palette_color(
    cells: &[Cell],
    palette: &[String],
    index: usize,
) -> MondrianResult<(Vec<String>, Vec<Cell>)> {
    if palette.len() <= 1 {
        return Err(MondrianError::validation(
            "palette must keep at least one color",
        ));
    }
    if index >= palette.len() {
        return Err(MondrianError::validation(format!(
            "palette index {index} out of range (len {})",
            palette.len()
        )));
    }

    let mut remaining = palette.to_vec();
    remaining.remove(index);
    let last = remaining.len() - 1;

    let cells = cells
        .iter()
        .map(|cell| {
            let color_index = if cell.color_index >= index {
                cell.color_index.min(last)
            } else {
                cell.color_index
            };
            Cell {
                color_index,
                color: color_for_index(&remaining, color_index).to_string(),
                ..cell.clone()
            }
        })
        .collect();

    Ok((remaining, cells))
}

/// Advance the cell with `id` to the next palette color, wrapping at the end.
/// Unknown ids and empty palettes leave the cells unchanged.
pub fn cycle_cell_color(cells: &[Cell], palette: &[String], id: &str) -> Vec<Cell> {
    cells
        .iter()
        .map(|cell| {
            if cell.id != id || palette.is_empty() {
                return cell.clone();
            }
            let color_index = (cell.color_index + 1) % palette.len();
            Cell {
                color_index,
                color: palette[color_index].clone(),
                ..cell.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/edit.rs"]
mod tests;
