use crate::{
    foundation::core::{CANVAS_SIZE, Rect, format_number},
    generate::rng::Mulberry32,
};

/// Built-in palette: white, red, yellow, blue.
pub const DEFAULT_PALETTE: [&str; 4] = ["#ffffff", "#e72f24", "#f0d53c", "#234d9c"];

/// Upper bound applied to `complexity` at the generation boundary.
pub const MAX_COMPLEXITY: u32 = 16;

const MIN_RATIO_BOUND: f64 = 0.01;
const MAX_RATIO_BOUND: f64 = 0.99;

/// One axis-aligned colored rectangle of a composition, in logical canvas units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// `"{x}-{y}-{width}-{height}"`; unique within one generated tiling.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Index into the palette that was active when the color was last resolved.
    pub color_index: usize,
    /// Resolved color string.
    pub color: String,
}

impl Cell {
    fn leaf(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color_index: usize,
        palette: &[String],
    ) -> Self {
        Self {
            id: cell_id(x, y, width, height),
            x,
            y,
            width,
            height,
            color_index,
            color: color_for_index(palette, color_index).to_string(),
        }
    }

    /// Geometry of the cell as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

fn cell_id(x: f64, y: f64, width: f64, height: f64) -> String {
    format!(
        "{}-{}-{}-{}",
        format_number(x),
        format_number(y),
        format_number(width),
        format_number(height)
    )
}

/// Inputs of one generation call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParams {
    /// Recursion depth cap.
    pub complexity: u32,
    pub palette: Vec<String>,
    pub min_split_ratio: f64,
    pub max_split_ratio: f64,
    /// Chance of splitting once the remaining depth drops below 3.
    pub split_probability: f64,
    /// Minimum size in pixel-equivalent units; scaled by depth into the split gate.
    pub min_size: f64,
    pub seed: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            complexity: 4,
            palette: default_palette(),
            min_split_ratio: 0.35,
            max_split_ratio: 0.65,
            split_probability: 0.5,
            min_size: 150.0,
            seed: 0,
        }
    }
}

impl GenerationParams {
    /// Copy of `self` that is safe to subdivide with.
    ///
    /// In-range values pass through bit-identical. Out-of-range values are repaired instead of
    /// rejected:
    ///
    /// - an empty palette becomes [`DEFAULT_PALETTE`]
    /// - `complexity` is capped at [`MAX_COMPLEXITY`]
    /// - split ratios fall back to their defaults when not finite, are clamped into
    ///   `[0.01, 0.99]` and swapped when inverted
    /// - `split_probability` falls back to its default when not finite and is clamped to `[0, 1]`
    /// - a non-finite or non-positive `min_size` falls back to its default
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };

        let mut min_split_ratio = finite_or(self.min_split_ratio, defaults.min_split_ratio)
            .clamp(MIN_RATIO_BOUND, MAX_RATIO_BOUND);
        let mut max_split_ratio = finite_or(self.max_split_ratio, defaults.max_split_ratio)
            .clamp(MIN_RATIO_BOUND, MAX_RATIO_BOUND);
        if min_split_ratio > max_split_ratio {
            std::mem::swap(&mut min_split_ratio, &mut max_split_ratio);
        }

        let min_size = if self.min_size.is_finite() && self.min_size > 0.0 {
            self.min_size
        } else {
            defaults.min_size
        };

        Self {
            complexity: self.complexity.min(MAX_COMPLEXITY),
            palette: if self.palette.is_empty() {
                defaults.palette
            } else {
                self.palette.clone()
            },
            min_split_ratio,
            max_split_ratio,
            split_probability: finite_or(self.split_probability, defaults.split_probability)
                .clamp(0.0, 1.0),
            min_size,
            seed: self.seed,
        }
    }
}

/// [`DEFAULT_PALETTE`] as owned strings.
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
}

/// Resolve `index` against `palette`, clamping it into range.
///
/// Never fails: a stale index past the end resolves to the last color, and an empty palette
/// resolves to the first built-in color.
pub fn color_for_index(palette: &[String], index: usize) -> &str {
    match palette.len() {
        0 => DEFAULT_PALETTE[0],
        len => &palette[index.min(len - 1)],
    }
}

/// Subdivide the canvas into colored cells.
///
/// Identical params always yield an identical sequence. Cells come out in depth-first order with
/// the left/top child of every split before the right/bottom one; together they partition
/// `[0,100]×[0,100]` and there are never more than `2^complexity` of them.
#[tracing::instrument(skip(params), fields(seed = params.seed, complexity = params.complexity))]
pub fn generate_grid(params: &GenerationParams) -> Vec<Cell> {
    let params = params.sanitized();

    let mut sub = Subdivider {
        rng: Mulberry32::new(params.seed),
        split_gate: split_gate(params.min_size, params.complexity),
        params: &params,
        cells: Vec::new(),
    };
    sub.subdivide(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE, params.complexity);

    tracing::debug!(cells = sub.cells.len(), "generated grid");
    sub.cells
}

/// Smallest dimension that may still be split. Shallow compositions get a larger gate so they
/// do not end in slivers.
fn split_gate(min_size: f64, complexity: u32) -> f64 {
    if complexity == 0 {
        return f64::INFINITY;
    }
    let adjusted = (min_size / (f64::from(complexity) * 2.0)).max(4.0);
    adjusted / 100.0 * 2.0
}

struct Subdivider<'a> {
    rng: Mulberry32,
    split_gate: f64,
    params: &'a GenerationParams,
    cells: Vec<Cell>,
}

impl Subdivider<'_> {
    fn subdivide(&mut self, x: f64, y: f64, width: f64, height: f64, depth: u32) {
        // Draw order is part of the output contract: stop roll, axis roll, ratio roll.
        if depth == 0 || (self.rng.next_f64() > self.params.split_probability && depth < 3) {
            self.emit(x, y, width, height);
            return;
        }

        let vertical = self.rng.next_f64() > 0.5;
        let dimension = if vertical { width } else { height };
        if dimension <= self.split_gate {
            self.emit(x, y, width, height);
            return;
        }

        let ratio = self.params.min_split_ratio
            + self.rng.next_f64() * (self.params.max_split_ratio - self.params.min_split_ratio);
        if vertical {
            let split = width * ratio;
            self.subdivide(x, y, split, height, depth - 1);
            self.subdivide(x + split, y, width - split, height, depth - 1);
        } else {
            let split = height * ratio;
            self.subdivide(x, y, width, split, depth - 1);
            self.subdivide(x, y + split, width, height - split, depth - 1);
        }
    }

    fn emit(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let len = self.params.palette.len();
        let color_index = ((self.rng.next_f64() * len as f64).floor() as usize).min(len - 1);
        self.cells.push(Cell::leaf(
            x,
            y,
            width,
            height,
            color_index,
            &self.params.palette,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/grid.rs"]
mod tests;
