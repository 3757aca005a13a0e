use crate::generate::grid::{GenerationParams, default_palette};

/// Title used when none is given; never written into a query string.
pub const DEFAULT_TITLE: &str = "Mondrian";

/// Documented defaults, shared by compact encoding and by [`PartialState::resolve`].
pub mod defaults {
    pub const COMPLEXITY: u32 = 4;
    pub const BORDER_WIDTH: f64 = 12.0;
    pub const BORDER_COLOR: &str = "#121212";
    pub const MIN_SPLIT_RATIO: f64 = 0.35;
    pub const MAX_SPLIT_RATIO: f64 = 0.65;
    pub const SPLIT_PROBABILITY: f64 = 0.5;
    pub const MIN_SIZE: f64 = 150.0;
    pub const EXTERNAL_BORDER_WIDTH: f64 = 16.0;
    pub const BORDER_RADIUS: f64 = 0.0;
}

/// Everything needed to reproduce and present one composition: the generation inputs plus
/// presentation-only fields.
///
/// Loads from JSON with missing fields defaulted, e.g. `{"complexity": 6, "seed": 7}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositionState {
    pub complexity: u32,
    pub colors: Vec<String>,
    pub border_width: f64,
    /// `#`-prefixed hex.
    pub border_color: String,
    pub min_split_ratio: f64,
    pub max_split_ratio: f64,
    pub split_probability: f64,
    pub min_size: f64,
    pub external_border_width: f64,
    pub border_radius: f64,
    pub seed: u32,
    pub fullscreen: bool,
    pub title: String,
}

impl Default for CompositionState {
    fn default() -> Self {
        Self {
            complexity: defaults::COMPLEXITY,
            colors: default_palette(),
            border_width: defaults::BORDER_WIDTH,
            border_color: defaults::BORDER_COLOR.to_string(),
            min_split_ratio: defaults::MIN_SPLIT_RATIO,
            max_split_ratio: defaults::MAX_SPLIT_RATIO,
            split_probability: defaults::SPLIT_PROBABILITY,
            min_size: defaults::MIN_SIZE,
            external_border_width: defaults::EXTERNAL_BORDER_WIDTH,
            border_radius: defaults::BORDER_RADIUS,
            seed: 0,
            fullscreen: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl CompositionState {
    /// The subset of this state that drives geometry and coloring.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            complexity: self.complexity,
            palette: self.colors.clone(),
            min_split_ratio: self.min_split_ratio,
            max_split_ratio: self.max_split_ratio,
            split_probability: self.split_probability,
            min_size: self.min_size,
            seed: self.seed,
        }
    }

    /// Overlay every field that is set in `partial`.
    pub fn merge(mut self, partial: PartialState) -> Self {
        fn overlay<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        overlay(&mut self.complexity, partial.complexity);
        overlay(&mut self.colors, partial.colors);
        overlay(&mut self.border_width, partial.border_width);
        overlay(&mut self.border_color, partial.border_color);
        overlay(&mut self.min_split_ratio, partial.min_split_ratio);
        overlay(&mut self.max_split_ratio, partial.max_split_ratio);
        overlay(&mut self.split_probability, partial.split_probability);
        overlay(&mut self.min_size, partial.min_size);
        overlay(&mut self.external_border_width, partial.external_border_width);
        overlay(&mut self.border_radius, partial.border_radius);
        overlay(&mut self.seed, partial.seed);
        overlay(&mut self.fullscreen, partial.fullscreen);
        overlay(&mut self.title, partial.title);
        self
    }
}

/// A decoded query string: only the keys that were present are set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialState {
    pub complexity: Option<u32>,
    pub colors: Option<Vec<String>>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
    pub min_split_ratio: Option<f64>,
    pub max_split_ratio: Option<f64>,
    pub split_probability: Option<f64>,
    pub min_size: Option<f64>,
    pub external_border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub seed: Option<u32>,
    pub fullscreen: Option<bool>,
    pub title: Option<String>,
}

impl PartialState {
    /// Fill every absent field from the documented defaults. `fallback_seed` is only consulted
    /// when no seed was present.
    pub fn resolve(self, fallback_seed: impl FnOnce() -> u32) -> CompositionState {
        let seed = self.seed.unwrap_or_else(fallback_seed);
        CompositionState {
            seed,
            ..CompositionState::default()
        }
        .merge(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/model.rs"]
mod tests;
