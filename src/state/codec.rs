//! Query-string form of [`CompositionState`], the format used in shared URLs.
//!
//! | field                 | key      |
//! |-----------------------|----------|
//! | complexity            | `c`      |
//! | colors                | `colors` (comma-joined) |
//! | border_width          | `bw`     |
//! | border_color          | `bc` (hex without `#`) |
//! | min_split_ratio       | `minr`   |
//! | max_split_ratio       | `maxr`   |
//! | split_probability     | `sp`     |
//! | min_size              | `ms`     |
//! | external_border_width | `ebw`    |
//! | border_radius         | `br`     |
//! | seed                  | `seed`   |
//! | fullscreen            | `fs` (`1`, omitted when false) |
//! | title                 | `title` (omitted when default) |
//!
//! Decoding performs no range validation; out-of-range values are repaired later, at the
//! generation boundary ([`crate::GenerationParams::sanitized`]).

use crate::{
    foundation::{
        core::format_number,
        error::{MondrianError, MondrianResult},
    },
    generate::grid::DEFAULT_PALETTE,
    state::model::{CompositionState, DEFAULT_TITLE, PartialState, defaults},
};

/// Which keys [`encode_query`] writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodeMode {
    /// Omit keys whose value equals the documented default. `seed` is always written.
    #[default]
    Compact,
    /// Write every key, for explicit sharing.
    Full,
}

/// Serialize `state` as an `application/x-www-form-urlencoded` query (no leading `?`).
///
/// In both modes `fs` is only written when fullscreen is on and `title` only when it differs
/// from the default title.
pub fn encode_query(state: &CompositionState, mode: EncodeMode) -> MondrianResult<String> {
    let full = mode == EncodeMode::Full;
    let colors = state.colors.join(",");

    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(13);
    let mut put = |key: &'static str, differs: bool, value: String| {
        if full || differs {
            pairs.push((key, value));
        }
    };

    put(
        "c",
        state.complexity != defaults::COMPLEXITY,
        state.complexity.to_string(),
    );
    put("colors", colors != DEFAULT_PALETTE.join(","), colors);
    put(
        "bw",
        state.border_width != defaults::BORDER_WIDTH,
        format_number(state.border_width),
    );
    put(
        "bc",
        state.border_color != defaults::BORDER_COLOR,
        state.border_color.replacen('#', "", 1),
    );
    put(
        "minr",
        state.min_split_ratio != defaults::MIN_SPLIT_RATIO,
        format_number(state.min_split_ratio),
    );
    put(
        "maxr",
        state.max_split_ratio != defaults::MAX_SPLIT_RATIO,
        format_number(state.max_split_ratio),
    );
    put(
        "sp",
        state.split_probability != defaults::SPLIT_PROBABILITY,
        format_number(state.split_probability),
    );
    put(
        "ms",
        state.min_size != defaults::MIN_SIZE,
        format_number(state.min_size),
    );
    put(
        "ebw",
        state.external_border_width != defaults::EXTERNAL_BORDER_WIDTH,
        format_number(state.external_border_width),
    );
    put(
        "br",
        state.border_radius != defaults::BORDER_RADIUS,
        format_number(state.border_radius),
    );
    // Reproducing a composition needs the seed even when nothing else changed.
    put("seed", true, state.seed.to_string());

    if state.fullscreen {
        pairs.push(("fs", "1".to_string()));
    }
    if !state.title.is_empty() && state.title != DEFAULT_TITLE {
        pairs.push(("title", state.title.clone()));
    }

    serde_urlencoded::to_string(&pairs).map_err(|e| MondrianError::codec(e.to_string()))
}

/// Parse a query string (an optional leading `?` is ignored) into the fields it mentions.
///
/// Unknown keys are ignored and the first occurrence of a repeated key wins. Numbers that do
/// not parse come through as NaN (floats) or 0 (integers) rather than as errors.
pub fn decode_query(query: &str) -> MondrianResult<PartialState> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| MondrianError::codec(e.to_string()))?;

    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    Ok(PartialState {
        complexity: get("c").map(parse_count),
        colors: get("colors").map(|v| v.split(',').map(str::to_string).collect()),
        border_width: get("bw").map(parse_number),
        border_color: get("bc").map(|v| format!("#{v}")),
        min_split_ratio: get("minr").map(parse_number),
        max_split_ratio: get("maxr").map(parse_number),
        split_probability: get("sp").map(parse_number),
        min_size: get("ms").map(parse_number),
        external_border_width: get("ebw").map(parse_number),
        border_radius: get("br").map(parse_number),
        seed: get("seed").map(parse_seed),
        fullscreen: get("fs").map(|v| v == "1"),
        title: get("title").map(str::to_string),
    })
}

/// Lenient number parse: surrounding whitespace is ignored, blank means 0, garbage means NaN.
fn parse_number(v: &str) -> f64 {
    let v = v.trim();
    if v.is_empty() {
        return 0.0;
    }
    v.parse::<f64>().unwrap_or(f64::NAN)
}

/// Truncating, saturating count; NaN becomes 0.
fn parse_count(v: &str) -> u32 {
    parse_number(v) as u32
}

/// Seeds wrap into 32 bits, so `-1` and `4294967295` name the same stream.
fn parse_seed(v: &str) -> u32 {
    let n = parse_number(v);
    if !n.is_finite() {
        return 0;
    }
    (n.trunc() as i64) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/state/codec.rs"]
mod tests;
