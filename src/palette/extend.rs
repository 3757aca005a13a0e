use rand::Rng;

use crate::palette::color::Hsl;

const SATURATION_RANGE: (f64, f64) = (50.0, 80.0);
const LIGHTNESS_RANGE: (f64, f64) = (40.0, 60.0);

/// Suggest one new palette color that is visually distinct from `existing`.
///
/// Advisory only and drawn from the thread RNG; the deterministic grid generator never calls
/// this, and the two never share a random stream.
pub fn generate_random_color(existing: &[String]) -> String {
    generate_random_color_with(existing, &mut rand::rng())
}

/// [`generate_random_color`] with an explicit RNG. The RNG is only consulted when `existing` is
/// empty.
pub fn generate_random_color_with<R: Rng + ?Sized>(existing: &[String], rng: &mut R) -> String {
    let parsed: Vec<Hsl> = existing.iter().map(|c| Hsl::parse_or_fallback(c)).collect();

    match parsed.as_slice() {
        [] => Hsl::new(rng.random_range(0.0..360.0), 60.0, 50.0).to_css(),
        [only] => Hsl::new(only.h + 180.0, 60.0, 50.0).to_css(),
        many => {
            let n = many.len() as f64;
            let avg_s = many.iter().map(|c| c.s).sum::<f64>() / n;
            let avg_l = many.iter().map(|c| c.l).sum::<f64>() / n;
            Hsl::new(
                largest_gap_midpoint(many),
                avg_s.clamp(SATURATION_RANGE.0, SATURATION_RANGE.1),
                avg_l.clamp(LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1),
            )
            .to_css()
        }
    }
}

/// Midpoint of the widest circular gap between the hues of `colors`; the gap after the largest
/// hue wraps around through 360°.
fn largest_gap_midpoint(colors: &[Hsl]) -> f64 {
    let mut hues: Vec<f64> = colors.iter().map(|c| c.h).collect();
    hues.sort_by(f64::total_cmp);

    let mut best_start = 0.0;
    let mut best_gap = 0.0;
    for (i, &hue) in hues.iter().enumerate() {
        let next = hues.get(i + 1).copied().unwrap_or(hues[0] + 360.0);
        let gap = next - hue;
        if gap > best_gap {
            best_gap = gap;
            best_start = hue;
        }
    }

    (best_start + best_gap / 2.0).rem_euclid(360.0)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/extend.rs"]
mod tests;
