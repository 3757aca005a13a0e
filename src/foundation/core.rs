pub use kurbo::Rect;

/// Side length of the logical canvas every composition tiles.
pub const CANVAS_SIZE: f64 = 100.0;

/// Physical width and height, in pixels, of an exported vector document.
pub const DOCUMENT_SIZE_PX: u32 = 1000;

/// The full logical canvas `(0,0)..(100,100)`.
pub fn canvas_rect() -> Rect {
    Rect::new(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE)
}

/// Shortest round-trip decimal form of `v`, with integral values printed without a fraction
/// (`150`, not `150.0`), negative zero folded into `0` and non-finite values spelled `NaN`,
/// `Infinity` and `-Infinity`. Very large or small magnitudes print in plain decimal, never in
/// exponent form.
///
/// Used wherever a number ends up in text that is parsed back later (cell ids, query strings,
/// SVG attributes), so a value always prints the same way.
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
