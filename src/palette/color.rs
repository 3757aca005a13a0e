use std::str::FromStr;

use crate::foundation::error::MondrianError;

/// A color in hue/saturation/lightness form, with hue in degrees `[0, 360)` and saturation and
/// lightness in percent `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// What unparseable palette entries are treated as.
    pub const FALLBACK: Self = Self {
        h: 0.0,
        s: 50.0,
        l: 50.0,
    };

    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Standard sRGB -> HSL conversion; channels are normalized `0..1`.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;
        if d == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Self::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`/`rgba(..)` or `hsl(..)`/`hsla(..)`.
    /// Alpha is accepted and ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
            let [h, sat, l] = leading_numbers(args)?;
            return Ok(Self::new(h, sat, l));
        }
        if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
            let [r, g, b] = leading_numbers(args)?;
            return Ok(Self::from_rgb(
                r.clamp(0.0, 255.0) / 255.0,
                g.clamp(0.0, 255.0) / 255.0,
                b.clamp(0.0, 255.0) / 255.0,
            ));
        }

        Err(format!("unrecognized color \"{s}\""))
    }

    /// [`Hsl::parse`], with [`Hsl::FALLBACK`] for anything it rejects.
    pub fn parse_or_fallback(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::FALLBACK)
    }

    /// Space-separated CSS form with whole-number components, e.g. `hsl(135 57% 60%)`. Commas
    /// would split the color apart in a comma-joined palette list.
    pub fn to_css(self) -> String {
        format!(
            "hsl({} {}% {}%)",
            self.h.round() as i64,
            self.s.round() as i64,
            self.l.round() as i64
        )
    }
}

impl FromStr for Hsl {
    type Err = MondrianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(MondrianError::validation)
    }
}

fn parse_hex(hex: &str) -> Result<Hsl, String> {
    fn channel(digits: &str) -> Result<f64, String> {
        let v = u8::from_str_radix(digits, 16)
            .map_err(|_| format!("invalid hex digits \"{digits}\""))?;
        Ok(f64::from(v) / 255.0)
    }

    if !hex.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match hex.len() {
        3 | 4 => {
            let mut out = [0.0; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                let d = &hex[i..i + 1];
                *slot = channel(&format!("{d}{d}"))?;
            }
            Ok(Hsl::from_rgb(out[0], out[1], out[2]))
        }
        6 | 8 => Ok(Hsl::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err("hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        s.strip_prefix(name)?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

/// First three numbers of a CSS argument list, separators being commas, whitespace or `/`.
fn leading_numbers(args: &str) -> Result<[f64; 3], String> {
    let mut out = [0.0; 3];
    let mut parts = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    for slot in &mut out {
        let part = parts
            .next()
            .ok_or_else(|| format!("expected three components in \"{args}\""))?;
        let digits = part.trim_end_matches('%').trim_end_matches("deg");
        *slot = digits
            .parse::<f64>()
            .map_err(|_| format!("invalid color component \"{part}\""))?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
