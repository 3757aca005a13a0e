use crate::{
    foundation::core::{CANVAS_SIZE, DOCUMENT_SIZE_PX, format_number},
    generate::grid::Cell,
    state::model::CompositionState,
};

/// Stroke settings for the cell outlines, plus an optional outer frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Border width in pixel-equivalent units; drawn at `border_width / 20` logical units.
    pub border_width: f64,
    pub border_color: String,
    pub frame: Option<SvgFrame>,
}

/// Outer border around the whole canvas, in pixels of the 1000px document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgFrame {
    pub width: f64,
    pub radius: f64,
}

impl SvgStyle {
    /// Cell strokes only, as served by the export route.
    pub fn from_state(state: &CompositionState) -> Self {
        Self {
            border_width: state.border_width,
            border_color: state.border_color.clone(),
            frame: None,
        }
    }

    /// Cell strokes plus the external border and corner radius of `state`.
    pub fn framed(state: &CompositionState) -> Self {
        Self {
            frame: Some(SvgFrame {
                width: state.external_border_width,
                radius: state.border_radius,
            }),
            ..Self::from_state(state)
        }
    }

    fn stroke_width(&self) -> f64 {
        self.border_width / 20.0
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::from_state(&CompositionState::default())
    }
}

/// Standalone SVG document for `cells`: XML declaration, fixed 1000×1000 pixel size over a
/// `0 0 100 100` view box with non-uniform scaling disabled, and one `<rect>` per cell in the
/// order given.
#[tracing::instrument(skip(cells, style), fields(cell_count = cells.len()))]
pub fn render_svg(cells: &[Cell], style: &SvgStyle) -> String {
    let size = DOCUMENT_SIZE_PX;
    let stroke = xml_escape(&style.border_color);
    let stroke_width = format_number(style.stroke_width());

    let mut out = String::with_capacity(256 + cells.len() * 160);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {c} {c}\" preserveAspectRatio=\"none\">\n",
        c = format_number(CANVAS_SIZE),
    ));

    for cell in cells {
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{stroke}\" \
             stroke-width=\"{stroke_width}\"/>\n",
            format_number(cell.x),
            format_number(cell.y),
            format_number(cell.width),
            format_number(cell.height),
            xml_escape(&cell.color),
        ));
    }

    if let Some(frame) = style.frame.filter(|f| f.width > 0.0) {
        // Pixels of the physical document -> logical canvas units.
        let px = CANVAS_SIZE / f64::from(size);
        let w = frame.width * px;
        out.push_str(&format!(
            "  <rect x=\"{half}\" y=\"{half}\" width=\"{inner}\" height=\"{inner}\" rx=\"{rx}\" \
             fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{w}\"/>\n",
            half = format_number(w / 2.0),
            inner = format_number(CANVAS_SIZE - w),
            rx = format_number(frame.radius.max(0.0) * px),
            w = format_number(w),
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
