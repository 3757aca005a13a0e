use super::*;
use crate::generate::grid::{GenerationParams, generate_grid};

fn cells() -> Vec<Cell> {
    generate_grid(&GenerationParams {
        complexity: 4,
        seed: 42,
        ..GenerationParams::default()
    })
}

#[test]
fn document_header_is_fixed_size_over_unit_viewbox() {
    let svg = render_svg(&cells(), &SvgStyle::default());
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
    assert!(svg.contains("width=\"1000\" height=\"1000\""));
    assert!(svg.contains("viewBox=\"0 0 100 100\""));
    assert!(svg.contains("preserveAspectRatio=\"none\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn one_rect_per_cell_in_generator_order() {
    let cells = cells();
    let svg = render_svg(&cells, &SvgStyle::default());
    let rects: Vec<&str> = svg.lines().filter(|l| l.contains("<rect")).collect();
    assert_eq!(rects.len(), cells.len());
    assert_eq!(
        rects[0].trim(),
        "<rect x=\"0\" y=\"0\" width=\"60.964239449240274\" height=\"18.9119274917911\" \
         fill=\"#f0d53c\" stroke=\"#121212\" stroke-width=\"0.6\"/>"
    );
    assert!(rects[11].contains("y=\"84.34023620412374\" width=\"100\""));
}

#[test]
fn stroke_width_is_border_width_over_twenty() {
    let style = SvgStyle {
        border_width: 24.0,
        border_color: "#000000".to_string(),
        frame: None,
    };
    let svg = render_svg(&cells(), &style);
    assert!(svg.contains("stroke=\"#000000\" stroke-width=\"1.2\""));
}

#[test]
fn output_is_stable() {
    let style = SvgStyle::default();
    assert_eq!(render_svg(&cells(), &style), render_svg(&cells(), &style));
}

#[test]
fn framed_style_appends_outer_border() {
    let state = CompositionState {
        border_radius: 40.0,
        ..CompositionState::default()
    };
    let svg = render_svg(&cells(), &SvgStyle::framed(&state));
    let last_rect = svg.lines().filter(|l| l.contains("<rect")).last().unwrap();
    assert_eq!(
        last_rect.trim(),
        "<rect x=\"0.8\" y=\"0.8\" width=\"98.4\" height=\"98.4\" rx=\"4\" fill=\"none\" \
         stroke=\"#121212\" stroke-width=\"1.6\"/>"
    );

    let unframed = render_svg(&cells(), &SvgStyle::from_state(&state));
    assert!(!unframed.contains("fill=\"none\""));
}

#[test]
fn attribute_values_are_escaped() {
    let mut cells = cells();
    cells[0].color = "\"><script>".to_string();
    let svg = render_svg(&cells, &SvgStyle::default());
    assert!(svg.contains("fill=\"&quot;&gt;&lt;script&gt;\""));
    assert!(!svg.contains("<script>"));
}

#[test]
fn generated_document_parses_as_svg() {
    let svg = render_svg(&cells(), &SvgStyle::framed(&CompositionState::default()));
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 1000.0);
}
