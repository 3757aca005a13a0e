use super::*;

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

fn params(complexity: u32, seed: u32) -> GenerationParams {
    GenerationParams {
        complexity,
        seed,
        ..GenerationParams::default()
    }
}

#[test]
fn seed_42_depth_4_matches_reference_layout() {
    let cells = generate_grid(&params(4, 42));
    let expected: [(f64, f64, f64, f64, usize); 12] = [
        (0.0, 0.0, 60.964239449240274, 18.9119274917911, 2),
        (0.0, 18.9119274917911, 60.964239449240274, 11.858304196670737, 1),
        (60.964239449240274, 0.0, 21.70324288958663, 30.770231688461838, 2),
        (82.6674823388269, 0.0, 17.332517661173096, 30.770231688461838, 0),
        (0.0, 30.770231688461838, 36.536277988925576, 29.803742116250465, 0),
        (36.536277988925576, 30.770231688461838, 63.463722011074424, 12.091577925697335, 3),
        (36.536277988925576, 42.86180961415917, 63.463722011074424, 17.712164190553132, 2),
        (0.0, 60.5739738047123, 44.5838523702696, 8.684615803976103, 2),
        (0.0, 69.25858960868841, 44.5838523702696, 15.081646595435332, 2),
        (44.5838523702696, 60.5739738047123, 22.878730921414085, 23.766262399411435, 1),
        (67.46258329168369, 60.5739738047123, 32.537416708316314, 23.766262399411435, 2),
        (0.0, 84.34023620412374, 100.0, 15.659763795876263, 2),
    ];

    assert_eq!(cells.len(), expected.len());
    for (cell, (x, y, w, h, idx)) in cells.iter().zip(expected) {
        assert_eq!((cell.x, cell.y, cell.width, cell.height), (x, y, w, h));
        assert_eq!(cell.color_index, idx);
        assert_eq!(cell.color, DEFAULT_PALETTE[idx]);
    }
    assert_eq!(cells[0].id, "0-0-60.964239449240274-18.9119274917911");
    assert_eq!(cells[11].id, "0-84.34023620412374-100-15.659763795876263");
}

#[test]
fn shallow_two_color_example_stops_at_first_roll() {
    let p = GenerationParams {
        complexity: 2,
        palette: palette(&["#ffffff", "#e72f24"]),
        seed: 42,
        ..GenerationParams::default()
    };
    let cells = generate_grid(&p);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].id, "0-0-100-100");
    assert_eq!(cells[0].color, "#ffffff");
}

#[test]
fn depth_three_splits_unconditionally_at_the_top() {
    let p = GenerationParams {
        complexity: 3,
        palette: palette(&["#ffffff", "#e72f24"]),
        seed: 42,
        ..GenerationParams::default()
    };
    let cells = generate_grid(&p);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].height, 60.5739738047123);
    assert_eq!(cells[1].y, 60.5739738047123);
    assert_eq!(cells[1].height, 39.4260261952877);
}

#[test]
fn complexity_zero_emits_whole_canvas() {
    let cells = generate_grid(&params(0, 9));
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].rect(), crate::foundation::core::canvas_rect());
}

#[test]
fn empty_palette_uses_builtin_colors() {
    let p = GenerationParams {
        palette: Vec::new(),
        ..params(4, 42)
    };
    let with_default = generate_grid(&params(4, 42));
    assert_eq!(generate_grid(&p), with_default);
}

#[test]
fn sanitize_keeps_in_range_values() {
    let p = params(5, 11);
    assert_eq!(p.sanitized(), p);
}

#[test]
fn sanitize_repairs_degenerate_values() {
    let p = GenerationParams {
        complexity: 99,
        palette: Vec::new(),
        min_split_ratio: 0.9,
        max_split_ratio: f64::NAN,
        split_probability: 7.0,
        min_size: -3.0,
        seed: 1,
    }
    .sanitized();

    assert_eq!(p.complexity, MAX_COMPLEXITY);
    assert_eq!(p.palette, default_palette());
    assert_eq!(p.min_split_ratio, 0.65);
    assert_eq!(p.max_split_ratio, 0.9);
    assert_eq!(p.split_probability, 1.0);
    assert_eq!(p.min_size, 150.0);
}

#[test]
fn inverted_ratios_still_tile() {
    let p = GenerationParams {
        min_split_ratio: 0.8,
        max_split_ratio: 0.2,
        ..params(6, 3)
    };
    let total: f64 = generate_grid(&p).iter().map(Cell::area).sum();
    assert!((total - 10_000.0).abs() < 1e-6);
}

#[test]
fn color_for_index_clamps() {
    let p = palette(&["#111111", "#222222"]);
    assert_eq!(color_for_index(&p, 0), "#111111");
    assert_eq!(color_for_index(&p, 1), "#222222");
    assert_eq!(color_for_index(&p, 40), "#222222");
    assert_eq!(color_for_index(&[], 3), DEFAULT_PALETTE[0]);
}

#[test]
fn split_gate_scales_with_depth() {
    assert_eq!(split_gate(150.0, 4), 0.375);
    // Deep compositions bottom out at the 4-unit floor.
    assert_eq!(split_gate(150.0, 40), 0.08);
    assert!(split_gate(150.0, 0).is_infinite());
}

#[test]
fn cell_serializes_with_camel_case_keys() {
    let cell = &generate_grid(&params(1, 2))[0];
    let json = serde_json::to_value(cell).unwrap();
    assert!(json.get("colorIndex").is_some());
    assert!(json.get("color_index").is_none());
}
