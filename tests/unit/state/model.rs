use super::*;

#[test]
fn defaults_match_documented_values() {
    let s = CompositionState::default();
    assert_eq!(s.complexity, 4);
    assert_eq!(s.colors, vec!["#ffffff", "#e72f24", "#f0d53c", "#234d9c"]);
    assert_eq!(s.border_width, 12.0);
    assert_eq!(s.border_color, "#121212");
    assert_eq!((s.min_split_ratio, s.max_split_ratio), (0.35, 0.65));
    assert_eq!(s.split_probability, 0.5);
    assert_eq!(s.min_size, 150.0);
    assert_eq!(s.external_border_width, 16.0);
    assert_eq!(s.border_radius, 0.0);
    assert!(!s.fullscreen);
    assert_eq!(s.title, "Mondrian");
}

#[test]
fn json_config_fills_missing_fields() {
    let s: CompositionState =
        serde_json::from_str(r##"{"complexity": 6, "seed": 7, "borderColor": "#000000"}"##).unwrap();
    assert_eq!(s.complexity, 6);
    assert_eq!(s.seed, 7);
    assert_eq!(s.border_color, "#000000");
    assert_eq!(s.min_size, 150.0);
    assert_eq!(s.title, DEFAULT_TITLE);
}

#[test]
fn resolve_only_draws_seed_when_absent() {
    let with_seed = PartialState {
        seed: Some(5),
        ..PartialState::default()
    };
    let resolved = with_seed.resolve(|| panic!("seed was present"));
    assert_eq!(resolved.seed, 5);

    let resolved = PartialState::default().resolve(|| 99);
    assert_eq!(resolved.seed, 99);
    assert_eq!(
        resolved,
        CompositionState {
            seed: 99,
            ..CompositionState::default()
        }
    );
}

#[test]
fn merge_overlays_only_present_fields() {
    let base = CompositionState {
        seed: 3,
        title: "Keep".to_string(),
        ..CompositionState::default()
    };
    let merged = base.clone().merge(PartialState {
        complexity: Some(7),
        colors: Some(vec!["#000".to_string()]),
        ..PartialState::default()
    });
    assert_eq!(merged.complexity, 7);
    assert_eq!(merged.colors, vec!["#000"]);
    assert_eq!(merged.seed, 3);
    assert_eq!(merged.title, "Keep");
}

#[test]
fn generation_params_carry_generation_fields() {
    let s = CompositionState {
        complexity: 6,
        seed: 12,
        min_size: 80.0,
        ..CompositionState::default()
    };
    let p = s.generation_params();
    assert_eq!(p.complexity, 6);
    assert_eq!(p.seed, 12);
    assert_eq!(p.min_size, 80.0);
    assert_eq!(p.palette, s.colors);
}
