use super::*;
use crate::state::codec::decode_query;

fn state() -> CompositionState {
    CompositionState {
        seed: 31,
        fullscreen: true,
        ..CompositionState::default()
    }
}

#[test]
fn export_link_names_the_format() {
    let url = share_url("https://mondrian.example/", &state(), Some(ExportFormat::Svg)).unwrap();
    assert!(url.starts_with("https://mondrian.example/svg?c=4&"), "{url}");
    assert!(url.ends_with("&seed=31&fs=1"), "{url}");
}

#[test]
fn page_link_round_trips() {
    let url = share_url("http://localhost:3000", &state(), None).unwrap();
    let (base, query) = url.split_once('?').unwrap();
    assert_eq!(base, "http://localhost:3000/");
    assert_eq!(decode_query(query).unwrap().resolve(|| 0), state());
}
