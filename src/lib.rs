//! Mondrian generates Mondrian-style compositions: colored rectangles that exactly tile a
//! `100×100` canvas, produced by a seeded recursive subdivision.
//!
//! # Pipeline overview
//!
//! 1. **Decode** (optional): `query string -> PartialState -> CompositionState`
//! 2. **Generate**: `GenerationParams -> Vec<Cell>` (pure and deterministic for a given seed)
//! 3. **Render**: `Vec<Cell> -> SVG document`, optionally rasterized to PNG/WebP
//! 4. **Share**: `CompositionState -> query string / URL`
//!
//! The same `(parameters, seed)` always yields the same cells in the same order, on every
//! platform. Randomness that is not meant to be reproducible (suggesting a new palette color,
//! picking a seed when none was given) lives outside the generator and never touches its
//! stream.
#![forbid(unsafe_code)]

mod foundation;
mod generate;
mod palette;
mod render;
mod server;
mod state;

pub use foundation::core::{CANVAS_SIZE, DOCUMENT_SIZE_PX, Rect, canvas_rect};
pub use foundation::error::{MondrianError, MondrianResult};
pub use generate::grid::{
    Cell, DEFAULT_PALETTE, GenerationParams, MAX_COMPLEXITY, color_for_index, default_palette,
    generate_grid,
};
pub use generate::rng::Mulberry32;
pub use palette::color::Hsl;
pub use palette::edit::{cycle_cell_color, recolor, remove_palette_color, replace_palette_color};
pub use palette::extend::{generate_random_color, generate_random_color_with};
pub use render::format::ExportFormat;
pub use render::raster::{DEFAULT_RASTER_SCALE, RasterFormat, rasterize, rasterize_rgba8};
pub use render::svg::{SvgFrame, SvgStyle, render_svg};
pub use server::http::{router, serve};
pub use server::route::{ExportedDocument, export_document};
pub use state::codec::{EncodeMode, decode_query, encode_query};
pub use state::model::{CompositionState, DEFAULT_TITLE, PartialState, defaults};
pub use state::share::share_url;
