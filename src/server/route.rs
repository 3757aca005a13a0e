use crate::{
    foundation::error::{MondrianError, MondrianResult},
    generate::grid::generate_grid,
    render::{
        format::ExportFormat,
        svg::{SvgStyle, render_svg},
    },
    state::{codec::decode_query, model::CompositionState},
};

/// Result of a successful export request.
#[derive(Clone, Debug)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub body: String,
    /// Fully resolved state the document was generated from.
    pub state: CompositionState,
    pub cell_count: usize,
}

impl ExportedDocument {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Serve `/{format}?{query}`.
///
/// Only `svg` is served; any other token is rejected before anything is generated. Missing
/// query fields take their documented defaults, and `fallback_seed` is called only when the
/// query carries no seed.
pub fn export_document(
    format: &str,
    query: &str,
    fallback_seed: impl FnOnce() -> u32,
) -> MondrianResult<ExportedDocument> {
    let format = match format.parse::<ExportFormat>()? {
        ExportFormat::Svg => ExportFormat::Svg,
        other => return Err(MondrianError::unsupported_format(other.as_str())),
    };

    let state = decode_query(query)?.resolve(fallback_seed);
    let cells = generate_grid(&state.generation_params());
    let body = render_svg(&cells, &SvgStyle::from_state(&state));

    Ok(ExportedDocument {
        format,
        body,
        cell_count: cells.len(),
        state,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/server/route.rs"]
mod tests;
