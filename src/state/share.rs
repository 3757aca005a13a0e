use crate::{
    foundation::error::MondrianResult,
    render::format::ExportFormat,
    state::{
        codec::{EncodeMode, encode_query},
        model::CompositionState,
    },
};

/// Link that reproduces `state` exactly: `{origin}/{format}?{query}` for an export link, or
/// `{origin}/?{query}` for the interactive page. Always uses the full encoding.
pub fn share_url(
    origin: &str,
    state: &CompositionState,
    format: Option<ExportFormat>,
) -> MondrianResult<String> {
    let origin = origin.trim_end_matches('/');
    let query = encode_query(state, EncodeMode::Full)?;
    Ok(match format {
        Some(format) => format!("{origin}/{format}?{query}"),
        None => format!("{origin}/?{query}"),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/state/share.rs"]
mod tests;
