//! HTTP surface: `GET /{format}?{query}` returns a standalone composition document.

use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    Router,
    extract::{Path, RawQuery},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use rand::Rng;
use tracing::{info, warn};

use crate::{foundation::error::MondrianError, server::route::export_document};

/// Router serving the export route.
pub fn router() -> Router {
    Router::new().route("/:format", get(export))
}

/// Bind `addr` and serve [`router`] until the process is stopped.
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "serving composition exports");
    axum::serve(listener, router())
        .await
        .context("http server")?;
    Ok(())
}

async fn export(Path(format): Path<String>, RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    match export_document(&format, &query, random_seed) {
        Ok(doc) => {
            info!(
                format = %doc.format,
                seed = doc.state.seed,
                cells = doc.cell_count,
                "exported composition"
            );
            ([(header::CONTENT_TYPE, doc.content_type())], doc.body).into_response()
        }
        Err(err) => {
            warn!(%format, error = %err, "export rejected");
            err.into_response()
        }
    }
}

fn random_seed() -> u32 {
    rand::rng().random_range(0..1_000_000)
}

impl IntoResponse for MondrianError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UnsupportedFormat(_) => {
                (StatusCode::BAD_REQUEST, "Unsupported format".to_string())
            }
            err if err.is_client_error() => (StatusCode::BAD_REQUEST, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
