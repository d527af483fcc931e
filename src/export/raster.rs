// SPDX-License-Identifier: MPL-2.0
//! SVG to PNG rasterization.

use crate::app::config::{MAX_EXPORT_SCALE, MIN_EXPORT_SCALE};
use crate::card::CardDocument;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use resvg::usvg;
use std::sync::{Arc, OnceLock};

static FONT_DATABASE: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// System fonts, loaded on first export.
fn font_database() -> Arc<usvg::fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Renders `document` at `scale` (clamped to 1-4) and encodes it as PNG.
pub fn rasterize(document: &CardDocument, scale: f32) -> Result<Vec<u8>> {
    let scale = scale.clamp(MIN_EXPORT_SCALE, MAX_EXPORT_SCALE);

    let options = usvg::Options {
        fontdb: font_database(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(&document.svg, &options)
        .map_err(|err| Error::Export(format!("invalid card document: {err}")))?;

    let size = tree.size();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (
        (size.width() * scale).ceil() as u32,
        (size.height() * scale).ceil() as u32,
    );
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Export(format!("cannot allocate {width}x{height} bitmap")))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| Error::Export(err.to_string()))
}

/// Wraps PNG bytes in a `data:image/png;base64,` URI.
#[must_use]
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
