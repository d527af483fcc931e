// SPDX-License-Identifier: MPL-2.0
//! Card export.
//!
//! The card is located by element identifier through [`RenderTargets`],
//! rasterized with resvg at the configured scale, encoded as PNG and written
//! next to earlier exports without overwriting them.
//!
//! # Example
//!
//! ```no_run
//! use iced_cardmaker::card::{CardDocument, CARD_ELEMENT_ID};
//! use iced_cardmaker::export::{export_card, Destination, TargetSnapshot};
//!
//! # fn document() -> CardDocument { unimplemented!() }
//! let mut targets = TargetSnapshot::default();
//! targets.insert(CARD_ELEMENT_ID, document());
//! let dest = Destination::Directory("/tmp".into());
//! let path = export_card(&targets, CARD_ELEMENT_ID, "Ada.png", &dest, 2.0)?;
//! # Ok::<(), iced_cardmaker::error::Error>(())
//! ```

mod naming;
mod raster;

pub use naming::{export_file_name, sanitize_stem, unique_path};
pub use raster::{png_data_uri, rasterize};

use crate::card::CardDocument;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Looks up rendered elements by identifier.
pub trait RenderTargets {
    /// Returns the document currently rendered under `element_id`.
    fn locate(&self, element_id: &str) -> Option<CardDocument>;
}

/// Owned copy of the render targets, movable into a background task.
#[derive(Debug, Clone, Default)]
pub struct TargetSnapshot {
    targets: HashMap<String, CardDocument>,
}

impl TargetSnapshot {
    pub fn insert(&mut self, element_id: impl Into<String>, document: CardDocument) {
        self.targets.insert(element_id.into(), document);
    }
}

impl RenderTargets for TargetSnapshot {
    fn locate(&self, element_id: &str) -> Option<CardDocument> {
        self.targets.get(element_id).cloned()
    }
}

/// Where an exported card is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written as `<file_name>` inside the directory, never overwriting.
    Directory(PathBuf),
    /// Written to exactly this path (picked in a save dialog).
    File(PathBuf),
}

/// Rasterizes the element `element_id` and saves it as PNG.
///
/// Returns the written path. Fails with [`Error::RenderTargetMissing`] when
/// nothing is rendered under `element_id`.
pub fn export_card<T>(
    targets: &T,
    element_id: &str,
    file_name: &str,
    destination: &Destination,
    scale: f32,
) -> Result<PathBuf>
where
    T: RenderTargets + ?Sized,
{
    let document = targets
        .locate(element_id)
        .ok_or_else(|| Error::RenderTargetMissing(element_id.to_string()))?;

    let png = rasterize(&document, scale)?;

    let path = match destination {
        Destination::Directory(dir) => {
            fs::create_dir_all(dir)?;
            unique_path(dir, file_name)
        }
        Destination::File(path) => path.clone(),
    };
    write_png(&path, &png)?;

    tracing::info!(path = %path.display(), bytes = png.len(), "card exported");
    Ok(path)
}

fn write_png(path: &Path, png: &[u8]) -> Result<()> {
    fs::write(path, png).map_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "writing card failed");
        Error::from(err)
    })
}

#[cfg(test)]
mod tests;
