// SPDX-License-Identifier: MPL-2.0
//! Full-resolution artwork for the composer.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::ImageFormat;
use std::borrow::Cow;
use std::io::Cursor;

/// The photograph currently shown in the composer.
///
/// Keeps both a display handle for iced and the PNG/JPEG bytes inlined into
/// the exported card.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub url: String,
    mime: &'static str,
    data: Vec<u8>,
    handle: Handle,
}

impl Artwork {
    /// Prepares downloaded bytes, transcoding formats resvg cannot embed.
    pub fn from_download(url: String, bytes: Vec<u8>) -> Result<Self> {
        let (mime, data) = match embeddable(&bytes)? {
            (mime, Cow::Borrowed(_)) => (mime, None),
            (mime, Cow::Owned(data)) => (mime, Some(data)),
        };
        let handle = Handle::from_bytes(bytes.clone());
        Ok(Self {
            url,
            mime,
            data: data.unwrap_or(bytes),
            handle,
        })
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Mime type of [`Artwork::data`] (`image/png` or `image/jpeg`).
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Returns the mime type and bytes to inline into a card document.
///
/// PNG and JPEG pass through untouched; other formats are transcoded to PNG.
pub fn embeddable(bytes: &[u8]) -> Result<(&'static str, Cow<'_, [u8]>)> {
    let format = image_rs::guess_format(bytes)
        .map_err(|err| Error::Export(format!("unrecognized artwork format: {err}")))?;

    match format {
        ImageFormat::Png => Ok(("image/png", Cow::Borrowed(bytes))),
        ImageFormat::Jpeg => Ok(("image/jpeg", Cow::Borrowed(bytes))),
        other => {
            tracing::debug!(format = ?other, "transcoding artwork to PNG");
            let decoded = image_rs::load_from_memory_with_format(bytes, other)
                .map_err(|err| Error::Export(err.to_string()))?;
            let mut png = Cursor::new(Vec::new());
            decoded
                .write_to(&mut png, ImageFormat::Png)
                .map_err(|err| Error::Export(err.to_string()))?;
            Ok(("image/png", Cow::Owned(png.into_inner())))
        }
    }
}
