// SPDX-License-Identifier: MPL-2.0
//! SVG rendition of a [`CardLayout`], used as the export render target.

use super::layout::{CardLayout, TextBlock};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use quick_xml::escape::escape;
use std::fmt::Write as _;

const FONT_FAMILY: &str =
    "Inter, 'DejaVu Sans', 'Liberation Sans', Arial, Helvetica, sans-serif";
const GRADIENT_STOPS: [(&str, &str); 3] =
    [("0", "#0f172a"), ("0.5", "#1e293b"), ("1", "#0f172a")];
const TEXT_FILL: &str = "#ffffff";

/// A self-contained SVG card, ready to be rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDocument {
    pub svg: String,
    pub width: f32,
    pub height: f32,
}

/// Builds the SVG document for `layout`.
///
/// `artwork` must be PNG or JPEG bytes described by `mime`; they are inlined
/// as a data URI so the document needs no network or filesystem access.
#[must_use]
pub fn document(layout: &CardLayout, mime: &str, artwork: &[u8]) -> CardDocument {
    let mut svg = String::with_capacity(artwork.len() * 4 / 3 + 2048);
    let frame = layout.image_frame;

    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height,
    );

    svg.push_str(r#"<defs><linearGradient id="card-background" x1="0" y1="0" x2="1" y2="1">"#);
    for (offset, color) in GRADIENT_STOPS {
        let _ = write!(svg, r#"<stop offset="{offset}" stop-color="{color}"/>"#);
    }
    svg.push_str("</linearGradient>");
    let _ = write!(
        svg,
        r#"<clipPath id="artwork-clip"><rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}"/></clipPath></defs>"#,
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        r = layout.image_radius,
    );

    let _ = write!(
        svg,
        r#"<rect width="{}" height="{}" rx="{r}" ry="{r}" fill="url(#card-background)"/>"#,
        layout.width,
        layout.height,
        r = layout.corner_radius,
    );

    let _ = write!(
        svg,
        r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" clip-path="url(#artwork-clip)" xlink:href="data:{};base64,{}"/>"#,
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        mime,
        STANDARD.encode(artwork),
    );

    push_text(&mut svg, &layout.headline);
    push_text(&mut svg, &layout.name);
    svg.push_str("</svg>");

    CardDocument {
        svg,
        width: layout.width,
        height: layout.height,
    }
}

fn push_text(svg: &mut String, block: &TextBlock) {
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
        block.center_x,
        block.baseline_y,
        FONT_FAMILY,
        block.font_size,
        block.weight,
        TEXT_FILL,
        escape(block.text.as_str()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::layout;
    use crate::domain::Image;
    use crate::gallery::Selection;

    fn card(name: &str) -> CardLayout {
        layout(&Selection {
            selected_image: Some(Image::new("a", "small", "regular", "")),
            display_name: name.to_string(),
        })
        .expect("layout")
    }

    #[test]
    fn document_contains_headline_and_name() {
        let doc = document(&card("Ada"), "image/png", b"png");
        assert!(doc.svg.contains(">Thank You!</text>"));
        assert!(doc.svg.contains(">Ada</text>"));
        assert_eq!((doc.width, doc.height), (500.0, 625.0));
    }

    #[test]
    fn names_are_xml_escaped() {
        let doc = document(&card("<Tom & Jerry>"), "image/png", b"png");
        assert!(doc.svg.contains("&lt;Tom &amp; Jerry&gt;"));
        assert!(!doc.svg.contains("<Tom"));
    }

    #[test]
    fn artwork_is_inlined_as_data_uri() {
        let doc = document(&card("Ada"), "image/jpeg", &[1, 2, 3]);
        assert!(doc.svg.contains("data:image/jpeg;base64,AQID"));
        assert!(doc.svg.contains("xMidYMid slice"));
    }
}
