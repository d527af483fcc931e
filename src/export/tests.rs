// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::card::{self, svg, CARD_ELEMENT_ID};
use crate::domain::Image;
use crate::gallery::Selection;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::tempdir;

fn artwork_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 10, Rgba([30, 120, 200, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}

fn snapshot(name: &str) -> TargetSnapshot {
    let selection = Selection {
        selected_image: Some(Image::new("a", "small", "regular", "")),
        display_name: name.to_string(),
    };
    let layout = card::layout(&selection).expect("layout");
    let mut targets = TargetSnapshot::default();
    targets.insert(CARD_ELEMENT_ID, svg::document(&layout, "image/png", &artwork_png()));
    targets
}

#[test]
fn file_names_follow_display_name() {
    assert_eq!(export_file_name(""), "thank-you.png");
    assert_eq!(export_file_name("Ada"), "Ada.png");
    assert_eq!(export_file_name("   "), "thank-you.png");
    assert_eq!(export_file_name("  Grace Hopper "), "Grace Hopper.png");
}

#[test]
fn path_separators_are_neutralized() {
    assert_eq!(sanitize_stem("../etc/passwd"), ".._etc_passwd");
    assert_eq!(sanitize_stem("a\\b:c"), "a_b_c");
    assert_eq!(sanitize_stem(".."), "thank-you");
    assert_eq!(sanitize_stem("tab\there"), "tab_here");
}

#[test]
fn existing_files_are_not_overwritten() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("Ada.png"), b"old").expect("seed");
    std::fs::write(dir.path().join("Ada (1).png"), b"old").expect("seed");

    assert_eq!(unique_path(dir.path(), "Ada.png"), dir.path().join("Ada (2).png"));
    assert_eq!(unique_path(dir.path(), "Bob.png"), dir.path().join("Bob.png"));
}

#[test]
fn export_writes_png_at_double_scale() {
    let dir = tempdir().expect("temp dir");
    let destination = Destination::Directory(dir.path().to_path_buf());

    let path = export_card(&snapshot("Ada"), CARD_ELEMENT_ID, "Ada.png", &destination, 2.0)
        .expect("export");

    assert_eq!(path, dir.path().join("Ada.png"));
    let written = image_rs::open(&path).expect("decode exported card");
    assert_eq!((written.width(), written.height()), (1000, 1250));
}

#[test]
fn second_export_gets_numbered_name() {
    let dir = tempdir().expect("temp dir");
    let destination = Destination::Directory(dir.path().to_path_buf());
    let targets = snapshot("");

    let first = export_card(&targets, CARD_ELEMENT_ID, "thank-you.png", &destination, 1.0)
        .expect("first export");
    let second = export_card(&targets, CARD_ELEMENT_ID, "thank-you.png", &destination, 1.0)
        .expect("second export");

    assert_eq!(first, dir.path().join("thank-you.png"));
    assert_eq!(second, dir.path().join("thank-you (1).png"));
}

#[test]
fn explicit_file_destination_is_used_verbatim() {
    let dir = tempdir().expect("temp dir");
    let target = dir.path().join("picked.png");
    std::fs::write(&target, b"old").expect("seed");

    let path = export_card(
        &snapshot("Ada"),
        CARD_ELEMENT_ID,
        "ignored.png",
        &Destination::File(target.clone()),
        1.0,
    )
    .expect("export");

    assert_eq!(path, target);
    assert!(std::fs::read(&target).expect("read").starts_with(b"\x89PNG"));
}

#[test]
fn missing_target_is_reported() {
    let dir = tempdir().expect("temp dir");
    let err = export_card(
        &TargetSnapshot::default(),
        CARD_ELEMENT_ID,
        "Ada.png",
        &Destination::Directory(dir.path().to_path_buf()),
        2.0,
    )
    .unwrap_err();

    assert_eq!(err, Error::RenderTargetMissing(CARD_ELEMENT_ID.to_string()));
    assert!(!dir.path().join("Ada.png").exists());
}

#[test]
fn scale_is_clamped() {
    let targets = snapshot("Ada");
    let document = targets.locate(CARD_ELEMENT_ID).expect("target");

    let png = rasterize(&document, 0.0).expect("rasterize");
    let decoded = image_rs::load_from_memory(&png).expect("decode");
    assert_eq!((decoded.width(), decoded.height()), (500, 625));
}

#[test]
fn data_uri_wraps_png_bytes() {
    let uri = png_data_uri(b"\x89PNG");
    assert_eq!(uri, "data:image/png;base64,iVBORw==");
}

#[test]
fn broken_document_is_an_export_error() {
    let document = crate::card::CardDocument {
        svg: "<svg".to_string(),
        width: 10.0,
        height: 10.0,
    };
    assert!(matches!(rasterize(&document, 1.0), Err(Error::Export(_))));
}
