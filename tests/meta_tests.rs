use std::fs;

use image::RgbaImage;
use picture_viewer::meta::read_meta;
use tempfile::tempdir;

#[test]
fn reads_png_dimensions_from_header() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("wide.png");
    RgbaImage::new(6, 4).save(&path).unwrap();

    let meta = read_meta(&path, true).unwrap();
    assert_eq!((meta.raw_w, meta.raw_h), (6, 4));
    assert_eq!((meta.display_w, meta.display_h), (6, 4));
    assert_eq!(meta.exif_orientation, 1);
    assert_eq!(meta.to_string(), "6x4 (normal)");
}

#[test]
fn garbage_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("broken.jpg");
    fs::write(&path, b"not a picture").unwrap();
    assert!(read_meta(&path, false).is_err());
}
