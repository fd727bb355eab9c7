use std::fmt;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub path: PathBuf,
    pub raw_w: u32,
    pub raw_h: u32,
    pub display_w: u32,
    pub display_h: u32,
    pub exif_orientation: u16,
}

/// Header-only read of the picture dimensions; optionally reads EXIF.
pub fn read_meta(path: &Path, read_exif: bool) -> Result<ImageMeta, Error> {
    let (raw_w, raw_h) = image::image_dimensions(path)?;
    let o = if read_exif {
        read_exif_orientation(path).unwrap_or(1)
    } else {
        1
    };
    let swap = matches!(o, 5..=8);
    let (display_w, display_h) = if swap { (raw_h, raw_w) } else { (raw_w, raw_h) };
    Ok(ImageMeta {
        path: path.to_path_buf(),
        raw_w,
        raw_h,
        display_w,
        display_h,
        exif_orientation: o,
    })
}

impl fmt::Display for ImageMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({})",
            self.display_w,
            self.display_h,
            orientation_label(self.exif_orientation)
        )
    }
}

fn read_exif_orientation(path: &Path) -> Option<u16> {
    use exif::{In, Tag, Value};

    let f = fs::File::open(path).ok()?;
    let mut buf = BufReader::new(f);
    let reader = exif::Reader::new().read_from_container(&mut buf).ok()?;
    let field = reader.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(arr) if !arr.is_empty() => Some(arr[0]),
        Value::Long(arr) if !arr.is_empty() => u16::try_from(arr[0]).ok(),
        _ => Some(1),
    }
}

#[inline]
fn orientation_label(v: u16) -> &'static str {
    match v {
        1 => "normal",
        2 => "mirrored horizontal",
        3 => "rotated 180°",
        4 => "mirrored vertical",
        5 => "mirrored horizontal, rotated 270°",
        6 => "rotated 90° cw",
        7 => "mirrored horizontal, rotated 90°",
        8 => "rotated 270° cw",
        _ => "unknown orientation",
    }
}
