use plotters::style::RGBColor;

use crate::parse::ParseError;

const LINK_FREE_COLOR: RGBColor = RGBColor(0xbf, 0x00, 0xff);
const SOFT_COLOR: RGBColor = RGBColor(0xff, 0x58, 0x00);
const DEFAULT_COLOR: RGBColor = RGBColor(0x00, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Cross,
}

/// Everything the chart needs that is encoded in a result file's name.
///
/// Result files are named `<algorithm>-<...>-<p1>-<...>-<p2>.txt`, where the
/// algorithm name determines color, marker and data-structure tag, and p1/p2
/// are the two fixed benchmark parameters used for the title and the output
/// file name.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub label: String,
    pub color: RGBColor,
    pub marker: Marker,
    pub ds_tag: String,
    pub p1: String,
    pub p2: String,
}

impl FileMeta {
    pub fn title(&self, test_num: u32) -> String {
        match test_num {
            1 => format!("{}% reads, with {} keys", self.p1, self.p2),
            2 => format!("{}% reads, with {} threads", self.p1, self.p2),
            3 => format!("{} threads, with {} keys", self.p2, self.p1),
            _ => "default string".to_string(),
        }
    }
}

/// Parses a result file name (without directory) into its plot metadata.
/// All filename-convention knowledge lives here.
pub fn parse_filename_meta(filename: &str) -> Result<FileMeta, ParseError> {
    let stem = filename.split('.').next().unwrap_or(filename);
    let fields: Vec<&str> = stem.split('-').collect();
    if fields.len() < 5 {
        return Err(ParseError::InvalidInput(format!(
            "File name has fewer than 5 '-'-separated fields: {}",
            filename
        )));
    }

    let label = fields[0].to_string();
    let (color, marker) = if label.starts_with("LinkFree") {
        (LINK_FREE_COLOR, Marker::Circle)
    } else if label.starts_with("SOFT") {
        (SOFT_COLOR, Marker::Square)
    } else {
        (DEFAULT_COLOR, Marker::Cross)
    };

    // SkipList has to be checked before the plain List suffix.
    let ds_tag = if label.ends_with("SkipList") {
        "sl"
    } else if label.ends_with("List") {
        "list"
    } else if label.ends_with("Table") {
        "hash"
    } else {
        return Err(ParseError::InvalidInput(format!(
            "Unknown data structure in algorithm name: {}",
            label
        )));
    };

    Ok(FileMeta {
        label,
        color,
        marker,
        ds_tag: ds_tag.to_string(),
        p1: fields[2].to_string(),
        p2: fields[4].to_string(),
    })
}

#[test]
fn link_free_list_file() {
    let meta = parse_filename_meta("LinkFreeList-test-90-keys-1024.txt").unwrap();
    assert_eq!(meta.label, "LinkFreeList");
    assert_eq!(meta.color, LINK_FREE_COLOR);
    assert_eq!(meta.marker, Marker::Circle);
    assert_eq!(meta.ds_tag, "list");
    assert_eq!(meta.p1, "90");
    assert_eq!(meta.p2, "1024");
}

#[test]
fn soft_skip_list_file() {
    let meta = parse_filename_meta("SOFTSkipList-test-50-keys-1000000.txt").unwrap();
    assert_eq!(meta.color, SOFT_COLOR);
    assert_eq!(meta.marker, Marker::Square);
    assert_eq!(meta.ds_tag, "sl");
}

#[test]
fn unknown_algorithm_gets_defaults() {
    let meta = parse_filename_meta("HarrisTable-test-10-threads-32.txt").unwrap();
    assert_eq!(meta.color, DEFAULT_COLOR);
    assert_eq!(meta.marker, Marker::Cross);
    assert_eq!(meta.ds_tag, "hash");
}

#[test]
fn too_few_fields_fails() {
    assert!(parse_filename_meta("LinkFreeList-90.txt").is_err());
}

#[test]
fn unknown_data_structure_fails() {
    assert!(parse_filename_meta("SOFTQueue-test-90-keys-1024.txt").is_err());
}

#[test]
fn titles_follow_the_test_number() {
    let meta = parse_filename_meta("SOFTList-test-90-keys-1024.txt").unwrap();
    assert_eq!(meta.title(1), "90% reads, with 1024 keys");
    assert_eq!(meta.title(2), "90% reads, with 1024 threads");
    assert_eq!(meta.title(3), "1024 threads, with 90 keys");
}
