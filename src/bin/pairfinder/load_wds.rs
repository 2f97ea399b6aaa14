//! WDS reference catalog loader.
//!
//! The Washington Double Star catalog is a fixed-format text file whose
//! last 18 columns hold a packed precise coordinate, `HHMMSS.ss±DDMMSS.s`.
//! Lines shorter than 80 characters are structural (headers, separators)
//! and are skipped; lines whose coordinate field does not parse (placeholder
//! dots for unresolved positions) are skipped as well.

use anyhow::Context;
use starpairs::sexagesimal::{parse_dms_deg, parse_hms_deg};
use starpairs::ReferenceCoordinate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const MIN_LINE_LEN: usize = 80;
const COORD_FIELD_LEN: usize = 18;

pub struct LoadedReferences {
    pub coordinates: Vec<ReferenceCoordinate>,
    /// Long-enough lines whose coordinate field did not parse.
    pub skipped: u64,
}

pub fn load_reference_catalog(path: &Path) -> anyhow::Result<LoadedReferences> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let reader = BufReader::new(file);

    let mut coordinates = Vec::new();
    let mut skipped = 0u64;

    for line in reader.lines() {
        let line = line?;
        if line.len() < MIN_LINE_LEN {
            continue;
        }
        match parse_coordinate_field(&line) {
            Some(coord) => coordinates.push(coord),
            None => skipped += 1,
        }
    }

    Ok(LoadedReferences {
        coordinates,
        skipped,
    })
}

fn parse_coordinate_field(line: &str) -> Option<ReferenceCoordinate> {
    // Last 18 bytes; WDS is ASCII, so this is also a char boundary
    if !line.is_char_boundary(line.len() - COORD_FIELD_LEN) {
        return None;
    }
    let field = line[line.len() - COORD_FIELD_LEN..].trim();

    let split = field.rfind(['+', '-'])?;
    if split == 0 {
        return None;
    }
    let ra_deg = parse_hms_deg(&field[..split]).ok()?;
    let dec_deg = parse_dms_deg(&field[split..]).ok()?;

    Some(ReferenceCoordinate { ra_deg, dec_deg })
}
