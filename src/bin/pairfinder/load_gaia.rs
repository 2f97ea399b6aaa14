//! Gaia CSV catalog loader.
//!
//! Reads a comma-separated Gaia archive export (plain or gzipped) into a
//! [`Catalog`], keeping the raw rows untouched so extra columns can be
//! round-tripped to the annotated output without ever being inspected.
//!
//! The `ra`, `dec`, `parallax`, and `ruwe` columns must be present;
//! `source_id` is optional and kept as an opaque string. Rows whose
//! `ra`/`dec`/`ruwe` values fail to parse are skipped and counted. A
//! missing or unparseable `parallax` value keeps the row, with an
//! undefined distance.

use anyhow::Context;
use flate2::read::GzDecoder;
use starpairs::{Catalog, CatalogRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Raw header fields, in file order.
    pub header: Vec<String>,
    /// Raw data fields per kept row, aligned with catalog indices.
    pub rows: Vec<Vec<String>>,
    /// Rows dropped because ra, dec, or ruwe would not parse.
    pub skipped: u64,
}

struct ColumnIndices {
    source_id: Option<usize>,
    ra: usize,
    dec: usize,
    parallax: usize,
    ruwe: usize,
}

pub fn load_catalog(path: &Path) -> anyhow::Result<LoadedCatalog> {
    let reader = open_reader(path)?;
    read_catalog(reader).with_context(|| format!("Failed to load catalog from {:?}", path))
}

fn open_reader(path: &Path) -> anyhow::Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    if path.extension().is_some_and(|e| e == "gz") {
        let decoder = GzDecoder::new(BufReader::new(file));
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_catalog<R: BufRead>(mut reader: R) -> anyhow::Result<LoadedCatalog> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("Empty input file");
    }
    let header: Vec<String> = line.trim_end().split(',').map(str::to_string).collect();
    let indices = build_column_indices(&header)?;

    let mut records = Vec::new();
    let mut rows = Vec::new();
    let mut skipped = 0u64;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.trim_end().split(',').map(str::to_string).collect();
        match parse_record(&fields, &indices) {
            Some(record) => {
                records.push(record);
                rows.push(fields);
            }
            None => skipped += 1,
        }
    }

    Ok(LoadedCatalog {
        catalog: Catalog::from_records(records),
        header,
        rows,
        skipped,
    })
}

fn build_column_indices(header: &[String]) -> anyhow::Result<ColumnIndices> {
    let col_map: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(idx, col)| (col.as_str(), idx))
        .collect();
    Ok(ColumnIndices {
        source_id: col_map.get("source_id").copied(),
        ra: require_column(&col_map, "ra")?,
        dec: require_column(&col_map, "dec")?,
        parallax: require_column(&col_map, "parallax")?,
        ruwe: require_column(&col_map, "ruwe")?,
    })
}

fn require_column(col_map: &HashMap<&str, usize>, name: &str) -> anyhow::Result<usize> {
    col_map
        .get(name)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Missing column: {}", name))
}

fn parse_record(fields: &[String], indices: &ColumnIndices) -> Option<CatalogRecord> {
    let ra = parse_f64(fields.get(indices.ra))?;
    let dec = parse_f64(fields.get(indices.dec))?;
    let ruwe = parse_f64(fields.get(indices.ruwe))?;
    let parallax = parse_f64(fields.get(indices.parallax)).filter(|p| p.is_finite());
    let source_id = indices
        .source_id
        .and_then(|idx| fields.get(idx))
        .filter(|s| !s.is_empty())
        .cloned();
    Some(CatalogRecord::new(source_id, ra, dec, parallax, ruwe))
}

fn parse_f64(field: Option<&String>) -> Option<f64> {
    field.and_then(|v| {
        if v.is_empty() {
            None
        } else {
            v.parse().ok()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_basic_catalog() {
        let file = write_csv(
            "source_id,ra,dec,parallax,ruwe\n\
             12345,10.5,20.25,8.0,1.3\n\
             ,11.0,21.0,4.0,1.1\n",
        );
        let loaded = load_catalog(file.path()).unwrap();

        assert_eq!(loaded.catalog.len(), 2);
        assert_eq!(loaded.skipped, 0);
        let first = loaded.catalog.get(0).unwrap();
        assert_eq!(first.source_id.as_deref(), Some("12345"));
        assert_eq!(first.ra_deg, 10.5);
        assert_eq!(first.distance_pc(), 125.0);
        assert!(loaded.catalog.get(1).unwrap().source_id.is_none());
    }

    #[test]
    fn test_missing_parallax_value_keeps_row() {
        let file = write_csv(
            "ra,dec,parallax,ruwe\n\
             10.0,20.0,,1.0\n",
        );
        let loaded = load_catalog(file.path()).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert!(!loaded.catalog.get(0).unwrap().has_distance());
    }

    #[test]
    fn test_bad_ra_skips_row() {
        let file = write_csv(
            "ra,dec,parallax,ruwe\n\
             not_a_number,20.0,5.0,1.0\n\
             10.0,20.0,5.0,1.0\n",
        );
        let loaded = load_catalog(file.path()).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.skipped, 1);
    }

    #[test]
    fn test_missing_parallax_column_is_an_error() {
        let file = write_csv("ra,dec,ruwe\n10.0,20.0,1.0\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parallax"));
    }

    #[test]
    fn test_extra_columns_round_trip_in_raw_rows() {
        let file = write_csv(
            "source_id,ra,dec,parallax,ruwe,phot_g_mean_mag\n\
             7,10.0,20.0,5.0,1.0,12.34\n",
        );
        let loaded = load_catalog(file.path()).unwrap();

        assert_eq!(loaded.header.last().unwrap(), "phot_g_mean_mag");
        assert_eq!(loaded.rows[0].last().unwrap(), "12.34");
    }

    #[test]
    fn test_gzipped_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut file = tempfile::Builder::new().suffix(".csv.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(b"ra,dec,parallax,ruwe\n10.0,20.0,5.0,1.0\n")
            .unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();
        file.flush().unwrap();

        let loaded = load_catalog(file.path()).unwrap();
        assert_eq!(loaded.catalog.len(), 1);
    }
}
