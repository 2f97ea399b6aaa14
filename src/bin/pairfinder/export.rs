//! Annotated CSV export.
//!
//! Writes the original raw rows back out with one annotation column
//! appended: `group_id` for the clustering result (matched rows only, in
//! group order) or `wds_match` for the cross-match (every row). Extra
//! input columns pass through byte-for-byte. Output is written to a
//! temporary file and renamed into place.

use starpairs::{Cluster, CrossMatch};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes cluster members with their 1-based group number.
///
/// Returns the number of data rows written.
pub fn export_groups(
    path: &Path,
    header: &[String],
    rows: &[Vec<String>],
    clusters: &[Cluster],
) -> anyhow::Result<u64> {
    write_annotated(path, header, "group_id", |writer| {
        let mut written = 0u64;
        for cluster in clusters {
            for &index in &cluster.members {
                writeln!(writer, "{},{}", rows[index].join(","), cluster.group_id)?;
                written += 1;
            }
        }
        Ok(written)
    })
}

/// Writes every row with its cross-match flag.
pub fn export_cross_match(
    path: &Path,
    header: &[String],
    rows: &[Vec<String>],
    matches: &[CrossMatch],
) -> anyhow::Result<u64> {
    write_annotated(path, header, "wds_match", |writer| {
        for (row, result) in rows.iter().zip(matches) {
            writeln!(writer, "{},{}", row.join(","), result.matched)?;
        }
        Ok(rows.len() as u64)
    })
}

fn write_annotated<F>(
    path: &Path,
    header: &[String],
    annotation: &str,
    write_rows: F,
) -> anyhow::Result<u64>
where
    F: FnOnce(&mut BufWriter<File>) -> anyhow::Result<u64>,
{
    let temp_path = path.with_extension("csv.tmp");
    let file = File::create(&temp_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{},{}", header.join(","), annotation)?;
    let written = write_rows(&mut writer)?;
    writer.flush()?;
    drop(writer);

    fs::rename(&temp_path, path)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn header() -> Vec<String> {
        vec!["source_id".into(), "ra".into(), "extra".into()]
    }

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["a".into(), "10.0".into(), "x".into()],
            vec!["b".into(), "10.01".into(), "y".into()],
            vec!["c".into(), "50.0".into(), "z".into()],
        ]
    }

    #[test]
    fn test_export_groups_writes_members_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");
        let clusters = vec![Cluster {
            group_id: 1,
            members: vec![0, 1],
        }];

        let written = export_groups(&path, &header(), &rows(), &clusters).unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "source_id,ra,extra,group_id");
        assert_eq!(lines[1], "a,10.0,x,1");
        assert_eq!(lines[2], "b,10.01,y,1");
        assert_eq!(lines.len(), 3, "row without a group must not be written");
    }

    #[test]
    fn test_export_cross_match_writes_all_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matched.csv");
        let matches = vec![
            CrossMatch {
                matched: true,
                separation_arcsec: 0.4,
                nearest: 0,
            },
            CrossMatch {
                matched: false,
                separation_arcsec: 9.0,
                nearest: 0,
            },
            CrossMatch {
                matched: false,
                separation_arcsec: 30.0,
                nearest: 1,
            },
        ];

        let written = export_cross_match(&path, &header(), &rows(), &matches).unwrap();
        assert_eq!(written, 3);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "source_id,ra,extra,wds_match");
        assert_eq!(lines[1], "a,10.0,x,true");
        assert_eq!(lines[2], "b,10.01,y,false");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");
        export_groups(&path, &header(), &rows(), &[]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("groups.csv")]);
    }
}
