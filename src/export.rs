//! CSV export of extracted game records.
//!
//! Files are UTF-8 with a byte-order mark so spreadsheet software picks
//! the right encoding for the Japanese team and player names.
//!
//! The header is always the full fixed column set in [`GameRecord`] field
//! order, even when no record carries a given field. Absent fields are
//! written as empty cells, so files from different weeks line up column
//! for column.

use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::export::{HEADERS, UTF8_BOM};
use crate::data_fetcher::api::{build_export_file_name, format_run_stamp};
use crate::data_fetcher::models::GameRecord;
use crate::error::AppError;

const SEPARATOR: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes one CSV row, quoting cells that contain the separator, quotes or line breaks.
pub fn write_row<W: Write>(w: &mut W, row: &[&str]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEPARATOR}")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Writes the header row followed by one row per record.
pub fn write_records<W: Write>(w: &mut W, records: &[GameRecord]) -> io::Result<()> {
    write_row(w, &HEADERS)?;
    for record in records {
        write_row(w, &record.csv_fields())?;
    }
    Ok(())
}

/// Renders records as CSV text (without the byte-order mark).
pub fn records_to_csv_string(records: &[GameRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_records(&mut buf, records);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Path of the export file for a run date: `<output_dir>/npb_results_<YYYYMMDD>.csv`.
pub fn export_path(output_dir: &Path, run_date: NaiveDate) -> PathBuf {
    output_dir.join(build_export_file_name(&format_run_stamp(run_date)))
}

/// Writes the records to the run date's export file, creating the output
/// directory when needed. An existing file for the same date is replaced.
pub fn export_to_csv(
    records: &[GameRecord],
    output_dir: &Path,
    run_date: NaiveDate,
) -> Result<PathBuf, AppError> {
    let path = export_path(output_dir, run_date);

    if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        debug!("Creating output directory {}", output_dir.display());
        fs::create_dir_all(output_dir).map_err(|e| AppError::export_error(output_dir, e))?;
    }

    let write_file = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(UTF8_BOM.as_bytes())?;
        write_records(&mut writer, records)?;
        writer.flush()
    };
    write_file().map_err(|e| AppError::export_error(&path, e))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sentinel;
    use tempfile::tempdir;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn records() -> Vec<GameRecord> {
        vec![
            GameRecord {
                date: Some("3/10（月）".to_string()),
                home_team: "巨人".to_string(),
                away_team: Some("阪神".to_string()),
                score: Some("3-2".to_string()),
                winning_pitcher: Some("戸郷".to_string()),
                losing_pitcher: Some("才木".to_string()),
                stadium: Some("東京ドーム".to_string()),
            },
            GameRecord {
                date: Some("3/10（月）".to_string()),
                home_team: sentinel::NO_GAME.to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_write_row_quotes_special_cells() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "say \"hi\"", "two\nlines"]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_records_to_csv_string_layout() {
        let csv = records_to_csv_string(&records());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "date,home_team,away_team,score,winning_pitcher,losing_pitcher,stadium"
        );
        assert_eq!(lines[1], "3/10（月）,巨人,阪神,3-2,戸郷,才木,東京ドーム");
        assert_eq!(lines[2], "3/10（月）,no game,,,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_path_pattern() {
        let path = export_path(Path::new("out"), run_date());
        assert_eq!(path, Path::new("out").join("npb_results_20250310.csv"));
    }

    #[test]
    fn test_export_creates_directory_and_writes_bom() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("nested").join("npb_results");

        let path = export_to_csv(&records(), &output_dir, run_date()).unwrap();

        assert!(output_dir.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, records_to_csv_string(&records()));
    }

    #[test]
    fn test_export_empty_records_writes_header_only() {
        let temp_dir = tempdir().unwrap();
        let path = export_to_csv(&[], temp_dir.path(), run_date()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.trim_start_matches('\u{feff}'),
            "date,home_team,away_team,score,winning_pitcher,losing_pitcher,stadium\n"
        );
    }

    #[test]
    fn test_export_failure_reports_path() {
        let temp_dir = tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = export_to_csv(&records(), &blocker, run_date()).unwrap_err();
        assert!(matches!(err, AppError::Export { .. }));
    }
}
