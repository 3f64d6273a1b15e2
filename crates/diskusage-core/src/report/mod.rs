/// Report writer — ranked per-folder CSV.
///
/// Each row carries the folder name, its size in gibibytes and its share of
/// the summed size of all folders, both rounded to two decimals. Rows are
/// ranked by raw byte size descending and terminated with CRLF. When the
/// folders sum to zero bytes the share column holds a plain `0`.
///
/// The destination is replaced atomically: rows go to a temporary file in
/// the same directory, which is renamed over the destination only after the
/// last row is flushed. On failure the destination is left as it was.
use crate::error::ReportError;
use crate::model::size::{bytes_to_gib, percent_of};
use crate::model::ScanResult;

use serde::{Serialize, Serializer};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Fixed header row, written even when there are no folders.
pub const HEADER: [&str; 3] = [
    "Folder Name",
    "Size (GB)",
    "Percentage of Total Disk Usage (%)",
];

/// One data row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Folder Name")]
    pub name: String,
    #[serde(rename = "Size (GB)")]
    pub size_gib: f64,
    /// `None` when all folders sum to zero bytes.
    #[serde(
        rename = "Percentage of Total Disk Usage (%)",
        serialize_with = "serialize_percent"
    )]
    pub percent: Option<f64>,
    /// Raw size, used for ranking only.
    #[serde(skip)]
    pub size_bytes: u64,
}

impl ReportRow {
    /// Share of the total as a number, `0.0` when there is no total.
    pub fn percent_value(&self) -> f64 {
        self.percent.unwrap_or(0.0)
    }
}

fn serialize_percent<S: Serializer>(
    percent: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match percent {
        Some(p) => serializer.serialize_f64(*p),
        None => serializer.serialize_u8(0),
    }
}

/// Build the ranked rows for `sizes`.
///
/// When the total is zero every percentage is `None`.
pub fn build_rows(sizes: &ScanResult) -> Vec<ReportRow> {
    let total = sizes.total_bytes();
    sizes
        .ranked()
        .into_iter()
        .map(|entry| ReportRow {
            size_gib: bytes_to_gib(entry.size_bytes),
            percent: (total > 0).then(|| percent_of(entry.size_bytes, total)),
            size_bytes: entry.size_bytes,
            name: entry.display_name().into_owned(),
        })
        .collect()
}

/// Write the header and `rows` as CSV to any writer.
pub fn write_rows<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(ReportError::Flush)?;
    Ok(())
}

/// Rank `sizes` and write the report to `destination`, replacing any
/// existing file.
pub fn write_report(sizes: &ScanResult, destination: &Path) -> Result<(), ReportError> {
    let rows = build_rows(sizes);

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| ReportError::Create {
        path: destination.to_path_buf(),
        source,
    })?;

    write_rows(&rows, tmp.as_file_mut())?;
    tmp.as_file().sync_all().map_err(ReportError::Flush)?;
    set_report_permissions(&tmp)?;

    tmp.persist(destination).map_err(|err| ReportError::Persist {
        path: destination.to_path_buf(),
        source: err.error,
    })?;

    debug!("Wrote {} rows to {}", rows.len(), destination.display());
    Ok(())
}

/// Temporary files are created owner-only; give the finished report the
/// usual world-readable mode.
#[cfg(unix)]
fn set_report_permissions(tmp: &NamedTempFile) -> Result<(), ReportError> {
    use std::os::unix::fs::PermissionsExt;
    tmp.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
        .map_err(ReportError::Flush)
}

#[cfg(not(unix))]
fn set_report_permissions(_tmp: &NamedTempFile) -> Result<(), ReportError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::size::GIB;

    fn render(sizes: &ScanResult) -> String {
        let mut out = Vec::new();
        write_rows(&build_rows(sizes), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_and_two_gib_scenario() {
        let sizes: ScanResult = [("A", GIB), ("B", 2 * GIB), ("C", 0)].into_iter().collect();
        assert_eq!(
            render(&sizes),
            "Folder Name,Size (GB),Percentage of Total Disk Usage (%)\r\n\
             B,2.0,66.67\r\n\
             A,1.0,33.33\r\n\
             C,0.0,0.0\r\n"
        );
    }

    #[test]
    fn empty_mapping_writes_header_only() {
        assert_eq!(
            render(&ScanResult::new()),
            "Folder Name,Size (GB),Percentage of Total Disk Usage (%)\r\n"
        );
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let sizes: ScanResult = [("x", 0), ("y", 0)].into_iter().collect();
        let rows = build_rows(&sizes);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.percent.is_none() && r.size_gib == 0.0));
        assert!(rows.iter().all(|r| r.percent_value() == 0.0));
        assert_eq!(
            render(&sizes),
            "Folder Name,Size (GB),Percentage of Total Disk Usage (%)\r\n\
             x,0.0,0\r\n\
             y,0.0,0\r\n"
        );
    }

    #[test]
    fn rows_are_size_descending() {
        let sizes: ScanResult = [("s", 1), ("l", 1_000), ("m", 500), ("t", 0)]
            .into_iter()
            .collect();
        let rows = build_rows(&sizes);
        assert!(rows.windows(2).all(|w| w[0].size_bytes >= w[1].size_bytes));
        assert_eq!(rows[0].name, "l");
    }

    #[test]
    fn percentages_sum_to_about_one_hundred() {
        let sizes: ScanResult = [("a", 7), ("b", 13), ("c", 29), ("d", 51), ("e", 3)]
            .into_iter()
            .collect();
        let sum: f64 = build_rows(&sizes).iter().map(ReportRow::percent_value).sum();
        assert!((sum - 100.0).abs() < 0.05, "sum was {sum}");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_render_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut sizes = ScanResult::new();
        sizes.insert(OsStr::from_bytes(b"\xff"), GIB);
        sizes.insert(OsStr::from_bytes(b"\xfe"), GIB);
        let rows = build_rows(&sizes);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.name == "\u{FFFD}" && r.percent == Some(50.0)));
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let sizes: ScanResult = [("Program Files, Old", GIB)].into_iter().collect();
        let out = render(&sizes);
        assert!(out.contains("\"Program Files, Old\",1.0,100.0\r\n"), "{out}");
    }
}
