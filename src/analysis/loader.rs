use std::path::{Path, PathBuf};
use log::debug;
use crate::analysis::error::AnalysisError;
/// Column names produced by the oscilloscope CSV export.
pub const TIME_COLUMN: &str = "second";
pub const VOLTAGE_COLUMN: &str = "Volt";
/// One recorded trace: elapsed time in seconds plus the sampled voltage.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    pub path: PathBuf,
    pub time: Vec<f64>,
    pub voltage: Vec<f64>,
}
impl TimeSeries {
    pub fn len(&self) -> usize {
        self.voltage.len()
    }
    pub fn is_empty(&self) -> bool {
        self.voltage.is_empty()
    }
    pub fn duration_seconds(&self) -> f64 {
        match (self.time.first(), self.time.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}
/// Reads a two-column time/voltage table. Rows keep source order; extra
/// columns are ignored.
pub fn load_trace(path: &Path) -> Result<TimeSeries, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| open_error(path, err))?;
    let headers = reader.headers().map_err(|err| AnalysisError::DataFormat {
        path: path.to_path_buf(),
        reason: format!("cannot read header row: {err}"),
    })?;
    let time_idx = column_index(path, headers, TIME_COLUMN)?;
    let volt_idx = column_index(path, headers, VOLTAGE_COLUMN)?;
    let mut time = Vec::new();
    let mut voltage = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| AnalysisError::DataFormat {
            path: path.to_path_buf(),
            reason: format!("row {}: {err}", row + 2),
        })?;
        time.push(parse_cell(path, &record, time_idx, row, TIME_COLUMN)?);
        voltage.push(parse_cell(path, &record, volt_idx, row, VOLTAGE_COLUMN)?);
    }
    debug!("loaded {} samples from {}", voltage.len(), path.display());
    Ok(TimeSeries {
        path: path.to_path_buf(),
        time,
        voltage,
    })
}
fn open_error(path: &Path, err: csv::Error) -> AnalysisError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => AnalysisError::SourceUnavailable {
            path: path.to_path_buf(),
            source: io,
        },
        other => AnalysisError::DataFormat {
            path: path.to_path_buf(),
            reason: format!("{other:?}"),
        },
    }
}
fn column_index(
    path: &Path,
    headers: &csv::StringRecord,
    name: &str,
) -> Result<usize, AnalysisError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| AnalysisError::DataFormat {
            path: path.to_path_buf(),
            reason: format!("missing required column {name:?}"),
        })
}
fn parse_cell(
    path: &Path,
    record: &csv::StringRecord,
    index: usize,
    row: usize,
    column: &str,
) -> Result<f64, AnalysisError> {
    let cell = record.get(index).ok_or_else(|| AnalysisError::DataFormat {
        path: path.to_path_buf(),
        reason: format!("row {}: missing {column} value", row + 2),
    })?;
    cell.parse::<f64>().map_err(|_| AnalysisError::DataFormat {
        path: path.to_path_buf(),
        reason: format!("row {}: cannot parse {column} value {cell:?}", row + 2),
    })
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
    #[test]
    fn loads_time_and_voltage_columns() {
        let path = fixture(
            "scopespec_loader_ok.csv",
            "second,Volt\n0.0,1.0\n0.001,-1.0\n0.002,0.5\n",
        );
        let trace = load_trace(&path).unwrap();
        assert_eq!(trace.time, vec![0.0, 0.001, 0.002]);
        assert_eq!(trace.voltage, vec![1.0, -1.0, 0.5]);
        assert_eq!(trace.len(), 3);
        fs::remove_file(&path).ok();
    }
    #[test]
    fn extra_columns_are_ignored() {
        let path = fixture(
            "scopespec_loader_extra.csv",
            "index,second,Volt\n0,0.0,0.25\n1,0.001,0.5\n",
        );
        let trace = load_trace(&path).unwrap();
        assert_eq!(trace.voltage, vec![0.25, 0.5]);
        fs::remove_file(&path).ok();
    }
    #[test]
    fn missing_voltage_column_is_a_format_error() {
        let path = fixture(
            "scopespec_loader_no_volt.csv",
            "second,Current\n0.0,1.0\n0.001,2.0\n",
        );
        let err = load_trace(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::DataFormat { .. }));
        fs::remove_file(&path).ok();
    }
    #[test]
    fn unparsable_cell_is_a_format_error() {
        let path = fixture(
            "scopespec_loader_bad_cell.csv",
            "second,Volt\n0.0,1.0\n0.001,oops\n",
        );
        let err = load_trace(&path).unwrap_err();
        match err {
            AnalysisError::DataFormat { reason, .. } => assert!(reason.contains("row 3")),
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_file(&path).ok();
    }
    #[test]
    fn missing_file_is_unavailable() {
        let err = load_trace(Path::new("no_such_dir/missing.csv")).unwrap_err();
        assert!(matches!(err, AnalysisError::SourceUnavailable { .. }));
    }
}
