use std::fs::File;
use std::path::Path;

use log::warn;

use crate::Error;

/// Reads every row of a headerless-or-headed CSV file into `T`, by column
/// position. Rows that fail to deserialize are skipped with a warning.
pub fn deserialize_csv_file<T>(path: &Path, has_header: bool) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let rows = reader
        .deserialize()
        .skip(usize::from(has_header))
        .enumerate()
        .filter_map(|(line, row)| match row {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(
                    "Skipping malformed row {} of '{}': {}",
                    line + 1 + usize::from(has_header),
                    path.display(),
                    e
                );
                None
            }
        })
        .collect::<Vec<T>>();

    Ok(rows)
}

/// Parses an optional numeric column; an empty field is `None`.
pub(super) fn parse_optional_f64(value: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse::<f64>().map(Some)
    }
}

pub(super) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
