use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ProfileError;

/// Reads sequence lines from a plain-text alignment file.
///
/// Lines starting with `>` are headers and are discarded entirely; every
/// other line is kept, stripped of surrounding whitespace, in file order.
/// No alphabet or length validation happens here — that is the tabulator's
/// job, which can report the offending sequence and column.
///
/// # Errors
///
/// Returns [`ProfileError::SourceUnavailable`] if the file cannot be opened
/// or a line cannot be read.
pub fn load(path: &Path) -> Result<Vec<String>, ProfileError> {
    let unavailable = |source| ProfileError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let reader = BufReader::new(file);

    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(unavailable)?;
        if line.starts_with('>') {
            continue;
        }
        sequences.push(line.trim().to_string());
    }

    Ok(sequences)
}
