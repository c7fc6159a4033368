use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::errors::ProfileError;
use crate::profile::FrequencyTable;

/// Formats the report into any writer.
///
/// Line 1 is `Consensus: <seq>`; then one line per position, 1-indexed,
/// with the four `base:count` pairs sorted by descending count. The sort is
/// stable over the fixed A, C, G, T construction order, so tied counts keep
/// that order. Each pair is followed by a tab, including the last one.
pub fn write_report(
    table: &FrequencyTable,
    consensus: &str,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "Consensus: {consensus}")?;

    for (i, counts) in table.iter().enumerate() {
        write!(writer, "Pos {}: ", i + 1)?;
        for (nucleotide, count) in counts
            .pairs()
            .sorted_by_key(|&(_, count)| Reverse(count))
        {
            write!(writer, "{}:{}\t", nucleotide.as_char(), count)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Writes the report to `path` and echoes the consensus line to stdout.
///
/// # Errors
///
/// Returns [`ProfileError::DestinationUnwritable`] if the file cannot be
/// created or written.
pub fn save_report(
    table: &FrequencyTable,
    consensus: &str,
    path: &Path,
) -> Result<(), ProfileError> {
    println!("Consensus: {consensus}");

    let unwritable = |source| ProfileError::DestinationUnwritable {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(unwritable)?;
    let mut writer = BufWriter::new(file);

    write_report(table, consensus, &mut writer).map_err(unwritable)?;
    writer.flush().map_err(unwritable)?;

    Ok(())
}
