use crate::errors::ProfileError;
use crate::nucleotide::{Nucleotide, NUCLEOTIDE_ORDER};

/// Per-column base counts, stored as a fixed record indexed by
/// [`Nucleotide`] rather than a dynamic map.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionCounts([u32; 4]);

impl PositionCounts {
    pub fn count(&self, n: Nucleotide) -> u32 {
        self.0[n as usize]
    }

    pub fn increment(&mut self, n: Nucleotide) {
        self.0[n as usize] += 1;
    }

    /// The four (base, count) pairs in fixed A, C, G, T order. The consensus
    /// tie-break and the report's stable sort both rely on this order.
    pub fn pairs(&self) -> impl Iterator<Item = (Nucleotide, u32)> + '_ {
        NUCLEOTIDE_ORDER.iter().map(|&n| (n, self.count(n)))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// A position-indexed table of nucleotide counts over an alignment.
///
/// For an alignment of equal-length sequences, every position's counts sum
/// to the number of sequences. The table is built once by [`tabulate`] and
/// never mutated afterwards.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct FrequencyTable {
    positions: Vec<PositionCounts>,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionCounts> {
        self.positions.iter()
    }

    pub fn position(&self, i: usize) -> Option<&PositionCounts> {
        self.positions.get(i)
    }
}

/// Tabulates per-position nucleotide counts across the collection.
///
/// The alignment width is the length of the first sequence. Sequences
/// shorter than that width under-count their missing trailing columns, and
/// characters beyond the width are ignored; neither case is validated.
///
/// # Errors
///
/// * [`ProfileError::EmptyInput`] if the collection has no sequences, since
///   no width can be inferred. `source` names the file for the message only.
/// * [`ProfileError::UnknownNucleotide`] for any character outside
///   {A, C, G, T}, reported with its 1-based sequence and column.
pub fn tabulate(sequences: &[String], source: &str) -> Result<FrequencyTable, ProfileError> {
    let Some(first) = sequences.first() else {
        return Err(ProfileError::EmptyInput {
            path: source.to_string(),
        });
    };

    let width = first.chars().count();
    let mut positions = vec![PositionCounts::default(); width];

    for (seq_idx, sequence) in sequences.iter().enumerate() {
        for (pos, c) in sequence.chars().take(width).enumerate() {
            let nucleotide =
                Nucleotide::from_char(c).ok_or(ProfileError::UnknownNucleotide {
                    found: c,
                    sequence: seq_idx + 1,
                    position: pos + 1,
                })?;
            positions[pos].increment(nucleotide);
        }
    }

    Ok(FrequencyTable { positions })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_match_reference_alignment() {
        let table = tabulate(&seqs(&["ACGT", "ACGA", "ACGT"]), "test").unwrap();

        assert_eq!(table.len(), 4);

        let expect = [
            [3, 0, 0, 0], // pos 0: all A
            [0, 3, 0, 0], // pos 1: all C
            [0, 0, 3, 0], // pos 2: all G
            [1, 0, 0, 2], // pos 3: T, A, T
        ];
        for (i, counts) in expect.iter().enumerate() {
            let pos = table.position(i).unwrap();
            for (&(n, count), want) in pos.pairs().collect::<Vec<_>>().iter().zip(counts) {
                assert_eq!(count, *want, "position {i}, nucleotide {}", n.as_char());
            }
        }
    }

    #[test]
    fn counts_sum_to_sequence_count() {
        let input = seqs(&["ACGT", "TGCA", "GGGG", "TTTT", "ACCA"]);
        let table = tabulate(&input, "test").unwrap();

        for pos in table.iter() {
            assert_eq!(pos.total(), input.len() as u32);
        }
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = tabulate(&[], "DNAInput.txt").unwrap_err();
        assert!(matches!(err, ProfileError::EmptyInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_nucleotide_reports_location() {
        let err = tabulate(&seqs(&["ACGT", "ACNT"]), "test").unwrap_err();
        match err {
            ProfileError::UnknownNucleotide {
                found,
                sequence,
                position,
            } => {
                assert_eq!(found, 'N');
                assert_eq!(sequence, 2);
                assert_eq!(position, 3);
            }
            other => panic!("expected UnknownNucleotide, got {other:?}"),
        }
    }

    #[test]
    fn shorter_sequence_undercounts_trailing_positions() {
        // Known limitation: no length validation, trailing columns just see
        // fewer observations.
        let table = tabulate(&seqs(&["ACGT", "AC"]), "test").unwrap();
        assert_eq!(table.position(0).unwrap().total(), 2);
        assert_eq!(table.position(3).unwrap().total(), 1);
    }

    #[test]
    fn longer_sequence_ignores_excess_columns() {
        let table = tabulate(&seqs(&["AC", "ACGT"]), "test").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.position(1).unwrap().total(), 2);
    }
}
