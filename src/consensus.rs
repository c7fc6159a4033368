use crate::nucleotide::Nucleotide;
use crate::profile::FrequencyTable;

/// Derives the consensus sequence from a frequency table.
///
/// Each position contributes the base with the highest count. Candidates are
/// scanned in the fixed A, C, G, T order and the current best is replaced
/// only on a strict improvement, so the earliest base in that order wins any
/// tie. A pure function of the table: deriving twice gives the same string.
///
/// A position with all four counts zero can only arise from an empty
/// alignment, which the tabulator already rejects; if one is ever seen, the
/// scan yields `A` rather than shortening the consensus.
pub fn derive_consensus(table: &FrequencyTable) -> String {
    table
        .iter()
        .map(|counts| {
            let mut best = Nucleotide::A;
            let mut max = counts.count(best);

            for (nucleotide, count) in counts.pairs() {
                if count > max {
                    max = count;
                    best = nucleotide;
                }
            }

            best.as_char()
        })
        .collect()
}
