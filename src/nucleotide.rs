/// The four unambiguous DNA bases. Ambiguity codes, gaps and lowercase are
/// rejected at the parsing boundary rather than carried through the counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

/// Fixed iteration order. Both the consensus tie-break and the report's
/// sort stability depend on this exact order, so it is defined once.
pub const NUCLEOTIDE_ORDER: [Nucleotide; 4] = [
    Nucleotide::A,
    Nucleotide::C,
    Nucleotide::G,
    Nucleotide::T,
];

impl Nucleotide {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}
