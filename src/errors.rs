use thiserror::Error;

/// Everything that can abort a run. Each variant maps to its own exit code
/// so callers can distinguish failure kinds without parsing stderr.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unable to read input file `{path}`")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no sequence lines found in `{path}`
the alignment width is inferred from the first sequence, so at least one
non-header line is required"
    )]
    EmptyInput { path: String },

    #[error(
        "unknown nucleotide `{found}`:
sequence {sequence}, position {position}
only A, C, G and T are accepted (no ambiguity codes, gaps or lowercase)"
    )]
    UnknownNucleotide {
        found: char,
        /// 1-based ordinal of the offending sequence line.
        sequence: usize,
        /// 1-based column within that sequence.
        position: usize,
    },

    #[error("unable to write output file `{path}`")]
    DestinationUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ProfileError::SourceUnavailable { .. } => 1,
            ProfileError::EmptyInput { .. } => 2,
            ProfileError::UnknownNucleotide { .. } => 3,
            ProfileError::DestinationUnwritable { .. } => 4,
        }
    }
}
