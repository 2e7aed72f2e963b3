//! Error type shared by all solvers.

/// Failure outcomes of a solver or of the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The cyclic figurate search exhausted every seed.
    #[error("no cyclic set of figurate numbers found")]
    NoCycle,

    #[error("no solver registered for problem {id}")]
    UnknownProblem { id: u32 },

    /// A bounded integer scan ran past the range of its integer type.
    #[error("integer overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("scan finished without an answer for {what}")]
    NotFound { what: &'static str },
}
