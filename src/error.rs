use thiserror::Error;

/// The result of a minimization or rendering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when the input of an operation is invalid.
///
/// All checks happen before any work is done, so an error never comes with a
/// partially computed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A function needs at least one variable.
    #[error("the number of variables must be at least 1")]
    NoVariables,

    /// Implicant patterns are 32 bits wide.
    #[error("{num_vars} variables requested, at most {max} are supported")]
    TooManyVariables { num_vars: usize, max: usize },

    /// A minterm does not fit into `num_vars` bits.
    #[error(
        "minterm {minterm} is out of range for {num_vars} variables (expected 0..={})",
        max_minterm(.num_vars)
    )]
    MintermOutOfRange { minterm: u32, num_vars: usize },

    /// The renderer needs exactly one name per variable.
    #[error("expected {expected} variable names, got {found}")]
    VarNamesMismatch { expected: usize, found: usize },
}

fn max_minterm(num_vars: &usize) -> u64 {
    1u64.checked_shl(*num_vars as u32).map_or(u64::MAX, |n| n - 1)
}
