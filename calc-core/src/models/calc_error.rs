use thiserror::Error;

/// Failures an evaluation can surface on the display.
///
/// The `Display` text of each variant is exactly what the user sees in
/// place of a number.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Division with a zero right-hand operand.
    #[error("Error: Div by Zero")]
    DivisionByZero,

    /// The display text could not be read as a number at evaluation time.
    #[error("Error: Invalid Input")]
    InvalidInput,
}
