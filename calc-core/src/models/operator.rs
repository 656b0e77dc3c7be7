use crate::CalcError;

/// A binary arithmetic operation awaiting its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operation to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] for `Div` when `rhs` compares
    /// equal to zero (negative zero included).
    pub fn apply(
        &self,
        lhs: f64,
        rhs: f64,
    ) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn symbols_are_ascii_operators() {
        assert_eq!(Operator::ALL.map(|op| op.symbol()), ['+', '-', '*', '/']);
    }

    #[test]
    fn apply_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operator::Sub.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Div.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn apply_div_by_zero_is_error() {
        assert_eq!(Operator::Div.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn apply_div_by_negative_zero_is_error() {
        assert_eq!(Operator::Div.apply(5.0, -0.0), Err(CalcError::DivisionByZero));
    }
}
