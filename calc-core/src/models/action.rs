use crate::{Digit, Operator};

/// Every button the calculator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Evaluate,
    Clear,
    Delete,
    ToggleSign,
}

impl Action {
    /// Caption shown on the button for this action.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Clear => "CLR".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::ToggleSign => "(-)".to_string(),
        }
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labels_match_button_captions() {
        assert_eq!(Action::from(Digit::ALL[7]).label(), "7");
        assert_eq!(Action::Decimal.label(), ".");
        assert_eq!(Action::from(Operator::Div).label(), "/");
        assert_eq!(Action::Evaluate.label(), "=");
        assert_eq!(Action::Clear.label(), "CLR");
        assert_eq!(Action::Delete.label(), "DEL");
        assert_eq!(Action::ToggleSign.label(), "(-)");
    }
}
