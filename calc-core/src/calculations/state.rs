//! The calculator's input/evaluate/display state machine.
//!
//! The machine holds one pending binary operation at a time. Its phases are
//! not tagged explicitly; they follow from the pending operator and the
//! display text:
//!
//! | Phase | Pending operator | Display holds |
//! |-------|------------------|---------------|
//! | first operand entry | `None` | the number being typed, or the last result |
//! | second operand entry | `Some(op)` | the number being typed |
//! | error | unchanged | an error literal |
//!
//! # Example
//!
//! ```
//! use calc_core::{Action, CalculatorConfig, CalculatorState, Digit, Operator};
//!
//! let mut calc = CalculatorState::new(CalculatorConfig::default());
//! for action in [
//!     Action::Digit(Digit::new(3).unwrap()),
//!     Action::Operator(Operator::Add),
//!     Action::Digit(Digit::new(4).unwrap()),
//!     Action::Evaluate,
//!     Action::Operator(Operator::Add),
//!     Action::Digit(Digit::new(2).unwrap()),
//!     Action::Evaluate,
//! ] {
//!     calc.dispatch(action);
//! }
//!
//! assert_eq!(calc.display(), "9");
//! ```

use tracing::{debug, warn};

use crate::calculations::number::{format_number, parse_number};
use crate::{Action, CalcError, CalculatorConfig, Digit, ErrorEntryPolicy, Operator};

/// Complete calculator state: the display buffer plus the numeric registers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    display: String,
    operand1: f64,
    operand2: f64,
    result: f64,
    pending: Option<Operator>,
    error: Option<CalcError>,
    config: CalculatorConfig,
}

/// Returns the state that results from applying `action` to `state`.
pub fn apply(
    mut state: CalculatorState,
    action: Action,
) -> CalculatorState {
    state.dispatch(action);
    state
}

impl CalculatorState {
    /// Creates a cleared calculator with an empty display.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Text currently shown: a numeral being entered, a result, or an error literal.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// The error whose literal (possibly shortened by Delete) the display
    /// currently shows, if any.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Processes one button press to completion.
    pub fn dispatch(
        &mut self,
        action: Action,
    ) {
        debug!(?action, display = %self.display, "dispatch");

        match action {
            Action::Digit(digit) => self.push_digit(digit),
            Action::Decimal => self.push_decimal(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Evaluate => self.evaluate(),
            Action::Clear => self.clear(),
            Action::Delete => self.delete_last(),
            Action::ToggleSign => self.toggle_sign(),
        }
    }

    /// Appends a digit. No length limit and no leading-zero suppression.
    fn push_digit(
        &mut self,
        digit: Digit,
    ) {
        self.begin_entry();
        self.display.push(digit.as_char());
    }

    /// Appends a decimal point unless the display already has one.
    fn push_decimal(&mut self) {
        self.begin_entry();
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Prepares the display for further typing.
    ///
    /// Under [`ErrorEntryPolicy::Restart`] an error literal is discarded first;
    /// under [`ErrorEntryPolicy::Append`] it stays and typing extends it.
    fn begin_entry(&mut self) {
        if let Some(error) = self.error.take()
            && self.config.error_entry == ErrorEntryPolicy::Restart
        {
            debug!(%error, "discarding error text for fresh entry");
            self.display.clear();
        }
    }

    /// Locks the display value in as the first operand and records `op`.
    ///
    /// Unparseable text becomes `0`. Pressing another operator before
    /// evaluating replaces both the operand and the operator.
    fn choose_operator(
        &mut self,
        op: Operator,
    ) {
        self.operand1 = parse_number(&self.display).unwrap_or(0.0);
        self.pending = Some(op);
        self.error = None;
        self.display.clear();
    }

    fn evaluate(&mut self) {
        match self.compute() {
            Ok(result) => {
                self.result = result;
                self.operand1 = result;
                self.pending = None;
                self.error = None;
                self.display = format_number(result);
            }
            Err(error) => {
                warn!(
                    %error,
                    operand1 = self.operand1,
                    pending = ?self.pending,
                    "evaluation failed"
                );
                if error == CalcError::DivisionByZero {
                    self.operand1 = 0.0;
                }
                self.error = Some(error);
                self.display = error.to_string();
            }
        }
    }

    /// Reads the second operand and applies the pending operator.
    ///
    /// Empty display text counts as `0`. With no pending operator the
    /// second operand passes through unchanged.
    fn compute(&mut self) -> Result<f64, CalcError> {
        self.operand2 = if self.display.is_empty() {
            0.0
        } else {
            parse_number(&self.display).ok_or(CalcError::InvalidInput)?
        };

        match self.pending {
            Some(op) => op.apply(self.operand1, self.operand2),
            None => Ok(self.operand2),
        }
    }

    fn clear(&mut self) {
        *self = Self::new(self.config);
    }

    /// Removes the last character. A shortened error literal still counts
    /// as an error until the display is empty.
    fn delete_last(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.error = None;
        }
    }

    /// Negates the displayed number; leaves unparseable text untouched.
    fn toggle_sign(&mut self) {
        match parse_number(&self.display) {
            Some(value) => {
                self.display = format_number(-value);
                self.error = None;
            }
            None => debug!(display = %self.display, "cannot negate current display content"),
        }
    }
}
