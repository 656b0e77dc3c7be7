//! Calculator arithmetic and the input/evaluate/display state machine.
//!
//! Nothing in here knows about windows or widgets: a UI feeds [`Action`]s
//! into a [`CalculatorState`] and renders [`CalculatorState::display`].
//!
//! [`Action`]: crate::Action

pub mod number;
pub mod state;

pub use number::{format_number, parse_number};
pub use state::{CalculatorState, apply};
