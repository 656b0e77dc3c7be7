mod action;
mod calc_error;
mod calculator_config;
mod digit;
mod operator;

pub use action::Action;
pub use calc_error::CalcError;
pub use calculator_config::{CalculatorConfig, ErrorEntryPolicy};
pub use digit::{Digit, InvalidDigit};
pub use operator::Operator;
