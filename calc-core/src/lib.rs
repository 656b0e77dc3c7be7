pub mod calculations;
pub mod keypad;
pub mod models;

pub use calculations::{CalculatorState, apply, format_number, parse_number};
pub use keypad::{KEYPAD, Key, KeyKind};
pub use models::*;
