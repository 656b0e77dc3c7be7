use serde::Deserialize;

/// What a digit or decimal press does while the display holds an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorEntryPolicy {
    /// Append to whatever text is shown, error literal included.
    #[default]
    Append,
    /// Discard the error text and begin a fresh number.
    Restart,
}

/// Behavioural settings for a [`crate::CalculatorState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub error_entry: ErrorEntryPolicy,
}
