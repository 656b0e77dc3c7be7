//! Button layout for the calculator window.
//!
//! Five rows of up to four keys, top to bottom:
//!
//! ```text
//! CLR  DEL  (-)  /
//!  7    8    9   *
//!  4    5    6   -
//!  1    2    3   +
//!  0    .    =
//! ```

use crate::{Action, Digit, Operator};

/// Visual grouping of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Function,
}

/// One button: a stable element id plus the action it dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub id: &'static str,
    pub action: Action,
    pub kind: KeyKind,
}

impl Key {
    const fn digit(
        id: &'static str,
        n: usize,
    ) -> Self {
        Self {
            id,
            action: Action::Digit(Digit::ALL[n]),
            kind: KeyKind::Digit,
        }
    }

    const fn function(
        id: &'static str,
        action: Action,
    ) -> Self {
        Self {
            id,
            action,
            kind: KeyKind::Function,
        }
    }

    pub fn label(&self) -> String {
        self.action.label()
    }
}

pub const KEYPAD: [&[Key]; 5] = [
    &[
        Key::function("key-clear", Action::Clear),
        Key::function("key-delete", Action::Delete),
        Key::function("key-negate", Action::ToggleSign),
        Key::function("key-div", Action::Operator(Operator::Div)),
    ],
    &[
        Key::digit("key-7", 7),
        Key::digit("key-8", 8),
        Key::digit("key-9", 9),
        Key::function("key-mul", Action::Operator(Operator::Mul)),
    ],
    &[
        Key::digit("key-4", 4),
        Key::digit("key-5", 5),
        Key::digit("key-6", 6),
        Key::function("key-sub", Action::Operator(Operator::Sub)),
    ],
    &[
        Key::digit("key-1", 1),
        Key::digit("key-2", 2),
        Key::digit("key-3", 3),
        Key::function("key-add", Action::Operator(Operator::Add)),
    ],
    &[
        Key::digit("key-0", 0),
        Key::function("key-decimal", Action::Decimal),
        Key::function("key-equals", Action::Evaluate),
    ],
];

/// Iterates every key in reading order.
pub fn keys() -> impl Iterator<Item = &'static Key> {
    KEYPAD.iter().flat_map(|row| row.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keypad_has_nineteen_keys() {
        assert_eq!(keys().count(), 19);
    }

    #[test]
    fn rows_hold_at_most_four_keys() {
        assert!(KEYPAD.iter().all(|row| row.len() <= 4));
    }

    #[test]
    fn key_ids_are_unique() {
        let ids: HashSet<_> = keys().map(|k| k.id).collect();

        assert_eq!(ids.len(), 19);
    }

    #[test]
    fn every_action_appears_exactly_once() {
        let mut expected: Vec<Action> = Digit::ALL.into_iter().map(Action::Digit).collect();
        expected.extend(Operator::ALL.into_iter().map(Action::Operator));
        expected.extend([
            Action::Decimal,
            Action::Evaluate,
            Action::Clear,
            Action::Delete,
            Action::ToggleSign,
        ]);

        let actions: HashSet<_> = keys().map(|k| k.action).collect();

        assert_eq!(actions.len(), expected.len());
        assert!(expected.iter().all(|a| actions.contains(a)));
    }

    #[test]
    fn only_digit_actions_use_digit_kind() {
        for key in keys() {
            let is_digit = matches!(key.action, Action::Digit(_));
            assert_eq!(key.kind == KeyKind::Digit, is_digit, "key {}", key.id);
        }
    }

    #[test]
    fn top_row_reads_clr_del_negate_div() {
        let labels: Vec<String> = KEYPAD[0].iter().map(Key::label).collect();

        assert_eq!(labels, ["CLR", "DEL", "(-)", "/"]);
    }
}
