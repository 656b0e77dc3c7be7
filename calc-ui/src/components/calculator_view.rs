use calc_core::{Action, CalculatorConfig, CalculatorState, KEYPAD, Key};
use gpui::{
    ClickEvent, Context, Div, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    TextAlign, Window, div, px,
};
use gpui_component::{h_flex, v_flex};
use tracing::{debug, warn};

use super::make_key_button;

/// The display plus keypad. Owns the only [`CalculatorState`] in the process.
pub struct CalculatorView {
    state: CalculatorState,
}

impl CalculatorView {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(config),
        }
    }

    /// Feeds one button press into the calculator.
    pub fn press(
        &mut self,
        action: Action,
    ) {
        self.state.dispatch(action);
        if let Some(error) = self.state.error() {
            warn!(%error, "calculator showing error");
        } else {
            debug!(display = %self.state.display(), "display updated");
        }
    }

    fn render_key(
        &self,
        key: &Key,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let action = key.action;
        make_key_button(
            key,
            cx.listener(move |this, _: &ClickEvent, _, cx| {
                this.press(action);
                cx.notify();
            }),
        )
    }

    fn render_row(
        &self,
        row: &[Key],
        cx: &mut Context<Self>,
    ) -> Div {
        h_flex()
            .gap(px(10.))
            .children(row.iter().map(|key| self.render_key(key, cx)))
    }
}

fn render_display(text: &str) -> Div {
    div()
        .w(px(300.))
        .h(px(50.))
        .px_3()
        .flex()
        .items_center()
        .justify_end()
        .border_1()
        .rounded_md()
        .overflow_hidden()
        .text_2xl()
        .font_weight(FontWeight::BOLD)
        .text_align(TextAlign::Right)
        .child(SharedString::from(text.to_string()))
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let keypad = v_flex()
            .w(px(300.))
            .gap(px(10.))
            .children(KEYPAD.iter().map(|row| self.render_row(row, cx)));

        v_flex()
            .gap(px(25.))
            .p_5()
            .child(render_display(self.state.display()))
            .child(keypad)
    }
}

#[cfg(test)]
mod tests {
    use calc_core::{Digit, ErrorEntryPolicy, Operator};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(id: &str) -> Action {
        KEYPAD
            .iter()
            .flat_map(|row| row.iter())
            .find(|k| k.id == id)
            .map(|k| k.action)
            .unwrap_or_else(|| panic!("no key with id {id}"))
    }

    #[test]
    fn new_view_shows_empty_display() {
        let view = CalculatorView::new(CalculatorConfig::default());

        assert_eq!(view.state.display(), "");
    }

    #[test]
    fn pressing_keypad_ids_computes_result() {
        let mut view = CalculatorView::new(CalculatorConfig::default());

        for id in ["key-1", "key-2", "key-mul", "key-3", "key-equals"] {
            view.press(key(id));
        }

        assert_eq!(view.state.display(), "36");
    }

    #[test]
    fn negate_key_toggles_sign() {
        let mut view = CalculatorView::new(CalculatorConfig::default());
        view.press(Action::Digit(Digit::new(4).unwrap()));

        view.press(key("key-negate"));

        assert_eq!(view.state.display(), "-4");
    }

    #[test]
    fn configured_restart_policy_reaches_state() {
        let config = CalculatorConfig {
            error_entry: ErrorEntryPolicy::Restart,
        };
        let mut view = CalculatorView::new(config);

        view.press(Action::Operator(Operator::Div));
        view.press(key("key-equals"));
        view.press(key("key-8"));

        assert_eq!(view.state.display(), "8");
    }
}
