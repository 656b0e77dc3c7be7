use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

use calc_core::CalculatorConfig;

use super::CalculatorView;
#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};

/// Top-level window content: hosts the calculator and quits when closed.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    calculator: Entity<CalculatorView>,
}

impl AppWindow {
    pub fn new(
        config: CalculatorConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        let calculator = cx.new(|_| CalculatorView::new(config));

        info!(?config, "Window constructed");
        Self {
            _window_close_subscription: subscription,
            calculator,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(self.calculator.clone())
    }
}
