pub mod calculator_view;
pub mod window;

use calc_core::{Key, KeyKind};
use gpui::{App, ClickEvent, Pixels, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use calculator_view::CalculatorView;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Creates a keypad button for `key`; function keys use the accent style.
pub fn make_key_button(
    key: &Key,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(key.id).large().w(px(68.)).h(px(58.)).label(key.label());

    let button = match key.kind {
        KeyKind::Function => button.primary(),
        KeyKind::Digit => button,
    };
    button.on_click(on_click)
}
