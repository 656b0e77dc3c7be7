use anyhow::Result;
use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, WindowPreferences},
    config::AppConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the fixed-size calculator window described by `config`.
pub fn open_main_window(
    config: &AppConfig,
    app_cx: &mut App,
) -> Result<()> {
    let prefs = WindowPreferences::from(&config.window);
    let calculator = config.calculator;
    let size = prefs.size;

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(None, size, app_cx))),
        titlebar: Some(TitlebarOptions {
            title: Some(config.window.title.clone().into()),
            ..Default::default()
        }),
        is_resizable: false,
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| AppWindow::new(calculator, cx));
        cx.new(|cx| Root::new(view, window, cx))
    })?;

    info!(title = %config.window.title, ?size, "main window opened");
    Ok(())
}
