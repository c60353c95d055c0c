//! Pixel art GUI for WuWa Picker: macroquad entry point.
//!
//! Manages the screen stack and main render loop. The virtual canvas
//! (640x360) is scaled to fit the window.

use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use wp_core::Roster;
use wp_core::loader::{DEFAULT_ROSTER_PATH, expand_home, load_roster};
use wp_gui::app::{AppState, arg_value, parse_seed};
use wp_gui::screen::menu::MenuScreen;
use wp_gui::screen::random::RandomScreen;
use wp_gui::screen::roulette::RouletteScreen;
use wp_gui::screen::{Screen, ScreenId, Transition};
use wp_gui::theme::{CANVAS_H, CANVAS_W, palette, setup_virtual_canvas};
use wp_roulette::RouletteConfig;

/// Create a screen instance for a given screen id.
fn make_screen<'r>(id: ScreenId, app: &mut AppState<'r>) -> Box<dyn Screen<'r> + 'r> {
    match id {
        ScreenId::Menu => Box::new(MenuScreen::new()),
        ScreenId::Random => Box::new(RandomScreen::new(app)),
        ScreenId::Roulette => Box::new(RouletteScreen::new(app)),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "WuWa Picker".to_owned(),
        window_width: (CANVAS_W * 2.0) as i32,
        window_height: (CANVAS_H * 2.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args: --file <csv> --seed <n>
    let args: Vec<String> = std::env::args().collect();
    let file = arg_value(&args, "--file").unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string());
    let mut config = RouletteConfig::default();
    if let Some(seed) = parse_seed(arg_value(&args, "--seed").as_deref()) {
        config = config.with_seed(seed);
    }

    let (roster, error) = match load_roster(&expand_home(&file)) {
        Ok(roster) => (roster, None),
        Err(e) => {
            tracing::warn!("failed to load roster: {e}");
            (Roster::default(), Some(e.to_string()))
        }
    };

    let mut app = AppState::new(&roster, &config);
    app.error = error;

    let mut screens: Vec<Box<dyn Screen<'_> + '_>> = vec![make_screen(ScreenId::Menu, &mut app)];

    loop {
        // Clear with black (letterbox bars)
        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::DARK_BLUE);

        if let Some(screen) = screens.last_mut() {
            match screen.update(&mut app) {
                Transition::Push(id) => {
                    let next = make_screen(id, &mut app);
                    screens.push(next);
                }
                Transition::Pop => {
                    screens.pop();
                }
                Transition::None => {}
            }
        }

        // Draw the current top screen (may have changed after transition)
        if let Some(screen) = screens.last() {
            screen.draw(&app);
        }

        if app.should_quit || screens.is_empty() {
            break;
        }

        next_frame().await;
    }
}
