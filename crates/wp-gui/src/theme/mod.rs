//! Visual theme: color palette, layout constants, and virtual canvas scaling.

pub mod text;

use macroquad::prelude::*;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 640.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 360.0;

/// Margin between the canvas edge and screen content.
pub const MARGIN: f32 = 8.0;

/// PICO-8-inspired palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black background.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Dark blue for deep backgrounds.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Dark purple for havoc.
    pub const DARK_PURPLE: Color = Color::new(0.494, 0.145, 0.326, 1.0);
    /// Dark gray for inactive elements.
    pub const DARK_GRAY: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Light gray for borders and secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Red for errors and fusion.
    pub const RED: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Orange for warnings.
    pub const ORANGE: Color = Color::new(1.0, 0.639, 0.0, 1.0);
    /// Yellow for highlights and spectro.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
    /// Green for completed teams and aero.
    pub const GREEN: Color = Color::new(0.0, 0.894, 0.212, 1.0);
    /// Blue for glacio.
    pub const BLUE: Color = Color::new(0.161, 0.678, 1.0, 1.0);
    /// Indigo for electro.
    pub const INDIGO: Color = Color::new(0.514, 0.463, 0.612, 1.0);
    /// Pink for havoc text on dark panels.
    pub const PINK: Color = Color::new(1.0, 0.467, 0.659, 1.0);
}

/// Color associated with a resonator element.
pub fn element_color(element: &str) -> Color {
    match element.to_lowercase().as_str() {
        "aero" => palette::GREEN,
        "electro" => palette::INDIGO,
        "fusion" => palette::RED,
        "glacio" => palette::BLUE,
        "havoc" => palette::PINK,
        "spectro" => palette::YELLOW,
        _ => palette::LIGHT_GRAY,
    }
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let (offset_x, offset_y, scale) = canvas_transform();
    let viewport_w = CANVAS_W * scale;
    let viewport_h = CANVAS_H * scale;

    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            viewport_w as i32,
            viewport_h as i32,
        )),
        ..Default::default()
    });
}

/// Convert screen-space mouse position to virtual canvas coordinates.
pub fn mouse_canvas_position() -> (f32, f32) {
    let (mx, my) = mouse_position();
    let (offset_x, offset_y, scale) = canvas_transform();
    ((mx - offset_x) / scale, (my - offset_y) / scale)
}

/// Letterbox offset and scale fitting the canvas into the window.
fn canvas_transform() -> (f32, f32, f32) {
    let scale = (screen_width() / CANVAS_W).min(screen_height() / CANVAS_H);
    let offset_x = (screen_width() - CANVAS_W * scale) / 2.0;
    let offset_y = (screen_height() - CANVAS_H * scale) / 2.0;
    (offset_x, offset_y, scale)
}
