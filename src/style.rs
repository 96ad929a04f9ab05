//! Colors and stroke constants used by the renderer.

use super::segment::MarkerRole;

/// An opaque 8-bit RGB color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// `#ccc`
    pub const LIGHT_GRAY: Color = Color::rgb(0xcc, 0xcc, 0xcc);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

/// Stroke widths, marker radius and colors of a rendered frame.
/// `Default` is the editor's fixed look.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub curve_width: f32,
    pub curve_color: Color,
    pub guide_width: f32,
    pub guide_color: Color,
    pub marker_radius: f32,
    pub anchor_color: Color,
    pub handle_color: Color,
}

impl RenderStyle {
    pub const fn marker_color(&self, role: MarkerRole) -> Color {
        match role {
            MarkerRole::Anchor => self.anchor_color,
            MarkerRole::Handle => self.handle_color,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            curve_width: 2.0,
            curve_color: Color::BLACK,
            // guides keep the curve's line width
            guide_width: 2.0,
            guide_color: Color::LIGHT_GRAY,
            marker_radius: 5.0,
            anchor_color: Color::RED,
            handle_color: Color::BLUE,
        }
    }
}
