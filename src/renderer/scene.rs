//! Scene composition
//!
//! Reads the simulation state and issues canvas draw calls. Never mutates it.

use super::canvas::{Canvas, Stroke};
use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{DialId, SimulationState};

/// Dash length of the projection guides (pixels, before scaling)
pub const GUIDE_DASH: f32 = 5.0;

/// How the scene is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub dial: Stroke,
    pub radius: Stroke,
    pub guide: Stroke,
    pub trace: Stroke,
    pub tracer_dot_radius: f32,
    pub tracer_dot_color: [f32; 4],
    pub show_guides: bool,
    /// Pixel scale (device pixel ratio on the web)
    pub scale: f32,
}

impl SceneStyle {
    pub fn from_settings(settings: &Settings, scale: f32) -> Self {
        let width = settings.line_width * scale;
        Self {
            dial: Stroke::new(colors::DIAL_FACE, width),
            radius: Stroke::new(colors::DIAL_RADIUS, width),
            guide: Stroke::new(colors::GUIDE, width),
            trace: Stroke::new(colors::TRACE, width),
            tracer_dot_radius: settings.tracer_dot_radius * scale,
            tracer_dot_color: colors::TRACER_DOT,
            show_guides: settings.show_guides,
            scale,
        }
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), 1.0)
    }
}

/// Draw one frame: dial faces and radii, projection guides, traced path, tracer dot
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, state: &SimulationState, style: &SceneStyle) {
    canvas.clear();

    for id in [DialId::First, DialId::Second] {
        let dial = state.dial_state(id);
        canvas.stroke_circle(dial.center, dial.radius, &style.dial);
        canvas.line(dial.center, dial.tip, &style.radius);
    }

    let Some(tracer) = state.tracer() else {
        return;
    };

    if style.show_guides {
        let dash = GUIDE_DASH * style.scale;
        let first_tip = state.first.tip();
        let second_tip = state.second.tip();
        canvas.dashed_line(first_tip, tracer, &style.guide, dash);
        canvas.dashed_line(second_tip, tracer, &style.guide, dash);
    }

    for (a, b) in state.traced_segments() {
        canvas.line(a.as_vec2(), b.as_vec2(), &style.trace);
    }

    canvas.fill_dot(tracer, style.tracer_dot_radius, style.tracer_dot_color);
}
