//! Per-frame scene description
//!
//! Built from the post-tick `GameState` without mutating it. The drawing
//! backend clears to `background`, draws `mesh`, then draws each text item.
//! Glyph measurement is the backend's job, so text is anchored by its
//! horizontal center and top edge.

use glam::Vec2;

use super::shapes;
use super::vertex::Mesh;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::settings::{Settings, rgba_to_f32};
use crate::sim::GameState;

/// A line of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// x of the text's horizontal center, y of its top edge
    pub anchor: Vec2,
    pub font_size: f32,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [f32; 4],
    pub mesh: Mesh,
    pub texts: Vec<TextItem>,
}

impl Scene {
    pub fn build(state: &GameState, settings: &Settings) -> Self {
        let fg = rgba_to_f32(settings.foreground);

        let mut mesh = Mesh::new();
        mesh.append(shapes::rect(&state.left.rect(), fg));
        mesh.append(shapes::rect(&state.right.rect(), fg));
        mesh.append(shapes::circle(
            state.ball.position,
            state.ball.radius,
            fg,
            settings.ball_segments,
        ));

        let text = |text: String, anchor: Vec2, font_size: f32| TextItem {
            text,
            anchor,
            font_size,
            color: fg,
        };

        let title = text(
            settings.title.clone(),
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0 - settings.title_font_size / 2.0),
            settings.title_font_size,
        );
        let left_score = text(
            state.score.left.to_string(),
            Vec2::new(FIELD_WIDTH / 4.0, 10.0),
            settings.score_font_size,
        );
        let right_score = text(
            state.score.right.to_string(),
            Vec2::new(FIELD_WIDTH / 4.0 * 3.0, 10.0),
            settings.score_font_size,
        );

        Self {
            background: rgba_to_f32(settings.background),
            mesh,
            texts: vec![title, left_score, right_score],
        }
    }
}
