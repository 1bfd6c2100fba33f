//! Canvas-2D rendering
//!
//! Draws the whole playfield from `GameState` each frame: background, active
//! bricks, paddle, ball. The simulation owns state only; every pixel goes
//! through here.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

/// Canvas renderer bound to a fixed-size 2D context
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    /// Bind to the canvas with the given element id.
    ///
    /// Returns `None` (after logging) if the canvas or its 2D context is
    /// missing - setup treats that as a fatal no-op.
    pub fn from_canvas_id(document: &Document, id: &str) -> Option<Self> {
        let canvas: HtmlCanvasElement = match document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("canvas #{id} not found, rendering disabled");
                return None;
            }
        };

        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("no 2d context on canvas #{id}, rendering disabled");
                return None;
            }
        };

        Some(Self { ctx })
    }

    /// Draw one complete frame
    pub fn draw(&self, state: &GameState, settings: &Settings) {
        self.clear(settings);
        self.draw_bricks(state, settings);
        self.draw_paddle(state, settings);
        self.draw_ball(state, settings);
    }

    fn clear(&self, settings: &Settings) {
        self.ctx.set_fill_style_str(&settings.background_color);
        self.ctx
            .fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
    }

    fn draw_bricks(&self, state: &GameState, settings: &Settings) {
        for brick in state.bricks.iter() {
            if !brick.is_active() {
                continue;
            }
            self.ctx.set_fill_style_str(settings.brick_color(brick.row));
            self.ctx.fill_rect(
                brick.rect.x as f64,
                brick.rect.y as f64,
                brick.rect.width as f64,
                brick.rect.height as f64,
            );
        }
    }

    fn draw_paddle(&self, state: &GameState, settings: &Settings) {
        self.ctx.set_fill_style_str(&settings.paddle_color);
        self.ctx.fill_rect(
            state.paddle.x as f64,
            state.paddle.y() as f64,
            state.paddle.width as f64,
            PADDLE_HEIGHT as f64,
        );
    }

    fn draw_ball(&self, state: &GameState, settings: &Settings) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            PI * 2.0,
        );
        self.ctx.set_fill_style_str(&settings.ball_color);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
