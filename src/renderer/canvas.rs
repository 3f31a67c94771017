//! Canvas 2D renderer
//!
//! Flat rectangles for the ground, player and obstacles plus HUD text. The
//! playfield is scaled uniformly to fit the canvas.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Hud, RenderSink};
use crate::config::GameConfig;
use crate::sim::{SimStatus, Snapshot};

const SKY: &str = "#f4f1e8";
const GROUND: &str = "#5b4a3a";
const PLAYER: &str = "#2e86de";
const PLAYER_DEAD: &str = "#c0392b";
const OBSTACLE: &str = "#27ae60";
const TEXT: &str = "#222222";
const XP_BAR_BG: &str = "#d8d2c4";
const XP_BAR_FILL: &str = "#f1c40f";

/// Frames the level-up flash stays on screen
const FLASH_FRAMES: u32 = 20;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    /// Playfield size in simulation units
    field: (f64, f64),
    ground_line: f64,
    flash_frames: u32,
}

impl CanvasRenderer {
    /// Attach to a canvas; `None` if the browser refuses a 2D context
    pub fn new(canvas: HtmlCanvasElement, config: &GameConfig) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            canvas,
            field: (config.width as f64, config.height as f64),
            ground_line: config.ground_line() as f64,
            flash_frames: 0,
        })
    }

    /// Start the level-up flash
    pub fn flash(&mut self) {
        self.flash_frames = FLASH_FRAMES;
    }

    fn scale(&self) -> f64 {
        let sx = self.canvas.width() as f64 / self.field.0;
        let sy = self.canvas.height() as f64 / self.field.1;
        sx.min(sy)
    }

    fn rect(&self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn text(&self, text: &str, x: f64, y: f64, align: &str) {
        self.ctx.set_text_align(align);
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn draw_hud(&self, hud: &Hud) {
        let (w, h) = self.field;
        self.ctx.set_fill_style_str(TEXT);
        self.ctx.set_font("16px monospace");
        self.text(&hud.score, 10.0, 22.0, "left");
        self.text(&hud.high_score, w - 10.0, 22.0, "right");

        if let Some((line, fraction)) = &hud.level {
            self.text(line, 10.0, 44.0, "left");
            let bar_w = 120.0;
            self.ctx.set_fill_style_str(XP_BAR_BG);
            self.ctx.fill_rect(10.0, 50.0, bar_w, 6.0);
            self.ctx.set_fill_style_str(XP_BAR_FILL);
            self.ctx
                .fill_rect(10.0, 50.0, bar_w * (*fraction as f64).clamp(0.0, 1.0), 6.0);
            self.ctx.set_fill_style_str(TEXT);
        }

        if let Some(fps) = &hud.fps {
            self.text(fps, w - 10.0, 44.0, "right");
        }

        if let Some(banner) = &hud.banner {
            self.ctx.set_font("bold 22px monospace");
            self.text(banner, w / 2.0, h / 2.0, "center");
        }
    }
}

impl RenderSink for CanvasRenderer {
    fn present(&mut self, snapshot: &Snapshot<'_>, hud: &Hud) {
        let (w, h) = self.field;
        let scale = self.scale();

        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.ctx.set_fill_style_str(SKY);
        self.ctx
            .fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.scale(scale, scale).ok();

        self.ctx.set_fill_style_str(GROUND);
        self.ctx
            .fill_rect(0.0, self.ground_line, w, h - self.ground_line);

        for obstacle in snapshot.obstacles {
            self.rect(
                OBSTACLE,
                obstacle.pos.x,
                obstacle.pos.y,
                obstacle.size.x,
                obstacle.size.y,
            );
        }

        let player = snapshot.player;
        let color = match snapshot.status {
            SimStatus::Running => PLAYER,
            SimStatus::Over => PLAYER_DEAD,
        };
        self.rect(color, player.pos.x, player.pos.y, player.size.x, player.size.y);

        if self.flash_frames > 0 {
            self.ctx
                .set_global_alpha(self.flash_frames as f64 / FLASH_FRAMES as f64 * 0.4);
            self.ctx.set_fill_style_str(XP_BAR_FILL);
            self.ctx.fill_rect(0.0, 0.0, w, h);
            self.ctx.set_global_alpha(1.0);
            self.flash_frames -= 1;
        }

        self.draw_hud(hud);
    }
}
