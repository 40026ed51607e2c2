//! Frame drawing
//!
//! Draws the whole session every frame: ship, shots, hostiles, pickups,
//! particles, then the pause/game-over overlay on top.

use glam::Vec2;

use super::canvas::{Canvas2d, Sprite};
use super::hud::{Hud, update_hud};
use super::shapes::{armored_blocks, bomber_hull, fighter_hull};
use crate::sim::{GamePhase, Hostile, HostileKind, Pickup, PickupKind, Player, Projectile, Session};

/// In-canvas health bar geometry
const HEALTH_BAR_POS: Vec2 = Vec2::new(10.0, 10.0);
const HEALTH_BAR_SIZE: Vec2 = Vec2::new(200.0, 20.0);

const PARTICLE_COLOR: &str = "#ff4400";

/// Draw one frame and refresh the HUD
pub fn draw_frame(canvas: &mut impl Canvas2d, hud: &mut impl Hud, session: &Session) {
    let size = session.settings.canvas_size();
    canvas.clear(size);

    draw_player(canvas, &session.player);
    for projectile in &session.projectiles {
        draw_projectile(canvas, projectile, session.settings.trails);
    }
    for hostile in &session.hostiles {
        draw_hostile(canvas, hostile);
    }
    for pickup in &session.pickups {
        draw_pickup(canvas, pickup);
    }
    for particle in &session.particles {
        canvas.save();
        canvas.set_global_alpha(particle.alpha);
        canvas.set_fill_style(PARTICLE_COLOR);
        canvas.trace_circle(particle.pos, particle.radius);
        canvas.fill_path();
        canvas.restore();
    }

    update_hud(hud, session);

    match session.phase {
        GamePhase::GameOver => {
            draw_veil(canvas, size, 0.7);
            let center = size / 2.0;
            canvas.set_fill_style("#fff");
            canvas.set_text_align("center");
            canvas.set_font("48px Arial");
            canvas.fill_text("GAME OVER", center);
            canvas.set_font("24px Arial");
            canvas.fill_text(
                &format!("Final score: {}", session.score),
                center + Vec2::new(0.0, 40.0),
            );
            canvas.fill_text("Press R to restart", center + Vec2::new(0.0, 80.0));
        }
        GamePhase::Paused => {
            draw_veil(canvas, size, 0.5);
            canvas.set_fill_style("#fff");
            canvas.set_text_align("center");
            canvas.set_font("48px Arial");
            canvas.fill_text("PAUSED", size / 2.0);
        }
        GamePhase::Running => {}
    }
}

fn draw_veil(canvas: &mut impl Canvas2d, size: Vec2, opacity: f32) {
    canvas.set_fill_style(&format!("rgba(0, 0, 0, {opacity})"));
    canvas.fill_rect(Vec2::ZERO, size);
}

fn draw_player(canvas: &mut impl Canvas2d, player: &Player) {
    let body = &player.body;
    if !canvas.draw_sprite(Sprite::Player, body.pos, body.size) {
        canvas.set_fill_style(if player.invincible { "#7fb3ff" } else { "#3498db" });
        canvas.fill_rect(body.pos, body.size);
    }

    canvas.set_fill_style("#2ecc71");
    canvas.fill_rect(
        HEALTH_BAR_POS,
        Vec2::new(player.health_fraction() * HEALTH_BAR_SIZE.x, HEALTH_BAR_SIZE.y),
    );
    canvas.set_stroke_style("#fff");
    canvas.stroke_rect(HEALTH_BAR_POS, HEALTH_BAR_SIZE);
}

fn draw_projectile(canvas: &mut impl Canvas2d, projectile: &Projectile, trails: bool) {
    let body = &projectile.body;
    canvas.save();

    if trails {
        let len = projectile.trail.len() as f32;
        let green = u32::from(projectile.power_level) * 80;
        for (i, pos) in projectile.trail.iter().enumerate() {
            let alpha = i as f32 / len * 0.5;
            canvas.set_fill_style(&format!("rgba(255, {green}, 0, {alpha})"));
            canvas.fill_rect(*pos, body.size);
        }
    }

    let (color, blur) = match projectile.power_level {
        1 => ("#000", 10.0),
        2 => ("#ff4400", 10.0),
        _ => ("#ff0000", 20.0),
    };
    canvas.set_fill_style(color);
    canvas.set_shadow(color, blur);
    canvas.fill_rect(body.pos, body.size);
    canvas.restore();
}

fn draw_hostile(canvas: &mut impl Canvas2d, hostile: &Hostile) {
    let Hostile { body, kind, .. } = hostile;
    canvas.save();

    match kind {
        HostileKind::Normal => {
            canvas.set_fill_style("#2c3e50");
            canvas.set_shadow("#34495e", 10.0);
            canvas.trace_polygon(&fighter_hull(body.pos, body.size));
            outline_hull(canvas, 2.0);
        }
        HostileKind::Fast => {
            canvas.set_fill_style("#7f8c8d");
            canvas.set_shadow("#95a5a6", 15.0);
            canvas.trace_polygon(&bomber_hull(body.pos, body.size));
            outline_hull(canvas, 2.0);
        }
        HostileKind::Armored => {
            if !canvas.draw_sprite(Sprite::Armored, body.pos, body.size) {
                canvas.set_fill_style("#27ae60");
                canvas.set_stroke_style("#fff");
                canvas.set_line_width(3.0);
                let blocks = armored_blocks(body.pos, body.size);
                for (pos, size) in blocks {
                    canvas.fill_rect(pos, size);
                }
                for (pos, size) in blocks {
                    canvas.stroke_rect(pos, size);
                }
            }
        }
        HostileKind::Boss => {
            canvas.set_fill_style("#c0392b");
            canvas.set_shadow("#e74c3c", 20.0);
            canvas.trace_polygon(&bomber_hull(body.pos, body.size));
            outline_hull(canvas, 5.0);
        }
    }

    canvas.restore();
}

fn outline_hull(canvas: &mut impl Canvas2d, width: f32) {
    canvas.fill_path();
    canvas.set_stroke_style("#fff");
    canvas.set_line_width(width);
    canvas.stroke_path();
}

fn draw_pickup(canvas: &mut impl Canvas2d, pickup: &Pickup) {
    canvas.set_fill_style(match pickup.kind {
        PickupKind::Health => "#2ecc71",
        PickupKind::Power => "#f1c40f",
    });
    canvas.fill_rect(pickup.body.pos, pickup.body.size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Particle, Projectile, TickInput, tick};
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Fill(String),
        Alpha(f32),
        Rect(Vec2, Vec2),
        StrokeRect(Vec2, Vec2),
        Polygon(usize),
        Circle(Vec2, f32),
        FillPath,
        StrokePath,
        Text(String),
        Sprite(Sprite),
    }

    /// Records draw calls instead of drawing
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
        loaded: HashSet<Sprite>,
        depth: i32,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn fill_rects_after(&self, color: &str) -> Vec<(Vec2, Vec2)> {
            let mut current = String::new();
            let mut out = Vec::new();
            for c in &self.cmds {
                match c {
                    Cmd::Fill(f) => current = f.clone(),
                    Cmd::Rect(p, s) if current == color => out.push((*p, *s)),
                    _ => {}
                }
            }
            out
        }
    }

    impl Canvas2d for Recorder {
        fn clear(&mut self, _size: Vec2) {
            self.cmds.push(Cmd::Clear);
        }
        fn save(&mut self) {
            self.depth += 1;
        }
        fn restore(&mut self) {
            self.depth -= 1;
        }
        fn set_fill_style(&mut self, color: &str) {
            self.cmds.push(Cmd::Fill(color.to_string()));
        }
        fn set_stroke_style(&mut self, _color: &str) {}
        fn set_line_width(&mut self, _width: f32) {}
        fn set_shadow(&mut self, _color: &str, _blur: f32) {}
        fn set_global_alpha(&mut self, alpha: f32) {
            self.cmds.push(Cmd::Alpha(alpha));
        }
        fn set_font(&mut self, _font: &str) {}
        fn set_text_align(&mut self, _align: &str) {}
        fn fill_rect(&mut self, pos: Vec2, size: Vec2) {
            self.cmds.push(Cmd::Rect(pos, size));
        }
        fn stroke_rect(&mut self, pos: Vec2, size: Vec2) {
            self.cmds.push(Cmd::StrokeRect(pos, size));
        }
        fn trace_polygon(&mut self, points: &[Vec2]) {
            self.cmds.push(Cmd::Polygon(points.len()));
        }
        fn trace_circle(&mut self, center: Vec2, radius: f32) {
            self.cmds.push(Cmd::Circle(center, radius));
        }
        fn fill_path(&mut self) {
            self.cmds.push(Cmd::FillPath);
        }
        fn stroke_path(&mut self) {
            self.cmds.push(Cmd::StrokePath);
        }
        fn fill_text(&mut self, text: &str, _pos: Vec2) {
            self.cmds.push(Cmd::Text(text.to_string()));
        }
        fn draw_sprite(&mut self, sprite: Sprite, _pos: Vec2, _size: Vec2) -> bool {
            if self.loaded.contains(&sprite) {
                self.cmds.push(Cmd::Sprite(sprite));
                true
            } else {
                false
            }
        }
    }

    #[derive(Default)]
    struct HudRecorder {
        health: f32,
        score: String,
        level: String,
    }

    impl Hud for HudRecorder {
        fn set_health_percent(&mut self, percent: f32) {
            self.health = percent;
        }
        fn set_score_text(&mut self, text: &str) {
            self.score = text.to_string();
        }
        fn set_level_text(&mut self, text: &str) {
            self.level = text.to_string();
        }
    }

    fn session() -> Session {
        Session::new(Settings::default(), 3)
    }

    #[test]
    fn test_player_fallback_until_sprite_loads() {
        let s = session();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        let player_rects = canvas.fill_rects_after("#3498db");
        assert_eq!(player_rects, vec![(s.player.body.pos, s.player.body.size)]);

        let mut canvas = Recorder::default();
        canvas.loaded.insert(Sprite::Player);
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert!(canvas.cmds.contains(&Cmd::Sprite(Sprite::Player)));
        assert!(canvas.fill_rects_after("#3498db").is_empty());
    }

    #[test]
    fn test_health_bar_and_hud() {
        let mut s = session();
        s.player.health = 40;
        s.score = 2500;
        s.update_progression();

        let mut canvas = Recorder::default();
        let mut hud = HudRecorder::default();
        draw_frame(&mut canvas, &mut hud, &s);

        let bar = canvas.fill_rects_after("#2ecc71");
        assert_eq!(bar, vec![(HEALTH_BAR_POS, Vec2::new(80.0, 20.0))]);
        assert!((hud.health - 40.0).abs() < 1e-4);
        assert_eq!(hud.score, "Score: 2500");
        assert_eq!(hud.level, "Level: 3");
    }

    #[test]
    fn test_overlays() {
        let mut s = session();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert!(canvas.texts().is_empty());

        s.toggle_pause();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert_eq!(canvas.texts(), vec!["PAUSED"]);

        s.toggle_pause();
        s.score = 700;
        s.end_run();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert_eq!(
            canvas.texts(),
            vec!["GAME OVER", "Final score: 700", "Press R to restart"]
        );
    }

    #[test]
    fn test_hostile_shapes_and_armored_fallback() {
        let mut s = session();
        s.spawn_hostile_at(HostileKind::Normal, Vec2::new(10.0, 10.0));
        s.spawn_hostile_at(HostileKind::Fast, Vec2::new(60.0, 10.0));
        s.spawn_hostile_at(HostileKind::Boss, Vec2::new(100.0, 10.0));
        s.spawn_hostile_at(HostileKind::Armored, Vec2::new(300.0, 10.0));

        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        let polygons: Vec<usize> = canvas
            .cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Polygon(n) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(polygons, vec![4, 5, 5]);
        assert_eq!(canvas.fill_rects_after("#27ae60").len(), 2);
        assert_eq!(canvas.depth, 0);

        let mut canvas = Recorder::default();
        canvas.loaded.insert(Sprite::Armored);
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert!(canvas.cmds.contains(&Cmd::Sprite(Sprite::Armored)));
        assert!(canvas.fill_rects_after("#27ae60").is_empty());
    }

    #[test]
    fn test_projectile_trail_fades_in() {
        let mut s = session();
        s.projectiles.push(Projectile::new(400.0, 400.0, 0.0, 1));
        for _ in 0..3 {
            tick(&mut s, &TickInput::default());
        }

        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        let trail_colors: Vec<&str> = canvas
            .cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Fill(f) if f.starts_with("rgba(255, 80, 0") => Some(f.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(trail_colors.len(), 3);
        assert_eq!(trail_colors[0], "rgba(255, 80, 0, 0)");

        s.settings.trails = false;
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert!(
            !canvas
                .cmds
                .iter()
                .any(|c| matches!(c, Cmd::Fill(f) if f.starts_with("rgba(255")))
        );
    }

    #[test]
    fn test_particles_drawn_at_alpha() {
        let mut s = session();
        s.particles.push(Particle {
            pos: Vec2::new(5.0, 6.0),
            vel: Vec2::ZERO,
            radius: 3.0,
            alpha: 0.25,
        });
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &mut HudRecorder::default(), &s);
        assert!(canvas.cmds.contains(&Cmd::Alpha(0.25)));
        assert!(canvas.cmds.contains(&Cmd::Circle(Vec2::new(5.0, 6.0), 3.0)));
    }
}
