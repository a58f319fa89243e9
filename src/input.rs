use crate::constants::{
    PARTICLE_BASE_DURATION_SEC, PARTICLE_COUNT, PARTICLE_DELAY_STEP_SEC,
    PARTICLE_DURATION_STEP_SEC, PARTICLE_LEFT_STRIDE, PARTICLE_SHIFT_BASE, PARTICLE_SHIFT_STEP,
    PARTICLE_TOP_STRIDE,
};
use glam::Vec2;

/// Static placement of one floating background particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLayout {
    pub left_pct: usize,
    pub top_pct: usize,
    pub duration_sec: f32,
    pub delay_sec: f32,
    /// Index into the three particle gradients.
    pub palette: usize,
}

#[inline]
pub fn particle_layout(i: usize) -> ParticleLayout {
    ParticleLayout {
        left_pct: (i * PARTICLE_LEFT_STRIDE) % 100,
        top_pct: (i * PARTICLE_TOP_STRIDE) % 100,
        duration_sec: PARTICLE_BASE_DURATION_SEC + (i % 4) as f32 * PARTICLE_DURATION_STEP_SEC,
        delay_sec: i as f32 * PARTICLE_DELAY_STEP_SEC,
        palette: i % 3,
    }
}

pub fn particle_layouts() -> impl Iterator<Item = ParticleLayout> {
    (0..PARTICLE_COUNT).map(particle_layout)
}

/// Vertical drift factor of particle `i`; deeper particles move faster.
#[inline]
pub fn particle_shift(i: usize) -> f64 {
    PARTICLE_SHIFT_BASE + i as f64 * PARTICLE_SHIFT_STEP
}

/// CSS transform for a parallax layer at the given scroll offset.
pub fn parallax_transform(scroll_y: f64, shift: f64, rotate_deg: f64) -> String {
    let dy = scroll_y * shift;
    let rot = scroll_y * rotate_deg;
    if rot == 0.0 {
        format!("translateY({:.1}px)", dy)
    } else {
        format!("translateY({:.1}px) rotate({:.2}deg)", dy, rot)
    }
}

// ---------------- Pointer helpers ----------------
/// Pointer position as a fraction of the viewport, clamped to [0, 1].
/// Falls back to the centre when the viewport has no area.
#[inline]
pub fn pointer_viewport_uv(pointer: Vec2, viewport: Vec2) -> [f32; 2] {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        let uv = (pointer / viewport).clamp(Vec2::ZERO, Vec2::ONE);
        [uv.x, uv.y]
    } else {
        [0.5, 0.5]
    }
}

/// `--pointer-x` / `--pointer-y` values in percent.
#[inline]
pub fn pointer_glow_percent(pointer: Vec2, viewport: Vec2) -> (String, String) {
    let [u, v] = pointer_viewport_uv(pointer, viewport);
    (format!("{:.1}%", u * 100.0), format!("{:.1}%", v * 100.0))
}
