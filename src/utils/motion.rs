//! Closed-form motion helpers for the loading spinner and result card reveal.
//! All functions are stateless; inputs outside their nominal range are clamped.

use std::f32::consts::TAU;

/// Cubic ease-out on `t` in 0..=1.
pub fn inertia_easing(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Hermite interpolation between `edge0` and `edge1`.
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    if (edge1 - edge0).abs() <= f32::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Moves `current` a fraction `strength` of the way to `target`.
pub fn magnetic_snap(current: f32, target: f32, strength: f32) -> f32 {
    current + (target - current) * strength.clamp(0.0, 1.0)
}

/// Position on a flattened circular path (x, y) for phase `time * speed + offset`.
pub fn orbital_motion(time: f32, radius: f32, speed: f32, offset: f32) -> (f32, f32) {
    let angle = time * speed + offset;
    (angle.cos() * radius, angle.sin() * radius * 0.3)
}

/// Evenly spaced phase offsets for `count` bodies on one orbit.
pub fn orbit_offsets(count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| TAU * i as f32 / count.max(1) as f32)
}

/// Eased reveal progress of the `index`-th card, `stagger` seconds apart,
/// each taking `duration` seconds.
pub fn staggered_reveal(elapsed: f32, index: usize, stagger: f32, duration: f32) -> f32 {
    let start = index as f32 * stagger;
    if duration <= 0.0 {
        return if elapsed >= start { 1.0 } else { 0.0 };
    }
    inertia_easing((elapsed - start) / duration)
}

/// First visible entry of a looping ticker of `len` entries that advances one
/// entry every `step` seconds.
pub fn ticker_offset(elapsed: f32, step: f32, len: usize) -> usize {
    if len == 0 || step <= 0.0 || !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    (elapsed / step) as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn easing_endpoints() {
        assert!(approx_eq(inertia_easing(0.0), 0.0));
        assert!(approx_eq(inertia_easing(1.0), 1.0));
        assert!(approx_eq(inertia_easing(2.0), 1.0));
        assert!(approx_eq(inertia_easing(0.5), 0.875));
    }

    #[test]
    fn smooth_step_clamps_and_handles_flat_edges() {
        assert!(approx_eq(smooth_step(0.0, 1.0, -1.0), 0.0));
        assert!(approx_eq(smooth_step(0.0, 1.0, 0.5), 0.5));
        assert!(approx_eq(smooth_step(0.0, 1.0, 3.0), 1.0));
        assert!(approx_eq(smooth_step(1.0, 1.0, 1.0), 1.0));
    }

    #[test]
    fn magnetic_snap_moves_toward_target() {
        assert!(approx_eq(magnetic_snap(0.0, 10.0, 0.1), 1.0));
        assert!(approx_eq(magnetic_snap(0.0, 10.0, 5.0), 10.0));
    }

    #[test]
    fn orbit_is_flattened() {
        let (x, y) = orbital_motion(0.0, 10.0, 1.0, 0.0);
        assert!(approx_eq(x, 10.0) && approx_eq(y, 0.0));
        let (x, y) = orbital_motion(std::f32::consts::FRAC_PI_2, 10.0, 1.0, 0.0);
        assert!(x.abs() < 1e-4 && approx_eq(y, 3.0));
        assert_eq!(orbit_offsets(3).count(), 3);
    }

    #[test]
    fn later_cards_reveal_later() {
        assert!(approx_eq(staggered_reveal(0.0, 0, 0.1, 0.4), 0.0));
        assert!(staggered_reveal(0.2, 0, 0.1, 0.4) > staggered_reveal(0.2, 1, 0.1, 0.4));
        assert!(approx_eq(staggered_reveal(10.0, 3, 0.1, 0.4), 1.0));
        assert!(approx_eq(staggered_reveal(0.05, 1, 0.1, 0.0), 0.0));
    }

    #[test]
    fn ticker_offset_loops() {
        assert_eq!(ticker_offset(0.0, 3.0, 5), 0);
        assert_eq!(ticker_offset(2.9, 3.0, 5), 0);
        assert_eq!(ticker_offset(3.0, 3.0, 5), 1);
        assert_eq!(ticker_offset(15.5, 3.0, 5), 0);
        assert_eq!(ticker_offset(10.0, 3.0, 0), 0);
        assert_eq!(ticker_offset(10.0, 0.0, 5), 0);
    }
}
