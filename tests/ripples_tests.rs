// Host-side tests for the ripple pool and pointer tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ripples {
    include!("../src/core/ripples.rs");
}

use constants::*;
use ripples::*;
use std::f32::consts::TAU;

fn live_sprite(opacity: f32) -> RippleSprite {
    RippleSprite {
        position: glam::Vec2::ZERO,
        rotation: 0.0,
        scale: START_SCALE,
        opacity,
        visible: true,
    }
}

#[test]
fn new_pool_is_fully_allocated_and_hidden() {
    let pool = RipplePool::new(42);
    assert_eq!(pool.len(), POOL_SIZE);
    assert_eq!(pool.cursor(), 0);
    assert_eq!(pool.visible_count(), 0);
    for s in pool.sprites() {
        assert!(!s.visible);
        assert!(s.rotation >= 0.0 && s.rotation < TAU, "rotation {}", s.rotation);
    }
}

#[test]
fn same_seed_gives_same_initial_rotations() {
    let a = RipplePool::new(7);
    let b = RipplePool::new(7);
    assert_eq!(a.sprites(), b.sprites());
}

#[test]
fn activation_cycles_through_pool_in_order() {
    let mut pool = RipplePool::new(1);
    for k in 0..(POOL_SIZE * 2 + 50) {
        let i = pool.activate_next(k as f32, -(k as f32));
        assert_eq!(i, k % POOL_SIZE);
    }
    // Wrapped after the last slot
    assert_eq!(pool.cursor(), 50);
}

#[test]
fn activation_resets_sprite_state() {
    let mut pool = RipplePool::new(3);
    let rotation_before = pool.get(0).unwrap().rotation;
    let i = pool.activate_next(12.0, -8.0);
    let s = pool.get(i).unwrap();
    assert!(s.visible);
    assert_eq!(s.position, glam::Vec2::new(12.0, -8.0));
    assert_eq!(s.scale, START_SCALE);
    assert_eq!(s.opacity, START_OPACITY);
    assert_eq!(s.rotation, rotation_before);
}

#[test]
fn reactivating_a_slot_restarts_its_fade() {
    let mut pool = RipplePool::new(3);
    pool.activate_next(0.0, 0.0);
    for _ in 0..10 {
        pool.decay_all();
    }
    for _ in 1..POOL_SIZE {
        pool.activate_next(1.0, 1.0);
    }
    assert_eq!(pool.activate_next(5.0, 5.0), 0);
    let s = pool.get(0).unwrap();
    assert_eq!(s.opacity, START_OPACITY);
    assert_eq!(s.scale, START_SCALE);
    assert_eq!(s.position, glam::Vec2::new(5.0, 5.0));
}

#[test]
fn one_activation_per_qualifying_frame() {
    let mut pool = RipplePool::new(9);
    let mut tracker = PointerTracker::default();
    for frame in 1..=(POOL_SIZE + 20) {
        tracker.set(frame as f32 * 5.0, 0.0);
        let p = tracker.sample().expect("moved 5 units");
        let i = pool.activate_next(p.x, p.y);
        assert_eq!(i, (frame - 1) % POOL_SIZE);
    }
}

#[test]
fn small_moves_do_not_activate_or_touch_pool() {
    let mut pool = RipplePool::new(11);
    pool.activate_next(0.0, 0.0);
    let before = pool.sprites().to_vec();
    let cursor = pool.cursor();

    let mut tracker = PointerTracker::default();
    tracker.set(3.9, -3.9);
    if let Some(p) = tracker.sample() {
        pool.activate_next(p.x, p.y);
    }
    assert_eq!(pool.sprites(), &before[..]);
    assert_eq!(pool.cursor(), cursor);
}

#[test]
fn threshold_compares_against_previous_frame_only() {
    let mut tracker = PointerTracker::default();
    // Slow drift: each frame moves 3 units, never enough
    for k in 1..20 {
        tracker.set(k as f32 * 3.0, 0.0);
        assert!(tracker.sample().is_none());
    }
    // Holding still never activates
    assert!(tracker.sample().is_none());
}

#[test]
fn threshold_is_inclusive_on_either_axis() {
    let mut tracker = PointerTracker::default();
    tracker.set(0.0, ACTIVATION_THRESHOLD);
    assert_eq!(tracker.sample(), Some(glam::Vec2::new(0.0, 4.0)));
    tracker.set(-ACTIVATION_THRESHOLD, ACTIVATION_THRESHOLD);
    assert!(tracker.sample().is_some());
}

#[test]
fn opacity_strictly_decreases_until_hidden() {
    let mut s = live_sprite(START_OPACITY);
    let mut frames = 0;
    while s.visible {
        let prev = s.opacity;
        s.decay();
        frames += 1;
        assert!(s.opacity < prev);
        assert!(frames < 1000, "never faded");
    }
    // 0.5 * 0.96^n first drops below 0.002 at n = 136
    assert_eq!(frames, 136);
    assert!(s.opacity < OPACITY_EPSILON);
}

#[test]
fn hidden_sprites_stay_hidden_and_frozen() {
    let mut s = live_sprite(OPACITY_EPSILON * 1.01);
    s.decay();
    assert!(!s.visible);
    let frozen = s;
    for _ in 0..50 {
        s.decay();
    }
    assert_eq!(s, frozen);
}

#[test]
fn scale_converges_monotonically_to_steady_state() {
    let target = steady_state_scale();
    assert!((target - 6.0).abs() < 1e-3);

    let mut s = live_sprite(1.0);
    let mut prev_scale = s.scale;
    let mut prev_gap = (target - s.scale).abs();
    let mut frames = 0;
    while s.visible {
        s.decay();
        frames += 1;
        assert!(s.scale > prev_scale);
        assert!(s.scale < target);
        let gap = (target - s.scale).abs();
        assert!(gap < prev_gap);
        prev_scale = s.scale;
        prev_gap = gap;
    }
    assert!(frames > 140);
    assert!(prev_gap < 0.5, "gap after {} frames: {}", frames, prev_gap);
}

#[test]
fn rotation_advances_by_fixed_step() {
    let mut s = live_sprite(START_OPACITY);
    for k in 1..=10 {
        s.decay();
        assert!((s.rotation - ROTATION_STEP * k as f32).abs() < 1e-5);
    }
}

#[test]
fn decay_all_only_touches_visible_sprites() {
    let mut pool = RipplePool::new(5);
    pool.activate_next(1.0, 2.0);
    let idle = *pool.get(1).unwrap();
    pool.decay_all();
    assert_eq!(*pool.get(1).unwrap(), idle);
    let live = pool.get(0).unwrap();
    assert!((live.opacity - START_OPACITY * OPACITY_DECAY).abs() < 1e-6);
    assert_eq!(pool.visible_count(), 1);
}
