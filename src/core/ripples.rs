use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One brush decal in the displacement scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSprite {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl RippleSprite {
    fn hidden(rotation: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            rotation,
            scale: START_SCALE,
            opacity: 0.0,
            visible: false,
        }
    }

    /// Advance one frame of grow-and-fade. No-op for hidden sprites.
    #[inline]
    pub fn decay(&mut self) {
        if !self.visible {
            return;
        }
        self.rotation += ROTATION_STEP;
        self.opacity *= OPACITY_DECAY;
        self.scale = SCALE_DECAY * self.scale + SCALE_GROWTH;
        if self.opacity < OPACITY_EPSILON {
            self.visible = false;
        }
    }
}

/// Fixed ring of sprites recycled by a cursor.
///
/// Slots are allocated once in `new`; activation overwrites the slot under the
/// cursor and advances it, wrapping at `POOL_SIZE`.
pub struct RipplePool {
    sprites: Vec<RippleSprite>,
    cursor: usize,
}

impl RipplePool {
    /// Build the pool with a random starting rotation per slot, derived from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sprites = (0..POOL_SIZE)
            .map(|_| RippleSprite::hidden(rng.gen::<f32>() * TAU))
            .collect::<Vec<_>>();
        Self { sprites, cursor: 0 }
    }

    /// Place the next sprite in ring order at `(x, y)` and return its index.
    pub fn activate_next(&mut self, x: f32, y: f32) -> usize {
        let index = self.cursor;
        let s = &mut self.sprites[index];
        s.position = Vec2::new(x, y);
        s.scale = START_SCALE;
        s.opacity = START_OPACITY;
        s.visible = true;
        self.cursor = (self.cursor + 1) % self.sprites.len();
        index
    }

    pub fn decay_all(&mut self) {
        for s in self.sprites.iter_mut().filter(|s| s.visible) {
            s.decay();
        }
    }

    /// Index the next activation will use.
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&RippleSprite> {
        self.sprites.get(index)
    }

    #[cfg(test)]
    pub fn sprites(&self) -> &[RippleSprite] {
        &self.sprites
    }

    pub fn visible(&self) -> impl Iterator<Item = &RippleSprite> + '_ {
        self.sprites.iter().filter(|s| s.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}

/// Pointer samples in view-centred coordinates (origin at the viewport
/// centre, +y up, CSS px).
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub current: Vec2,
    pub previous: Vec2,
}

impl PointerTracker {
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.current = Vec2::new(x, y);
    }

    /// Compare against last frame's sample and roll it forward.
    ///
    /// Returns the position to spawn a ripple at when the pointer travelled at
    /// least `ACTIVATION_THRESHOLD` on either axis.
    pub fn sample(&mut self) -> Option<Vec2> {
        let d = (self.current - self.previous).abs();
        let moved = d.x >= ACTIVATION_THRESHOLD || d.y >= ACTIVATION_THRESHOLD;
        self.previous = self.current;
        moved.then_some(self.current)
    }
}
