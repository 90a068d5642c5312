//! Decorative emoji burst.
//!
//! Every processed button click spawns a transient glyph that drifts
//! upward from the button and removes itself after a fixed delay. The
//! effect layer observes clicks after the engine has handled them and
//! never feeds back into it, so calculator correctness does not depend
//! on anything here.

use std::time::{Duration, Instant};

use lazy_static::lazy_static;

/// Rows a glyph rises over its lifetime.
const RISE_STEPS: u32 = 4;

lazy_static! {
    /// Glyphs cycled through by successive bursts.
    static ref PALETTE: Vec<&'static str> = [
        "joy", "rofl", "fire", "rocket", "sparkles", "sunglasses", "+1",
        "skull", "boom", "pizza", "beer", "tada",
    ]
    .iter()
    .filter_map(|code| emojis::get_by_shortcode(code))
    .map(|emoji| emoji.as_str())
    .collect();
}

/// One live glyph.
#[derive(Clone, Debug)]
struct Effect {
    glyph: &'static str,
    origin: (u16, u16),
    spawned: Instant,
}

impl Effect {
    /// Current position: the glyph rises one row per lifetime quarter.
    fn position(&self, lifetime: Duration) -> (u16, u16) {
        let step = lifetime / RISE_STEPS;
        let risen = if step.is_zero() {
            RISE_STEPS
        } else {
            (self.spawned.elapsed().as_millis() / step.as_millis().max(1)) as u32
        };
        (self.origin.0, self.origin.1.saturating_sub(risen as u16))
    }
}

/// Live glyphs plus spawn bookkeeping.
#[derive(Debug)]
pub struct EffectsState {
    active: Vec<Effect>,
    lifetime: Duration,
    enabled: bool,
    next_glyph: usize,
}

impl EffectsState {
    pub fn new(enabled: bool, lifetime: Duration) -> Self {
        Self {
            active: Vec::new(),
            lifetime,
            enabled,
            next_glyph: 0,
        }
    }

    /// Spawn a glyph anchored at a button cell. No-op when disabled.
    pub fn spawn(&mut self, origin: (u16, u16)) {
        if !self.enabled || PALETTE.is_empty() {
            return;
        }
        let glyph = PALETTE[self.next_glyph % PALETTE.len()];
        self.next_glyph = self.next_glyph.wrapping_add(1);
        self.active.push(Effect {
            glyph,
            origin,
            spawned: Instant::now(),
        });
    }

    /// Drop glyphs past their lifetime.
    pub fn sweep(&mut self) {
        let lifetime = self.lifetime;
        self.active.retain(|effect| effect.spawned.elapsed() < lifetime);
    }

    /// The next instant a glyph moves or expires, if any are live.
    ///
    /// The main loop waits with this deadline instead of polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        let step = (self.lifetime / RISE_STEPS).max(Duration::from_millis(1));
        self.active
            .iter()
            .map(|effect| {
                let elapsed = effect.spawned.elapsed();
                let steps_done = (elapsed.as_millis() / step.as_millis()) as u32;
                let next_move = effect.spawned + step * (steps_done + 1);
                next_move.min(effect.spawned + self.lifetime)
            })
            .min()
    }

    /// Glyphs and their current positions, for the renderer.
    pub fn glyphs(&self) -> impl Iterator<Item = (&'static str, (u16, u16))> + '_ {
        let lifetime = self.lifetime;
        self.active
            .iter()
            .map(move |effect| (effect.glyph, effect.position(lifetime)))
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_resolves() {
        assert!(!PALETTE.is_empty());
        assert!(PALETTE.contains(&"🚀"));
        assert!(PALETTE.contains(&"🎉"));
    }

    #[test]
    fn test_spawn_and_sweep() {
        let mut effects = EffectsState::new(true, Duration::from_millis(200));
        effects.spawn((10, 6));
        assert!(!effects.is_empty());
        assert!(effects.next_deadline().is_some());

        // Nothing has expired yet.
        effects.sweep();
        assert!(!effects.is_empty());
    }

    #[test]
    fn test_expired_glyphs_removed() {
        let mut effects = EffectsState::new(true, Duration::ZERO);
        effects.spawn((10, 6));
        effects.sweep();
        assert!(effects.is_empty());
        assert_eq!(effects.next_deadline(), None);
    }

    #[test]
    fn test_disabled_spawns_nothing() {
        let mut effects = EffectsState::new(false, Duration::from_millis(200));
        effects.spawn((10, 6));
        assert!(effects.is_empty());
        assert_eq!(effects.next_deadline(), None);
    }

    #[test]
    fn test_glyphs_cycle_through_palette() {
        let mut effects = EffectsState::new(true, Duration::from_secs(10));
        effects.spawn((1, 5));
        effects.spawn((2, 5));
        let glyphs: Vec<_> = effects.glyphs().map(|(glyph, _)| glyph).collect();
        assert_eq!(glyphs.len(), 2);
        assert_ne!(glyphs[0], glyphs[1]);
    }

    #[test]
    fn test_fresh_glyph_sits_at_origin() {
        let mut effects = EffectsState::new(true, Duration::from_secs(10));
        effects.spawn((7, 9));
        let (_, position) = effects.glyphs().next().unwrap();
        assert_eq!(position, (7, 9));
    }
}
