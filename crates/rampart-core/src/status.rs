//! Per-enemy status effect state: bleed, slow, stun.
//!
//! Stacking rules: strongest value wins, longest remaining duration wins.
//! Timers decay monotonically toward zero; on expiry the effect resets to
//! neutral (bleed_dps -> 0, slow_factor -> 1).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusState {
    /// Bleed damage per second (>= 0).
    pub bleed_dps: f64,
    /// Seconds of bleed remaining.
    pub bleed_secs: f64,
    /// Speed multiplier in (0, 1]; 1 = unaffected.
    pub slow_factor: f64,
    /// Seconds of slow remaining.
    pub slow_secs: f64,
    /// Seconds of stun remaining.
    pub stun_secs: f64,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            bleed_dps: 0.0,
            bleed_secs: 0.0,
            slow_factor: 1.0,
            slow_secs: 0.0,
            stun_secs: 0.0,
        }
    }
}

impl StatusState {
    /// Strongest dps wins, longest remaining duration wins.
    pub fn apply_bleed(&mut self, dps: f64, secs: f64) {
        self.bleed_dps = self.bleed_dps.max(dps);
        self.bleed_secs = self.bleed_secs.max(secs);
    }

    /// Stronger slow (smaller factor) wins, longest duration wins.
    pub fn apply_slow(&mut self, factor: f64, secs: f64) {
        self.slow_factor = self.slow_factor.min(factor.clamp(f64::MIN_POSITIVE, 1.0));
        self.slow_secs = self.slow_secs.max(secs);
    }

    pub fn apply_stun(&mut self, secs: f64) {
        self.stun_secs = self.stun_secs.max(secs);
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_secs > 0.0
    }

    pub fn is_slowed(&self) -> bool {
        self.slow_secs > 0.0 && self.slow_factor < 1.0
    }

    pub fn is_bleeding(&self) -> bool {
        self.bleed_secs > 0.0 && self.bleed_dps > 0.0
    }

    /// Decay all timers by `dt` and return the bleed damage accrued this
    /// tick. Bleed and slow keep running while stunned; the stun timer
    /// itself also decays here.
    pub fn decay(&mut self, dt: f64) -> f64 {
        let bleed_damage = if self.is_bleeding() {
            // Bleed only for the time it was actually active this tick.
            self.bleed_dps * dt.min(self.bleed_secs)
        } else {
            0.0
        };

        self.bleed_secs = (self.bleed_secs - dt).max(0.0);
        if self.bleed_secs == 0.0 {
            self.bleed_dps = 0.0;
        }

        self.slow_secs = (self.slow_secs - dt).max(0.0);
        if self.slow_secs == 0.0 {
            self.slow_factor = 1.0;
        }

        self.stun_secs = (self.stun_secs - dt).max(0.0);

        bleed_damage
    }
}
