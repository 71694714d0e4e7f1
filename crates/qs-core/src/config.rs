//! Mod settings.
//!
//! Persistence lives in the `qs-config` crate; this is the plain data record
//! plus range sanitizing.

use serde::{Deserialize, Serialize};

/// Damage threshold used when the config file carries no valid value.
pub const DEFAULT_DAMAGE_THRESHOLD: f32 = 1.0;

/// Settings record persisted as a small JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Auto-equip armor when the player takes sufficient damage.
    pub equip_on_damage: bool,
    /// Minimum damage (exclusive) that triggers the auto-equip.
    pub damage_threshold: f32,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            equip_on_damage: true,
            damage_threshold: DEFAULT_DAMAGE_THRESHOLD,
        }
    }
}

impl ModConfig {
    /// Clamp out-of-range values back to defaults. A threshold read from a
    /// hand-edited file may be negative, NaN or infinite.
    pub fn sanitized(mut self) -> Self {
        if !self.damage_threshold.is_finite() || self.damage_threshold < 0.0 {
            self.damage_threshold = DEFAULT_DAMAGE_THRESHOLD;
        }
        self
    }
}
