//! Damage reaction monitor.

use crate::config::ModConfig;

/// Name of the watched entity attribute carrying damage notifications.
pub const HURT_ATTRIBUTE: &str = "onHurt";

/// Decides whether a damage notification should trigger the auto-equip.
///
/// The host may deliver the same notification more than once per actual
/// event; notifications carry a monotonically increasing counter, and a
/// counter value already seen is ignored. The first observation after
/// startup is acted on: counter values are host-scoped, so there is no
/// "previous" value to compare against.
#[derive(Debug, Clone, Copy, Default)]
pub struct HurtMonitor {
    last_counter: Option<u64>,
}

impl HurtMonitor {
    pub fn new() -> Self {
        HurtMonitor::default()
    }

    /// Record a notification. Returns `true` when the auto-equip should run:
    /// the counter is new, the feature is enabled and the damage is strictly
    /// above the configured threshold.
    pub fn observe(&mut self, counter: u64, damage: f32, config: &ModConfig) -> bool {
        if self.last_counter == Some(counter) {
            return false;
        }
        self.last_counter = Some(counter);
        config.equip_on_damage && damage > config.damage_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, threshold: f32) -> ModConfig {
        ModConfig {
            equip_on_damage: enabled,
            damage_threshold: threshold,
        }
    }

    #[test]
    fn test_fires_once_per_counter() {
        let mut monitor = HurtMonitor::new();
        let cfg = config(true, 1.0);
        assert!(monitor.observe(5, 2.0, &cfg));
        assert!(!monitor.observe(5, 2.0, &cfg));
        assert!(monitor.observe(6, 2.0, &cfg));
    }

    #[test]
    fn test_first_observation_fires() {
        let mut monitor = HurtMonitor::new();
        assert!(monitor.observe(0, 2.0, &config(true, 1.0)));
    }

    #[test]
    fn test_disabled_never_fires() {
        let mut monitor = HurtMonitor::new();
        let cfg = config(false, 1.0);
        assert!(!monitor.observe(1, 100.0, &cfg));
        assert!(!monitor.observe(2, 100.0, &cfg));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut monitor = HurtMonitor::new();
        let cfg = config(true, 1.0);
        assert!(!monitor.observe(1, 0.5, &cfg));
        assert!(!monitor.observe(2, 1.0, &cfg));
        assert!(monitor.observe(3, 1.0001, &cfg));
    }

    #[test]
    fn test_suppressed_counter_still_consumes_dedup_slot() {
        // A below-threshold notification for counter N must not let a
        // duplicate delivery of N fire later.
        let mut monitor = HurtMonitor::new();
        let cfg = config(true, 1.0);
        assert!(!monitor.observe(7, 0.1, &cfg));
        assert!(!monitor.observe(7, 5.0, &cfg));
    }
}
