//! Demo inventories and the simulated damage source.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use qs_core::host::InMemoryClient;
use qs_core::inventory::{Inventory, InventoryId, InventorySet, Slot};
use qs_core::item::{DressType, ItemClass, ItemStack};

/// A freshly spawned player: empty armor slots, a full set of plate plus
/// both light sources in the pack.
pub fn demo_client() -> InMemoryClient {
    let mut set = InventorySet::new();
    set.insert(Inventory::new(
        InventoryId::Character,
        vec![
            Slot::armor(DressType::Head),
            Slot::armor(DressType::Body),
            Slot::armor(DressType::Legs),
            Slot::plain(),
            Slot::plain(),
        ],
    ));
    set.insert(Inventory::new(
        InventoryId::Hotbar,
        vec![
            Slot::plain(),
            Slot::plain(),
            Slot::plain(),
            Slot::plain(),
            Slot::offhand(),
        ],
    ));
    set.insert(Inventory::new(
        InventoryId::Backpack,
        vec![
            Slot::holding(ItemStack::armor("plate-helmet", DressType::Head)),
            Slot::holding(ItemStack::armor("plate-cuirass", DressType::Body)),
            Slot::holding(ItemStack::armor("plate-greaves", DressType::Legs)),
            Slot::holding(ItemStack::new("lantern", ItemClass::Lantern)),
            Slot::holding(ItemStack::new("torch", ItemClass::Torch)),
            Slot::holding(ItemStack::night_vision()),
            Slot::plain(),
            Slot::plain(),
        ],
    ));
    InMemoryClient::new(set)
}

/// Rolls simulated damage notifications with a monotonically increasing
/// event counter, the way the host delivers them.
#[derive(Debug)]
pub struct DamageRoller {
    rng: ChaCha8Rng,
    last: Option<(u64, f32)>,
}

impl DamageRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            last: None,
        }
    }

    /// The next damage event: (counter, damage).
    pub fn next_event(&mut self) -> (u64, f32) {
        let counter = self.last.map(|(c, _)| c).unwrap_or(0) + 1;
        let event = (counter, self.rng.gen_range(0.25..4.0));
        self.last = Some(event);
        event
    }

    /// The previous event unchanged, as a duplicated host notification
    /// would deliver it.
    pub fn repeat_event(&self) -> Option<(u64, f32)> {
        self.last
    }
}
