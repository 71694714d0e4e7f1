//! Item stacks and wearable classification.

use strum::{Display, EnumIter, EnumString};

/// Item code of the night-vision headpiece.
///
/// The device is wearable on the head but is never picked up by the armor
/// search; only the accessory toggle moves it.
pub const NIGHT_VISION_CODE: &str = "nightvisiondevice";

/// Body location a wearable item covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DressType {
    Head,
    Body,
    Legs,
}

/// Coarse item classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ItemClass {
    #[default]
    Misc,
    Armor,
    Lantern,
    Torch,
}

impl ItemClass {
    /// Hand-light classes, in the order the accessory toggle searches them.
    pub const LIGHT_CLASSES: [ItemClass; 2] = [ItemClass::Lantern, ItemClass::Torch];

    /// Check if items of this class can be held as a light source.
    pub const fn is_light(&self) -> bool {
        matches!(self, ItemClass::Lantern | ItemClass::Torch)
    }
}

/// A stack of identical items occupying a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    /// Item code, e.g. `"plate-helmet"`.
    pub code: String,
    /// Coarse classification.
    pub class: ItemClass,
    /// Body location this item can be worn at, if wearable.
    pub dress: Option<DressType>,
    /// Number of items in the stack.
    pub quantity: u32,
}

impl ItemStack {
    /// Create a single-item stack with no wear location.
    pub fn new(code: impl Into<String>, class: ItemClass) -> Self {
        Self {
            code: code.into(),
            class,
            dress: None,
            quantity: 1,
        }
    }

    /// Create an armor piece for the given body location.
    pub fn armor(code: impl Into<String>, dress: DressType) -> Self {
        Self {
            code: code.into(),
            class: ItemClass::Armor,
            dress: Some(dress),
            quantity: 1,
        }
    }

    /// Create the night-vision headpiece.
    pub fn night_vision() -> Self {
        Self::armor(NIGHT_VISION_CODE, DressType::Head)
    }

    /// Check if this stack is wearable at the given body location.
    pub fn is_dress_type(&self, dress: DressType) -> bool {
        self.dress == Some(dress)
    }

    /// Check if this stack is the night-vision headpiece.
    pub fn is_night_vision(&self) -> bool {
        self.code == NIGHT_VISION_CODE
    }

    /// Check if another stack can merge into this one.
    pub fn can_merge(&self, other: &ItemStack) -> bool {
        self.code == other.code && self.class == other.class && self.dress == other.dress
    }

    /// Merge another stack into this one.
    pub fn merge(&mut self, other: ItemStack) {
        self.quantity += other.quantity;
    }
}
