//! Toggle operations.

pub mod keybindings;
pub mod light;
pub mod swap;

use crate::lang::MessageId;

/// Result of executing a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// At least one stack moved.
    Success,
    /// Nothing needed to move, or the host refused every transfer; callers
    /// cannot tell the two apart.
    NoChange,
    /// Expected miss, surfaced to the player as a chat line.
    Failed(MessageId),
}
