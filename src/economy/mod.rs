//! Item economy: what items cost, what they yield, and how owned
//! quantities change.

pub mod catalogue;
pub mod farm;
pub mod formula;
pub mod item;
pub mod ledger;
pub mod sink;
pub mod unlocks;

pub use catalogue::{
    CatalogueEntry, CatalogueError, GeometricParams, Image, ItemDefinition, Pricing, Schedule,
};
pub use farm::{FarmDefinition, FarmItem};
pub use item::Item;
pub use ledger::Ledger;
pub use sink::{ClickerSlot, ItemSink, Keyed, NotifyPolicy, UnlockedItems};
pub use unlocks::{Unlock, UnlockSchedule};
