//! Inventory ledger: gold, powers and owned cards for both actors.

pub mod ledger;

pub use ledger::{assign_powers, Inventory, Ledger, OwnedCard, Power};
