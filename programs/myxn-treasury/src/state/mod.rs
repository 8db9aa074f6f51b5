pub mod fee_ledger;
pub mod participant;
pub mod schedule_state;
pub mod treasury_config;

pub use fee_ledger::*;
pub use participant::*;
pub use schedule_state::*;
pub use treasury_config::*;
