pub mod initialize_treasury;
pub mod initialize_schedule;
pub mod register_participant;
pub mod deposit_tokens;
pub mod claim_vested;
pub mod emit_vesting_quote;
pub mod record_fee_collection;
pub mod preview_distribution;
pub mod distribute_fees;
pub mod execute_monthly_burn;
pub mod update_fee_buckets;
pub mod set_distributor;
pub mod pause;
pub mod unpause;

pub use initialize_treasury::*;
pub use initialize_schedule::*;
pub use register_participant::*;
pub use deposit_tokens::*;
pub use claim_vested::*;
pub use emit_vesting_quote::*;
pub use record_fee_collection::*;
pub use preview_distribution::*;
pub use distribute_fees::*;
pub use execute_monthly_burn::*;
pub use update_fee_buckets::*;
pub use set_distributor::*;
pub use pause::*;
pub use unpause::*;
