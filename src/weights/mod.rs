//! Adaptive strategy-weight state: the committed vector, its rolling
//! accuracy bookkeeping, and the rate-limited adjustment pass.

pub mod store;
pub mod adapter;

pub use adapter::{AdjustmentOutcome, WeightAction, WeightAdapter, WeightChange};
pub use store::{StrategyWeight, WeightSnapshot, WeightStore};
