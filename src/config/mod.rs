pub mod traits;
pub mod scoring;
pub mod backtesting;
pub mod weights;
pub mod selection;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use scoring::ScoringConfig;
pub use backtesting::BacktestingConfig;
pub use weights::WeightConfig;
pub use selection::SelectionConfig;
