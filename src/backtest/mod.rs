//! Walk-forward backtesting of the strategy pipeline over recorded history.

pub mod kernel;
pub mod report;

pub use kernel::BacktestKernel;
pub use report::{BacktestReport, BacktestResult, StrategyAccuracy};
