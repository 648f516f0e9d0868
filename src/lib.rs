//! dcta: deterministic composite trend analysis for a 49-number lottery.
//!
//! The crate consumes an in-memory, most-recent-first history of draws and
//! produces a structured recommendation: 18 candidate numbers plus derived
//! zodiac, wave, head and tail groups. A walk-forward backtesting kernel
//! continuously measures every scoring strategy against history and feeds a
//! rate-limited weight adapter. Everything is deterministic: identical
//! history and weight state yield an identical recommendation.
//!
//! The crate makes no claim of statistical validity over a random process;
//! its contract is reproducible derivation and continuous self-evaluation.

pub mod attributes;
pub mod backtest;
pub mod config;
pub mod engine;
pub mod error;
pub mod strategies;
pub mod types;
pub mod weights;

pub use attributes::{AttributeRegistry, Element, Wave, Zodiac};
pub use backtest::{BacktestReport, BacktestResult};
pub use config::{AppConfig, ConfigManager};
pub use engine::Engine;
pub use error::{DctaError, Result};
pub use types::{Candidate, Draw, Recommendation, RecommendationSource, ScoreMap};
pub use weights::{StrategyWeight, WeightStore};
