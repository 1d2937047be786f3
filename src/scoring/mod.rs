//! Metric-to-scorer adaptation
//!
//! Turns a metric specification (registered name or custom metric) plus an
//! optimization direction into a [`Scorer`] that a model-selection loop can
//! call as `(model, X, y_true[, sample_weights]) -> score`.
//!
//! ## Example
//!
//! ```ignore
//! use hyperfs::scoring::{Direction, ResponseMethod, ScorerFactory};
//!
//! let factory = ScorerFactory::default();
//! let scorer = factory.create_scorer(
//!     "neg_mean_squared_error".into(),
//!     Direction::Minimize,
//!     ResponseMethod::Predict,
//! )?;
//! // -MSE: larger is better
//! let score = scorer.score(&model, x.view(), &y)?;
//! ```

mod config;
mod custom;
mod direction;
mod estimator;
mod factory;
mod response;
mod scorer;


pub use config::ScorerConfig;
pub use custom::{CustomMetric, MetricFn, REQUIRED_PARAMETERS};
pub use direction::Direction;
pub use estimator::Estimator;
pub use factory::{create_scorer, MetricArg, MetricSpec, ScorerFactory};
pub use response::ResponseMethod;
pub use scorer::{MetricScorer, Scorer};
