mod engine;
mod error;
mod mortgage;
mod scenario;
mod types;

pub use engine::{project, summarize};
pub use error::ScenarioError;
pub use mortgage::compute_monthly_payment;
pub use scenario::{MAX_BEDROOMS, MAX_TIMEFRAME_YEARS};
pub use types::{ProjectionSummary, ScenarioField, ScenarioInputs, YearSnapshot};
