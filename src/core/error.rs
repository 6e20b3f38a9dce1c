use thiserror::Error;

/// A scenario that falls outside the range the calculator accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("propertyPrice must be a finite amount >= 0, got {0}")]
    PropertyPrice(f64),
    #[error("deposit must be between 0 and propertyPrice ({price}), got {deposit}")]
    Deposit { deposit: f64, price: f64 },
    #[error("mortgageRate must be between 0 and 100, got {0}")]
    MortgageRate(f64),
    #[error("{field} must be a finite rate > -100, got {value}")]
    GrowthRate { field: &'static str, value: f64 },
    #[error("{field} must be a finite monthly amount >= 0, got {value}")]
    MonthlyAmount { field: &'static str, value: f64 },
    #[error("numBedrooms must be between 1 and {max}, got {value}")]
    NumBedrooms { value: u32, max: u32 },
    #[error("timeframe must be between 1 and {max} years, got {value}")]
    Timeframe { value: i32, max: i32 },
    #[error("mortgageLength must be between 1 and timeframe ({timeframe}), got {value}")]
    MortgageLength { value: i32, timeframe: i32 },
    #[error("unknown scenario field: {0}")]
    UnknownField(String),
}
