use serde::Serialize;

/// Parameters for one rent-versus-buy projection.
///
/// Currency amounts share a single unit; rates are annual percentages
/// (`4.5` means 4.5%, not `0.045`). The engine does not validate these,
/// see [`ScenarioInputs::validate`] for the caller-side checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    pub property_price: f64,
    pub deposit: f64,
    pub mortgage_rate: f64,
    pub mortgage_length: i32,
    pub property_appreciation_rate: f64,
    pub monthly_rent: f64,
    pub rent_increase_rate: f64,
    pub council_tax: f64,
    pub maintenance_costs: f64,
    pub num_bedrooms: u32,
    /// Monthly income from letting spare rooms; ignored with a single bedroom.
    pub room_rental_income: f64,
    pub timeframe: i32,
}

/// One year of the projection. Currency figures are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    pub year: u32,
    #[serde(rename = "buyingCost")]
    pub cumulative_buying_cost: i64,
    #[serde(rename = "rentingCost")]
    pub cumulative_renting_cost: i64,
    pub net_buying_position: i64,
    pub property_value: i64,
    #[serde(rename = "remainingMortgage")]
    pub remaining_mortgage_balance: i64,
    #[serde(rename = "totalInterestPaid")]
    pub cumulative_interest_paid: i64,
    pub yearly_interest_paid: i64,
    pub yearly_principal_paid: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub timeframe: i32,
    pub total_renting_cost: i64,
    pub total_buying_cost: i64,
    pub final_property_value: i64,
    pub net_buying_position: i64,
    pub total_interest_paid: i64,
    pub initial_monthly_mortgage: i64,
    pub initial_monthly_rent: f64,
    pub loan_amount: i64,
    pub loan_to_value_percent: Option<f64>,
}

/// Editable scenario inputs, addressed by their wire name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScenarioField {
    PropertyPrice,
    Deposit,
    MortgageRate,
    MortgageLength,
    PropertyAppreciationRate,
    MonthlyRent,
    RentIncreaseRate,
    CouncilTax,
    MaintenanceCosts,
    NumBedrooms,
    RoomRentalIncome,
    Timeframe,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 12] = [
        ScenarioField::PropertyPrice,
        ScenarioField::Deposit,
        ScenarioField::MortgageRate,
        ScenarioField::MortgageLength,
        ScenarioField::PropertyAppreciationRate,
        ScenarioField::MonthlyRent,
        ScenarioField::RentIncreaseRate,
        ScenarioField::CouncilTax,
        ScenarioField::MaintenanceCosts,
        ScenarioField::NumBedrooms,
        ScenarioField::RoomRentalIncome,
        ScenarioField::Timeframe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioField::PropertyPrice => "propertyPrice",
            ScenarioField::Deposit => "deposit",
            ScenarioField::MortgageRate => "mortgageRate",
            ScenarioField::MortgageLength => "mortgageLength",
            ScenarioField::PropertyAppreciationRate => "propertyAppreciationRate",
            ScenarioField::MonthlyRent => "monthlyRent",
            ScenarioField::RentIncreaseRate => "rentIncreaseRate",
            ScenarioField::CouncilTax => "councilTax",
            ScenarioField::MaintenanceCosts => "maintenanceCosts",
            ScenarioField::NumBedrooms => "numBedrooms",
            ScenarioField::RoomRentalIncome => "roomRentalIncome",
            ScenarioField::Timeframe => "timeframe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}
