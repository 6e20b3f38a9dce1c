use super::mortgage::compute_monthly_payment;
use super::types::{ProjectionSummary, ScenarioInputs, YearSnapshot};

#[derive(Debug)]
struct ProjectionState {
    buying_cost: f64,
    renting_cost: f64,
    current_rent: f64,
    property_value: f64,
    remaining_mortgage: f64,
    interest_paid: f64,
    principal_paid: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct MortgageYear {
    outlay: f64,
    interest: f64,
    principal: f64,
}

/// Projects buying and renting costs for years `0..=timeframe`.
///
/// Inputs are assumed to have passed [`ScenarioInputs::validate`]; nothing
/// is checked here. A negative timeframe yields no snapshots.
///
/// Interest is charged once a year on the opening balance rather than
/// amortized monthly, and appreciation is applied before year 0 is recorded.
/// Whatever balance that approximation leaves when the term ends is cleared
/// without further cost.
pub fn project(inputs: &ScenarioInputs) -> Vec<YearSnapshot> {
    let loan_amount = inputs.loan_amount();
    let monthly_mortgage =
        compute_monthly_payment(loan_amount, inputs.mortgage_rate, inputs.mortgage_length);
    let yearly_room_income = inputs.monthly_room_income() * 12.0;
    let yearly_running_costs = inputs.maintenance_costs * 12.0 + inputs.council_tax * 12.0;

    let mut state = ProjectionState {
        buying_cost: inputs.deposit,
        renting_cost: 0.0,
        current_rent: inputs.monthly_rent,
        property_value: inputs.property_price,
        remaining_mortgage: loan_amount,
        interest_paid: 0.0,
        principal_paid: 0.0,
    };

    let capacity = usize::try_from(inputs.timeframe).map_or(0, |timeframe| timeframe + 1);
    let mut snapshots = Vec::with_capacity(capacity);
    for year in 0..=inputs.timeframe {
        let mortgage = if year < inputs.mortgage_length {
            pay_mortgage_year(&mut state, monthly_mortgage, inputs.mortgage_rate)
        } else {
            state.remaining_mortgage = 0.0;
            MortgageYear::default()
        };

        state.buying_cost += mortgage.outlay + yearly_running_costs - yearly_room_income;
        state.property_value *= 1.0 + inputs.property_appreciation_rate / 100.0;

        state.renting_cost += state.current_rent * 12.0;
        state.current_rent *= 1.0 + inputs.rent_increase_rate / 100.0;

        let net_buying_position =
            state.buying_cost - (state.property_value - inputs.property_price);

        snapshots.push(YearSnapshot {
            year: year as u32,
            cumulative_buying_cost: round_currency(state.buying_cost),
            cumulative_renting_cost: round_currency(state.renting_cost),
            net_buying_position: round_currency(net_buying_position),
            property_value: round_currency(state.property_value),
            remaining_mortgage_balance: round_currency(state.remaining_mortgage),
            cumulative_interest_paid: round_currency(state.interest_paid),
            yearly_interest_paid: round_currency(mortgage.interest),
            yearly_principal_paid: round_currency(mortgage.principal),
        });
    }

    log::debug!(
        "projected {} years, principal repaid {:.2}",
        snapshots.len(),
        state.principal_paid
    );
    snapshots
}

fn pay_mortgage_year(
    state: &mut ProjectionState,
    monthly_payment: f64,
    annual_rate_percent: f64,
) -> MortgageYear {
    let outlay = monthly_payment * 12.0;
    let interest = state.remaining_mortgage * (annual_rate_percent / 100.0);
    let principal = outlay - interest;

    state.interest_paid += interest;
    state.principal_paid += principal;
    state.remaining_mortgage = (state.remaining_mortgage - principal).max(0.0);

    MortgageYear {
        outlay,
        interest,
        principal,
    }
}

/// Headline figures for the final projected year.
pub fn summarize(inputs: &ScenarioInputs, snapshots: &[YearSnapshot]) -> Option<ProjectionSummary> {
    let last = snapshots.last()?;
    let loan_amount = inputs.loan_amount();
    let loan_to_value_percent = (inputs.property_price != 0.0)
        .then(|| (1.0 - inputs.deposit / inputs.property_price) * 100.0);

    Some(ProjectionSummary {
        timeframe: inputs.timeframe,
        total_renting_cost: last.cumulative_renting_cost,
        total_buying_cost: last.cumulative_buying_cost,
        final_property_value: last.property_value,
        net_buying_position: last.net_buying_position,
        total_interest_paid: last.cumulative_interest_paid,
        initial_monthly_mortgage: round_currency(compute_monthly_payment(
            loan_amount,
            inputs.mortgage_rate,
            inputs.mortgage_length,
        )),
        initial_monthly_rent: inputs.monthly_rent,
        loan_amount: round_currency(loan_amount),
        loan_to_value_percent,
    })
}

/// Nearest whole unit, halves rounding up.
fn round_currency(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
