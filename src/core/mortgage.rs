/// Fixed monthly payment that fully repays `principal` over `term_years`.
///
/// `annual_rate_percent` is a percentage. A zero rate spreads the principal
/// evenly over the payments instead of dividing by zero in the annuity formula.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, term_years: i32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let num_payments = f64::from(term_years) * 12.0;

    if monthly_rate == 0.0 {
        return principal / num_payments;
    }

    let growth = (1.0 + monthly_rate).powf(num_payments);
    principal * monthly_rate * growth / (growth - 1.0)
}
