/// Monthly principal and interest on a fixed-rate loan.
pub fn mortgage_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    let n = f64::from(years) * 12.0;
    if n <= 0.0 {
        return principal;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    // Over an effectively endless term the payment is interest only.
    if !growth.is_finite() {
        return principal * r;
    }
    principal * (r * growth) / (growth - 1.0)
}
