use super::decision::format_money;

pub(crate) const INCREASE_INCOME_OR_CUT_EXPENSES: &str =
    "Increase income or reduce monthly expenses";
pub(crate) const PAY_DEBTS_ON_TIME: &str = "Improve your credit score by paying debts on time";
pub(crate) const OFFER_PROPERTY_OR_VEHICLE: &str = "Offer collateral (property or vehicle)";

pub(crate) const IMPROVE_SCORE_FOR_RATES: &str =
    "Improve your credit score to obtain better rates";
pub(crate) const REDUCE_FIXED_EXPENSES: &str =
    "Reduce fixed expenses to improve payment capacity";
pub(crate) const AVOID_DELINQUENCY: &str =
    "Avoid late payments to strengthen your credit history";
pub(crate) const BUILD_TENURE: &str = "Build employment tenure (at least 12 months recommended)";

pub(crate) const CONDITIONAL_ADVISORY: &str =
    "Application requires manual review by a loan officer before terms can be offered";

/// Fixed advice attached to every points-policy denial.
pub const LOW_SCORE_RECOMMENDATIONS: [&str; 4] = [
    PAY_DEBTS_ON_TIME,
    "Reduce your debt-to-income ratio below 30%",
    "Offer collateral to secure the loan",
    "Build employment tenure before reapplying",
];

pub(crate) fn retry_within_age_range(min_age: u8, max_age: u8) -> String {
    format!("Apply again once you are within the eligible age range ({min_age}-{max_age} years)")
}

pub(crate) fn reduce_amount_to(max_amount: f64) -> String {
    format!(
        "Reduce the requested amount to at most {}",
        format_money(max_amount)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_amount_formats_currency() {
        assert_eq!(
            reduce_amount_to(3000.0 * 3.5),
            "Reduce the requested amount to at most $10,500.00"
        );
    }

    #[test]
    fn age_advice_reflects_configured_range() {
        assert_eq!(
            retry_within_age_range(18, 77),
            "Apply again once you are within the eligible age range (18-77 years)"
        );
        assert_eq!(
            retry_within_age_range(21, 65),
            "Apply again once you are within the eligible age range (21-65 years)"
        );
    }
}
