use serde::{Deserialize, Serialize};

/// Raw applicant record as supplied by a form, JSON body, or CSV row.
///
/// Numeric fields are deliberately wide so out-of-domain values reach the
/// validator and are reported together instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub age: i32,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub dependents: u8,
    pub employment_type: EmploymentType,
    pub employment_tenure_months: i32,
    #[serde(default)]
    pub has_recent_delinquency: bool,
    pub monthly_income: f64,
    #[serde(alias = "monthly_debt")]
    pub monthly_expenses: f64,
    pub credit_score: i32,
    #[serde(default)]
    pub collateral: Collateral,
    pub requested_amount: f64,
    pub requested_term_months: i32,
}

/// Validated applicant snapshot consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub age: u8,
    pub marital_status: MaritalStatus,
    pub dependents: u8,
    pub employment_type: EmploymentType,
    pub employment_tenure_months: u16,
    pub has_recent_delinquency: bool,
    pub monthly_income: f64,
    /// Fixed monthly expenses, including existing debt service.
    pub monthly_expenses: f64,
    pub credit_score: u16,
    pub collateral: Collateral,
    pub requested_amount: f64,
    pub requested_term_months: u16,
}

impl ApplicantInput {
    /// Monthly debt divided by monthly income; an income of zero reads as fully indebted.
    pub fn debt_to_income(&self) -> f64 {
        if self.monthly_income <= 0.0 {
            1.0
        } else {
            self.monthly_expenses / self.monthly_income
        }
    }

    pub fn tenure_years(&self) -> f64 {
        f64::from(self.employment_tenure_months) / 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    DomesticPartnership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Employed,
    SelfEmployed,
    Retired,
    Unemployed,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::Employed => "employed",
            EmploymentType::SelfEmployed => "self_employed",
            EmploymentType::Retired => "retired",
            EmploymentType::Unemployed => "unemployed",
        }
    }
}

/// Asset pledged against the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collateral {
    #[default]
    None,
    SavingsDeposit,
    Vehicle,
    Property,
}

impl Collateral {
    pub const fn label(self) -> &'static str {
        match self {
            Collateral::None => "none",
            Collateral::SavingsDeposit => "savings_deposit",
            Collateral::Vehicle => "vehicle",
            Collateral::Property => "property",
        }
    }

    pub const fn is_secured(self) -> bool {
        !matches!(self, Collateral::None)
    }
}
