use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business policy applied by the evaluator. The two policies are not blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Ordered denial gates followed by amount and rate pricing.
    #[default]
    Gated,
    /// Additive 0-100 score with approve/conditional/deny cut-offs.
    Points,
}

impl PolicyKind {
    pub const fn label(self) -> &'static str {
        match self {
            PolicyKind::Gated => "gated",
            PolicyKind::Points => "points",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gated" | "gate" => Ok(Self::Gated),
            "points" | "score" | "scored" => Ok(Self::Points),
            other => Err(format!("unknown eligibility policy '{other}' (expected gated or points)")),
        }
    }
}

/// Rubric configuration describing every tunable threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EvaluationConfig {
    pub policy: PolicyKind,
    pub gated: GatedPolicyConfig,
    pub points: PointsPolicyConfig,
    pub limits: ValidationLimits,
}

impl EvaluationConfig {
    pub fn for_policy(policy: PolicyKind) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}

/// Thresholds for the deny-first policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatedPolicyConfig {
    /// Share of income that must remain after expenses and the estimated installment.
    pub payment_capacity_ratio: f64,
    /// Income multiple suggested to applicants failing the capacity gate.
    pub suggested_amount_multiple: f64,
    pub minimum_credit_score: u16,
    /// Largest income multiple that may be borrowed without collateral.
    pub unsecured_income_multiple: f64,
    /// Months of income that cap the base approvable amount.
    pub income_months_cap: f64,
    pub base_rate: f64,
    pub rate_floor: f64,
}

impl Default for GatedPolicyConfig {
    fn default() -> Self {
        Self {
            payment_capacity_ratio: 0.3,
            suggested_amount_multiple: 3.5,
            minimum_credit_score: 630,
            unsecured_income_multiple: 4.6,
            income_months_cap: 12.0,
            base_rate: 18.0,
            rate_floor: 12.0,
        }
    }
}

/// Cut-offs for the additive scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsPolicyConfig {
    pub approval_threshold: u8,
    pub conditional_threshold: u8,
    pub base_rate: f64,
    /// Width of the random band added on top of `base_rate`.
    pub rate_spread: f64,
    pub max_term_months: u16,
    /// Share of monthly income assumed available for the installment.
    pub installment_income_share: f64,
}

impl Default for PointsPolicyConfig {
    fn default() -> Self {
        Self {
            approval_threshold: 80,
            conditional_threshold: 60,
            base_rate: 8.5,
            rate_spread: 3.0,
            max_term_months: 60,
            installment_income_share: 0.4,
        }
    }
}

/// Domain bounds enforced before evaluation. The age bounds also drive the gated age gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub min_age: u8,
    pub max_age: u8,
    pub min_credit_score: i32,
    pub max_credit_score: i32,
    pub min_requested_amount: f64,
    pub min_term_months: i32,
    pub max_term_months: i32,
    pub max_tenure_months: i32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 77,
            min_credit_score: 300,
            max_credit_score: 850,
            min_requested_amount: 100.0,
            min_term_months: 6,
            max_term_months: 120,
            max_tenure_months: 600,
        }
    }
}
