use serde::{Deserialize, Serialize};

use super::config::PolicyKind;

/// Adjudication outcome for an evaluated application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Approved(ApprovalTerms),
    Conditional { advisory: String },
    Denied { reason: DenialReason },
}

impl Decision {
    pub const fn label(&self) -> &'static str {
        match self {
            Decision::Approved(_) => "approved",
            Decision::Conditional { .. } => "conditional",
            Decision::Denied { .. } => "denied",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved(terms) => format!(
                "approved {} at {:.2}% over {} months",
                format_money(terms.approved_amount),
                terms.interest_rate,
                terms.term_months
            ),
            Decision::Conditional { advisory } => format!("conditional: {advisory}"),
            Decision::Denied { reason } => reason.summary(),
        }
    }
}

/// Amount, price, and schedule offered on approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalTerms {
    pub approved_amount: f64,
    /// Annual percentage rate.
    pub interest_rate: f64,
    pub term_months: u16,
    pub estimated_installment: f64,
}

impl ApprovalTerms {
    pub(crate) fn new(approved_amount: f64, interest_rate: f64, term_months: u16) -> Self {
        let approved_amount = round2(approved_amount);
        let estimated_installment = round2(approved_amount / f64::from(term_months.max(1)));

        Self {
            approved_amount,
            interest_rate: round2(interest_rate),
            term_months,
            estimated_installment,
        }
    }
}

/// Enumerates denial reasons so callers can render adverse action notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum DenialReason {
    AgeOutOfRange { age: u8, min_age: u8, max_age: u8 },
    InsufficientPaymentCapacity { payment_capacity: f64, required: f64 },
    CreditScoreTooLow { credit_score: u16, minimum: u16 },
    UnsecuredAmountTooHigh { requested_amount: f64, unsecured_limit: f64 },
    InsufficientScore { score: u8, threshold: u8 },
}

impl DenialReason {
    pub const fn code(&self) -> &'static str {
        match self {
            DenialReason::AgeOutOfRange { .. } => "age_out_of_range",
            DenialReason::InsufficientPaymentCapacity { .. } => "insufficient_payment_capacity",
            DenialReason::CreditScoreTooLow { .. } => "credit_score_too_low",
            DenialReason::UnsecuredAmountTooHigh { .. } => "unsecured_amount_too_high",
            DenialReason::InsufficientScore { .. } => "insufficient_score",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            DenialReason::AgeOutOfRange {
                age,
                min_age,
                max_age,
            } => format!("age {age} out of range ({min_age}-{max_age} years)"),
            DenialReason::InsufficientPaymentCapacity {
                payment_capacity,
                required,
            } => format!(
                "insufficient payment capacity ({} available, {} required)",
                format_money(*payment_capacity),
                format_money(*required)
            ),
            DenialReason::CreditScoreTooLow {
                credit_score,
                minimum,
            } => format!("credit score too low ({credit_score} < {minimum})"),
            DenialReason::UnsecuredAmountTooHigh {
                requested_amount,
                unsecured_limit,
            } => format!(
                "requested {} exceeds unsecured limit of {} without collateral",
                format_money(*requested_amount),
                format_money(*unsecured_limit)
            ),
            DenialReason::InsufficientScore { score, threshold } => {
                format!("eligibility score {score} below {threshold}")
            }
        }
    }
}

/// Discrete contribution to a points evaluation, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CreditScore,
    Income,
    DebtToIncome,
    Collateral,
    EmploymentTenure,
}

/// Evaluation output describing the decision and the advice attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub policy: PolicyKind,
    #[serde(flatten)]
    pub decision: Decision,
    /// Only populated by the points policy, clamped to 0-100.
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ScoreComponent>,
    pub recommendations: Vec<String>,
}

impl EvaluationResult {
    pub fn decision_label(&self) -> &'static str {
        self.decision.label()
    }

    /// Zero unless the application was approved.
    pub fn approved_amount(&self) -> f64 {
        match &self.decision {
            Decision::Approved(terms) => terms.approved_amount,
            _ => 0.0,
        }
    }

    pub fn interest_rate(&self) -> Option<f64> {
        match &self.decision {
            Decision::Approved(terms) => Some(terms.interest_rate),
            _ => None,
        }
    }

    pub fn denial_reason(&self) -> Option<String> {
        match &self.decision {
            Decision::Denied { reason } => Some(reason.summary()),
            _ => None,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.decision, Decision::Approved(_))
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a currency amount as `$12,345.67`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
