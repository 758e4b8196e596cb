use super::domain::{ApplicantInput, ApplicationForm, EmploymentType};
use super::evaluation::{EvaluationConfig, PolicyKind, ValidationLimits};

/// A single violated input rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("age must be between {min} and {max} years")]
    AgeOutOfRange { min: u8, max: u8 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("monthly income must be greater than $0")]
    IncomeNotPositive,
    #[error("monthly expenses cannot be negative")]
    NegativeExpenses,
    #[error("credit score must be between {min} and {max}")]
    CreditScoreOutOfRange { min: i32, max: i32 },
    #[error("requested amount must be at least ${min:.2}")]
    AmountBelowMinimum { min: f64 },
    #[error("term must be between {min} and {max} months")]
    TermOutOfRange { min: i32, max: i32 },
    #[error("monthly debt must not exceed monthly income")]
    DebtExceedsIncome,
    #[error("employment tenure must be between 0 and {max} months")]
    TenureOutOfRange { max: i32 },
    #[error("unemployed applicants must report $0 income")]
    UnemployedWithIncome,
}

/// Every rule an application violated, in check order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("application failed validation: {}", join_issues(.issues))]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns raw forms into validated applicant input, collecting every violation.
#[derive(Debug, Clone)]
pub struct ApplicationValidator {
    policy: PolicyKind,
    limits: ValidationLimits,
}

impl ApplicationValidator {
    pub fn new(policy: PolicyKind, limits: ValidationLimits) -> Self {
        Self { policy, limits }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.policy, config.limits.clone())
    }

    pub fn validate(&self, form: &ApplicationForm) -> Result<ApplicantInput, ValidationErrors> {
        let limits = &self.limits;
        let mut issues = Vec::new();

        if form.age < i32::from(limits.min_age) || form.age > i32::from(limits.max_age) {
            issues.push(ValidationIssue::AgeOutOfRange {
                min: limits.min_age,
                max: limits.max_age,
            });
        }

        if !form.monthly_income.is_finite() {
            issues.push(ValidationIssue::NonFinite {
                field: "monthly income",
            });
        } else if form.monthly_income <= 0.0 {
            issues.push(ValidationIssue::IncomeNotPositive);
        }

        if !form.monthly_expenses.is_finite() {
            issues.push(ValidationIssue::NonFinite {
                field: "monthly expenses",
            });
        } else if form.monthly_expenses < 0.0 {
            issues.push(ValidationIssue::NegativeExpenses);
        }

        if form.credit_score < limits.min_credit_score || form.credit_score > limits.max_credit_score
        {
            issues.push(ValidationIssue::CreditScoreOutOfRange {
                min: limits.min_credit_score,
                max: limits.max_credit_score,
            });
        }

        if !form.requested_amount.is_finite() {
            issues.push(ValidationIssue::NonFinite {
                field: "requested amount",
            });
        } else if form.requested_amount < limits.min_requested_amount {
            issues.push(ValidationIssue::AmountBelowMinimum {
                min: limits.min_requested_amount,
            });
        }

        match self.policy {
            PolicyKind::Gated => {
                if form.requested_term_months < limits.min_term_months
                    || form.requested_term_months > limits.max_term_months
                {
                    issues.push(ValidationIssue::TermOutOfRange {
                        min: limits.min_term_months,
                        max: limits.max_term_months,
                    });
                }
            }
            PolicyKind::Points => {
                if form.monthly_expenses > form.monthly_income {
                    issues.push(ValidationIssue::DebtExceedsIncome);
                }
            }
        }

        if form.employment_tenure_months < 0
            || form.employment_tenure_months > limits.max_tenure_months
        {
            issues.push(ValidationIssue::TenureOutOfRange {
                max: limits.max_tenure_months,
            });
        }

        if form.employment_type == EmploymentType::Unemployed && form.monthly_income != 0.0 {
            issues.push(ValidationIssue::UnemployedWithIncome);
        }

        if !issues.is_empty() {
            return Err(ValidationErrors { issues });
        }

        self.narrow(form)
    }

    fn narrow(&self, form: &ApplicationForm) -> Result<ApplicantInput, ValidationErrors> {
        let limits = &self.limits;
        let mut issues = Vec::new();

        let age = u8::try_from(form.age).ok();
        if age.is_none() {
            issues.push(ValidationIssue::AgeOutOfRange {
                min: limits.min_age,
                max: limits.max_age,
            });
        }
        let credit_score = u16::try_from(form.credit_score).ok();
        if credit_score.is_none() {
            issues.push(ValidationIssue::CreditScoreOutOfRange {
                min: limits.min_credit_score,
                max: limits.max_credit_score,
            });
        }
        let requested_term_months = match self.policy {
            PolicyKind::Gated => u16::try_from(form.requested_term_months).ok(),
            // The points policy derives its own term, so the requested one only saturates.
            PolicyKind::Points => Some(saturate_u16(form.requested_term_months)),
        };
        if requested_term_months.is_none() {
            issues.push(ValidationIssue::TermOutOfRange {
                min: limits.min_term_months,
                max: limits.max_term_months,
            });
        }
        let employment_tenure_months = u16::try_from(form.employment_tenure_months).ok();
        if employment_tenure_months.is_none() {
            issues.push(ValidationIssue::TenureOutOfRange {
                max: limits.max_tenure_months,
            });
        }

        match (age, credit_score, requested_term_months, employment_tenure_months) {
            (Some(age), Some(credit_score), Some(requested_term_months), Some(tenure)) => {
                Ok(ApplicantInput {
                    age,
                    marital_status: form.marital_status,
                    dependents: form.dependents,
                    employment_type: form.employment_type,
                    employment_tenure_months: tenure,
                    has_recent_delinquency: form.has_recent_delinquency,
                    monthly_income: form.monthly_income,
                    monthly_expenses: form.monthly_expenses,
                    credit_score,
                    collateral: form.collateral,
                    requested_amount: form.requested_amount,
                    requested_term_months,
                })
            }
            _ => Err(ValidationErrors { issues }),
        }
    }
}

fn saturate_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}
