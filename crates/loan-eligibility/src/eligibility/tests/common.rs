use std::sync::Arc;

use crate::eligibility::domain::{
    ApplicantInput, ApplicationForm, Collateral, EmploymentType, MaritalStatus,
};
use crate::eligibility::evaluation::{
    EligibilityEvaluator, EvaluationConfig, FixedRateOffset, PolicyKind,
};
use crate::eligibility::service::EligibilityService;

/// Baseline applicant that clears every gate.
pub(super) fn applicant() -> ApplicantInput {
    ApplicantInput {
        age: 30,
        marital_status: MaritalStatus::Single,
        dependents: 0,
        employment_type: EmploymentType::Employed,
        employment_tenure_months: 24,
        has_recent_delinquency: false,
        monthly_income: 3000.0,
        monthly_expenses: 1000.0,
        credit_score: 700,
        collateral: Collateral::None,
        requested_amount: 5000.0,
        requested_term_months: 36,
    }
}

pub(super) fn form() -> ApplicationForm {
    ApplicationForm {
        age: 30,
        marital_status: MaritalStatus::Single,
        dependents: 0,
        employment_type: EmploymentType::Employed,
        employment_tenure_months: 24,
        has_recent_delinquency: false,
        monthly_income: 3000.0,
        monthly_expenses: 1000.0,
        credit_score: 700,
        collateral: Collateral::None,
        requested_amount: 5000.0,
        requested_term_months: 36,
    }
}

/// Applicant strong enough for a points approval (raw score 110).
pub(super) fn strong_applicant() -> ApplicantInput {
    ApplicantInput {
        credit_score: 800,
        monthly_income: 6000.0,
        monthly_expenses: 1000.0,
        collateral: Collateral::Property,
        employment_tenure_months: 72,
        requested_amount: 12000.0,
        ..applicant()
    }
}

/// Applicant scoring 20 points.
pub(super) fn weak_applicant() -> ApplicantInput {
    ApplicantInput {
        credit_score: 500,
        monthly_income: 1000.0,
        monthly_expenses: 900.0,
        collateral: Collateral::None,
        employment_tenure_months: 0,
        ..applicant()
    }
}

pub(super) fn gated_evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(EvaluationConfig::for_policy(PolicyKind::Gated))
}

pub(super) fn points_evaluator(offset: f64) -> EligibilityEvaluator {
    EligibilityEvaluator::with_rate_source(
        EvaluationConfig::for_policy(PolicyKind::Points),
        Arc::new(FixedRateOffset(offset)),
    )
}

pub(super) fn service(policy: PolicyKind) -> EligibilityService {
    EligibilityService::with_rate_source(
        EvaluationConfig::for_policy(policy),
        Arc::new(FixedRateOffset(0.5)),
    )
}
