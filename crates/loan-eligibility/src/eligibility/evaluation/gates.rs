use super::super::domain::{ApplicantInput, Collateral, EmploymentType};
use super::config::{GatedPolicyConfig, PolicyKind, ValidationLimits};
use super::decision::{ApprovalTerms, Decision, DenialReason, EvaluationResult};
use super::recommendations::{
    reduce_amount_to, retry_within_age_range, AVOID_DELINQUENCY, BUILD_TENURE,
    IMPROVE_SCORE_FOR_RATES, INCREASE_INCOME_OR_CUT_EXPENSES, OFFER_PROPERTY_OR_VEHICLE,
    PAY_DEBTS_ON_TIME, REDUCE_FIXED_EXPENSES,
};

/// A failed gate: the reason plus the advice targeted at it.
pub(crate) struct GateFailure {
    pub reason: DenialReason,
    pub recommendations: Vec<String>,
}

/// Estimated installment ignoring interest, with the term guarded against zero.
pub(crate) fn estimated_installment(input: &ApplicantInput) -> f64 {
    input.requested_amount / f64::from(input.requested_term_months.max(1))
}

/// Runs the denial gates in order; the first failure masks every later gate.
pub(crate) fn first_failed_gate(
    input: &ApplicantInput,
    config: &GatedPolicyConfig,
    limits: &ValidationLimits,
) -> Option<GateFailure> {
    if input.age < limits.min_age || input.age > limits.max_age {
        return Some(GateFailure {
            reason: DenialReason::AgeOutOfRange {
                age: input.age,
                min_age: limits.min_age,
                max_age: limits.max_age,
            },
            recommendations: vec![retry_within_age_range(limits.min_age, limits.max_age)],
        });
    }

    let payment_capacity =
        input.monthly_income - input.monthly_expenses - estimated_installment(input);
    let required = input.monthly_income * config.payment_capacity_ratio;
    if payment_capacity < required {
        return Some(GateFailure {
            reason: DenialReason::InsufficientPaymentCapacity {
                payment_capacity,
                required,
            },
            recommendations: vec![
                INCREASE_INCOME_OR_CUT_EXPENSES.to_string(),
                reduce_amount_to(input.monthly_income * config.suggested_amount_multiple),
            ],
        });
    }

    if input.credit_score < config.minimum_credit_score {
        return Some(GateFailure {
            reason: DenialReason::CreditScoreTooLow {
                credit_score: input.credit_score,
                minimum: config.minimum_credit_score,
            },
            recommendations: vec![PAY_DEBTS_ON_TIME.to_string()],
        });
    }

    let unsecured_limit = input.monthly_income * config.unsecured_income_multiple;
    if input.requested_amount > unsecured_limit && !input.collateral.is_secured() {
        return Some(GateFailure {
            reason: DenialReason::UnsecuredAmountTooHigh {
                requested_amount: input.requested_amount,
                unsecured_limit,
            },
            recommendations: vec![
                OFFER_PROPERTY_OR_VEHICLE.to_string(),
                reduce_amount_to(unsecured_limit),
            ],
        });
    }

    None
}

fn credit_multiplier(credit_score: u16) -> f64 {
    match credit_score {
        750..=u16::MAX => 1.0,
        650..=749 => 0.8,
        550..=649 => 0.6,
        _ => 0.4,
    }
}

fn collateral_multiplier(collateral: Collateral) -> f64 {
    match collateral {
        Collateral::Property => 1.2,
        Collateral::Vehicle => 1.1,
        Collateral::SavingsDeposit | Collateral::None => 1.0,
    }
}

pub(crate) fn approved_amount(input: &ApplicantInput, config: &GatedPolicyConfig) -> f64 {
    let base_max = input
        .requested_amount
        .min(input.monthly_income * config.income_months_cap);
    let scored = base_max * credit_multiplier(input.credit_score);
    let secured = scored * collateral_multiplier(input.collateral);
    secured.min(input.requested_amount)
}

pub(crate) fn interest_rate(input: &ApplicantInput, config: &GatedPolicyConfig) -> f64 {
    let mut rate = config.base_rate;

    rate += match input.credit_score {
        800..=u16::MAX => -6.0,
        700..=799 => -3.0,
        600..=699 => 0.0,
        _ => 5.0,
    };

    rate += match input.collateral {
        Collateral::Property => -2.5,
        Collateral::Vehicle => -1.5,
        Collateral::SavingsDeposit | Collateral::None => 0.0,
    };

    rate += match input.employment_type {
        EmploymentType::SelfEmployed => 3.0,
        EmploymentType::Retired => -1.0,
        EmploymentType::Employed | EmploymentType::Unemployed => 0.0,
    };

    rate.max(config.rate_floor)
}

fn approval_recommendations(input: &ApplicantInput) -> Vec<String> {
    let mut recommendations = Vec::new();

    if input.credit_score < 700 {
        recommendations.push(IMPROVE_SCORE_FOR_RATES.to_string());
    }
    if input.monthly_expenses > input.monthly_income * 0.5 {
        recommendations.push(REDUCE_FIXED_EXPENSES.to_string());
    }
    if input.has_recent_delinquency {
        recommendations.push(AVOID_DELINQUENCY.to_string());
    }
    if input.employment_tenure_months < 12 {
        recommendations.push(BUILD_TENURE.to_string());
    }

    recommendations
}

pub(crate) fn evaluate(
    input: &ApplicantInput,
    config: &GatedPolicyConfig,
    limits: &ValidationLimits,
) -> EvaluationResult {
    if let Some(failure) = first_failed_gate(input, config, limits) {
        return EvaluationResult {
            policy: PolicyKind::Gated,
            decision: Decision::Denied {
                reason: failure.reason,
            },
            score: None,
            components: Vec::new(),
            recommendations: failure.recommendations,
        };
    }

    let terms = ApprovalTerms::new(
        approved_amount(input, config),
        interest_rate(input, config),
        input.requested_term_months,
    );

    EvaluationResult {
        policy: PolicyKind::Gated,
        decision: Decision::Approved(terms),
        score: None,
        components: Vec::new(),
        recommendations: approval_recommendations(input),
    }
}
