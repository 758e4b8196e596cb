use super::super::domain::{ApplicantInput, Collateral};
use super::config::{PointsPolicyConfig, PolicyKind};
use super::decision::{
    ApprovalTerms, Decision, DenialReason, EvaluationResult, ScoreComponent, ScoreFactor,
};
use super::rate::{clamp_unit, RateOffsetSource};
use super::recommendations::{CONDITIONAL_ADVISORY, LOW_SCORE_RECOMMENDATIONS};

const MAX_REPORTED_SCORE: u16 = 100;

fn credit_points(credit_score: u16) -> u8 {
    if credit_score > 750 {
        40
    } else if credit_score > 650 {
        30
    } else if credit_score > 550 {
        20
    } else {
        10
    }
}

fn income_points(monthly_income: f64) -> u8 {
    if monthly_income > 5000.0 {
        20
    } else if monthly_income > 3000.0 {
        15
    } else if monthly_income > 1500.0 {
        10
    } else {
        5
    }
}

fn debt_to_income_points(ratio: f64) -> u8 {
    if ratio < 0.3 {
        20
    } else if ratio < 0.5 {
        15
    } else if ratio < 0.7 {
        10
    } else {
        5
    }
}

fn collateral_points(collateral: Collateral) -> u8 {
    match collateral {
        Collateral::Property => 15,
        Collateral::Vehicle => 10,
        Collateral::SavingsDeposit => 5,
        Collateral::None => 0,
    }
}

fn tenure_points(years: f64) -> u8 {
    if years > 5.0 {
        15
    } else if years > 3.0 {
        10
    } else if years > 1.0 {
        5
    } else {
        0
    }
}

/// Scores each factor independently; the components sum to the raw score.
pub(crate) fn score_components(input: &ApplicantInput) -> Vec<ScoreComponent> {
    let ratio = input.debt_to_income();
    let years = input.tenure_years();

    vec![
        ScoreComponent {
            factor: ScoreFactor::CreditScore,
            points: credit_points(input.credit_score),
            notes: format!("credit score {}", input.credit_score),
        },
        ScoreComponent {
            factor: ScoreFactor::Income,
            points: income_points(input.monthly_income),
            notes: format!("monthly income {:.2}", input.monthly_income),
        },
        ScoreComponent {
            factor: ScoreFactor::DebtToIncome,
            points: debt_to_income_points(ratio),
            notes: format!("debt-to-income ratio {ratio:.2}"),
        },
        ScoreComponent {
            factor: ScoreFactor::Collateral,
            points: collateral_points(input.collateral),
            notes: format!("collateral {}", input.collateral.label()),
        },
        ScoreComponent {
            factor: ScoreFactor::EmploymentTenure,
            points: tenure_points(years),
            notes: format!("{years:.1} years in current employment"),
        },
    ]
}

pub(crate) fn total_score(components: &[ScoreComponent]) -> u8 {
    let raw: u16 = components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();
    raw.min(MAX_REPORTED_SCORE) as u8
}

/// Months needed to repay at the assumed installment share, bounded by policy.
pub(crate) fn approved_term(input: &ApplicantInput, config: &PointsPolicyConfig) -> u16 {
    let capacity = input.monthly_income * config.installment_income_share;
    if capacity <= 0.0 {
        return config.max_term_months;
    }

    let months = (input.requested_amount / capacity).floor();
    let bounded = months.min(f64::from(config.max_term_months));
    (bounded as u16).max(1)
}

/// Offset truncated to whole cents so the quoted rate stays below `base_rate + spread`.
fn rate_offset(spread: f64, unit: f64) -> f64 {
    (spread * clamp_unit(unit) * 100.0).floor() / 100.0
}

pub(crate) fn evaluate(
    input: &ApplicantInput,
    config: &PointsPolicyConfig,
    offsets: &dyn RateOffsetSource,
) -> EvaluationResult {
    let components = score_components(input);
    let score = total_score(&components);

    let (decision, recommendations) = if score >= config.approval_threshold {
        let rate = config.base_rate + rate_offset(config.rate_spread, offsets.unit());
        let terms = ApprovalTerms::new(input.requested_amount, rate, approved_term(input, config));
        (Decision::Approved(terms), Vec::new())
    } else if score >= config.conditional_threshold {
        (
            Decision::Conditional {
                advisory: CONDITIONAL_ADVISORY.to_string(),
            },
            Vec::new(),
        )
    } else {
        (
            Decision::Denied {
                reason: DenialReason::InsufficientScore {
                    score,
                    threshold: config.conditional_threshold,
                },
            },
            LOW_SCORE_RECOMMENDATIONS
                .iter()
                .map(|text| text.to_string())
                .collect(),
        )
    };

    EvaluationResult {
        policy: PolicyKind::Points,
        decision,
        score: Some(score),
        components,
        recommendations,
    }
}
