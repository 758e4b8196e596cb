mod config;
mod decision;
mod gates;
mod points;
mod rate;
mod recommendations;

pub use config::{
    EvaluationConfig, GatedPolicyConfig, PointsPolicyConfig, PolicyKind, ValidationLimits,
};
pub use decision::{
    format_money, ApprovalTerms, Decision, DenialReason, EvaluationResult, ScoreComponent,
    ScoreFactor,
};
pub use rate::{FixedRateOffset, RateOffsetSource, SeededRateOffset, ThreadRngOffset};
pub use recommendations::LOW_SCORE_RECOMMENDATIONS;

use std::sync::Arc;

use super::domain::ApplicantInput;

/// Stateless evaluator that applies the configured policy to an applicant.
#[derive(Clone)]
pub struct EligibilityEvaluator {
    config: EvaluationConfig,
    offsets: Arc<dyn RateOffsetSource>,
}

impl EligibilityEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self::with_rate_source(config, Arc::new(ThreadRngOffset))
    }

    pub fn with_rate_source(config: EvaluationConfig, offsets: Arc<dyn RateOffsetSource>) -> Self {
        Self { config, offsets }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn policy(&self) -> PolicyKind {
        self.config.policy
    }

    pub fn evaluate(&self, input: &ApplicantInput) -> EvaluationResult {
        match self.config.policy {
            PolicyKind::Gated => {
                gates::evaluate(input, &self.config.gated, &self.config.limits)
            }
            PolicyKind::Points => points::evaluate(input, &self.config.points, &*self.offsets),
        }
    }
}

impl std::fmt::Debug for EligibilityEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityEvaluator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
