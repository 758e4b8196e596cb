use std::sync::Arc;

use tracing::{info, warn};

use super::domain::ApplicationForm;
use super::evaluation::{
    EligibilityEvaluator, EvaluationConfig, EvaluationResult, PolicyKind, RateOffsetSource,
};
use super::validation::{ApplicationValidator, ValidationErrors};

/// Service composing the validator and the evaluator behind one call.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    validator: ApplicationValidator,
    evaluator: EligibilityEvaluator,
}

impl EligibilityService {
    pub fn new(config: EvaluationConfig) -> Self {
        let validator = ApplicationValidator::from_config(&config);
        Self {
            validator,
            evaluator: EligibilityEvaluator::new(config),
        }
    }

    pub fn with_rate_source(config: EvaluationConfig, offsets: Arc<dyn RateOffsetSource>) -> Self {
        let validator = ApplicationValidator::from_config(&config);
        Self {
            validator,
            evaluator: EligibilityEvaluator::with_rate_source(config, offsets),
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        self.evaluator.config()
    }

    pub fn policy(&self) -> PolicyKind {
        self.evaluator.policy()
    }

    /// Validate a raw form and, when it is clean, evaluate it.
    pub fn assess(
        &self,
        form: &ApplicationForm,
    ) -> Result<EvaluationResult, EligibilityServiceError> {
        let input = match self.validator.validate(form) {
            Ok(input) => input,
            Err(errors) => {
                warn!(
                    policy = %self.policy(),
                    violations = errors.issues.len(),
                    "application rejected by validation"
                );
                return Err(errors.into());
            }
        };

        let result = self.evaluator.evaluate(&input);
        info!(
            policy = %result.policy,
            decision = result.decision_label(),
            score = ?result.score,
            approved_amount = result.approved_amount(),
            "application evaluated"
        );

        Ok(result)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
