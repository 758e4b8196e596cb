//! Loan eligibility intake, validation, and evaluation.
//!
//! A raw [`ApplicationForm`] is checked by the [`ApplicationValidator`], which reports every
//! violated rule at once. Clean input is handed to the [`EligibilityEvaluator`], which applies
//! either the deny-first gated policy or the additive points policy and returns an
//! [`EvaluationResult`]. Business denials are ordinary results, never errors.

pub mod domain;
pub mod evaluation;
pub mod import;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ApplicantInput, ApplicationForm, Collateral, EmploymentType, MaritalStatus};
pub use evaluation::{
    ApprovalTerms, Decision, DenialReason, EligibilityEvaluator, EvaluationConfig,
    EvaluationResult, FixedRateOffset, GatedPolicyConfig, PointsPolicyConfig, PolicyKind,
    RateOffsetSource, ScoreComponent, ScoreFactor, SeededRateOffset, ThreadRngOffset,
    ValidationLimits,
};
pub use import::{ApplicationCsvImporter, ApplicationImportError};
pub use router::{eligibility_router, EvaluationResponse};
pub use service::{EligibilityService, EligibilityServiceError};
pub use validation::{ApplicationValidator, ValidationErrors, ValidationIssue};
