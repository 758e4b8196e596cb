use loan_eligibility::config::AppConfig;
use loan_eligibility::eligibility::{
    EligibilityService, EvaluationConfig, PolicyKind, RateOffsetSource, SeededRateOffset,
    ThreadRngOffset,
};
use loan_eligibility::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Explicit `--policy` wins; otherwise the environment decides.
pub(crate) fn resolve_policy(explicit: Option<PolicyKind>) -> Result<PolicyKind, AppError> {
    match explicit {
        Some(policy) => Ok(policy),
        None => Ok(AppConfig::load()?.eligibility.policy),
    }
}

pub(crate) fn rate_source(seed: Option<u64>) -> Arc<dyn RateOffsetSource> {
    match seed {
        Some(seed) => Arc::new(SeededRateOffset::new(seed)),
        None => Arc::new(ThreadRngOffset),
    }
}

pub(crate) fn build_service(policy: PolicyKind, seed: Option<u64>) -> EligibilityService {
    EligibilityService::with_rate_source(EvaluationConfig::for_policy(policy), rate_source(seed))
}

pub(crate) fn parse_policy(raw: &str) -> Result<PolicyKind, String> {
    raw.parse::<PolicyKind>()
}

/// Parses a snake_case domain label (e.g. `self_employed`) through its serde representation.
pub(crate) fn parse_label<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|err| format!("unrecognized value '{raw}' ({err})"))
}
