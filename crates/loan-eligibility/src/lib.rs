//! Rule-based personal loan eligibility: validation, gated and points-based policies, and
//! the HTTP router that exposes them.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
