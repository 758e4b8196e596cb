use crate::infra::{build_service, parse_label, parse_policy, resolve_policy};
use crate::render::{render_result, render_summary_line};
use clap::Args;
use loan_eligibility::eligibility::{
    ApplicationCsvImporter, ApplicationForm, Collateral, Decision, EligibilityServiceError,
    EmploymentType, MaritalStatus, PolicyKind,
};
use loan_eligibility::error::AppError;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant age in years
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub(crate) age: i32,
    /// Marital status (single, married, divorced, widowed, domestic_partnership)
    #[arg(long, default_value = "single", value_parser = parse_label::<MaritalStatus>)]
    pub(crate) marital_status: MaritalStatus,
    /// Number of financial dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u8,
    /// Employment type (employed, self_employed, retired, unemployed)
    #[arg(long, default_value = "employed", value_parser = parse_label::<EmploymentType>)]
    pub(crate) employment_type: EmploymentType,
    /// Months in current employment
    #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
    pub(crate) tenure_months: i32,
    /// Applicant had a late payment in the last year
    #[arg(long)]
    pub(crate) delinquent: bool,
    /// Net monthly income
    #[arg(long, default_value_t = 3000.0, allow_negative_numbers = true)]
    pub(crate) monthly_income: f64,
    /// Fixed monthly expenses including existing debt service
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub(crate) monthly_expenses: f64,
    /// Credit score (300-850)
    #[arg(long, default_value_t = 650, allow_negative_numbers = true)]
    pub(crate) credit_score: i32,
    /// Collateral offered (none, savings_deposit, vehicle, property)
    #[arg(long, default_value = "none", value_parser = parse_label::<Collateral>)]
    pub(crate) collateral: Collateral,
    /// Requested loan amount
    #[arg(long, default_value_t = 5000.0, allow_negative_numbers = true)]
    pub(crate) amount: f64,
    /// Requested term in months
    #[arg(long, default_value_t = 36, allow_negative_numbers = true)]
    pub(crate) term_months: i32,
    /// Lending policy (gated or points); defaults to APP_ELIGIBILITY_POLICY
    #[arg(long, value_parser = parse_policy)]
    pub(crate) policy: Option<PolicyKind>,
    /// Seed for the points-policy rate offset
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn form(&self) -> ApplicationForm {
        ApplicationForm {
            age: self.age,
            marital_status: self.marital_status,
            dependents: self.dependents,
            employment_type: self.employment_type,
            employment_tenure_months: self.tenure_months,
            has_recent_delinquency: self.delinquent,
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            credit_score: self.credit_score,
            collateral: self.collateral,
            requested_amount: self.amount,
            requested_term_months: self.term_months,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one application per row, headed by the form field names
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Lending policy (gated or points); defaults to APP_ELIGIBILITY_POLICY
    #[arg(long, value_parser = parse_policy)]
    pub(crate) policy: Option<PolicyKind>,
    /// Seed for the points-policy rate offset
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let policy = resolve_policy(args.policy)?;
    let service = build_service(policy, args.seed);
    let form = args.form();
    debug!(?form, %policy, "evaluating application from command line");

    let result = service.assess(&form)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_result(&result));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let policy = resolve_policy(args.policy)?;
    let service = build_service(policy, args.seed);
    let forms = ApplicationCsvImporter::from_path(&args.input)?;

    println!(
        "Evaluating {} application(s) from {} with the {} policy",
        forms.len(),
        args.input.display(),
        policy
    );

    let mut totals = BatchTotals::default();

    for (idx, form) in forms.iter().enumerate() {
        let row = idx + 1;
        match service.assess(form) {
            Ok(result) => {
                totals.record(&result.decision);
                println!("- row {row}: {}", render_summary_line(&result));
            }
            Err(EligibilityServiceError::Validation(errors)) => {
                totals.invalid += 1;
                println!("- row {row}: invalid ({})", errors.messages().join("; "));
            }
        }
    }

    println!("\n{}", totals.summary());

    Ok(())
}

/// Outcome counts for a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BatchTotals {
    pub(crate) approved: usize,
    pub(crate) conditional: usize,
    pub(crate) denied: usize,
    pub(crate) invalid: usize,
}

impl BatchTotals {
    fn record(&mut self, decision: &Decision) {
        match decision {
            Decision::Approved(_) => self.approved += 1,
            Decision::Conditional { .. } => self.conditional += 1,
            Decision::Denied { .. } => self.denied += 1,
        }
    }

    fn summary(&self) -> String {
        format!(
            "Totals: {} approved, {} conditional, {} denied, {} invalid",
            self.approved, self.conditional, self.denied, self.invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::eligibility::{ApprovalTerms, DenialReason};

    #[test]
    fn totals_count_each_decision_variant() {
        let mut totals = BatchTotals::default();
        totals.record(&Decision::Approved(ApprovalTerms {
            approved_amount: 4000.0,
            interest_rate: 15.0,
            term_months: 36,
            estimated_installment: 111.11,
        }));
        totals.record(&Decision::Conditional {
            advisory: "manual review".to_string(),
        });
        totals.record(&Decision::Denied {
            reason: DenialReason::InsufficientScore {
                score: 40,
                threshold: 60,
            },
        });
        totals.record(&Decision::Denied {
            reason: DenialReason::CreditScoreTooLow {
                credit_score: 500,
                minimum: 630,
            },
        });
        totals.invalid += 1;

        assert_eq!(
            totals,
            BatchTotals {
                approved: 1,
                conditional: 1,
                denied: 2,
                invalid: 1,
            }
        );
        assert_eq!(
            totals.summary(),
            "Totals: 1 approved, 1 conditional, 2 denied, 1 invalid"
        );
    }
}
