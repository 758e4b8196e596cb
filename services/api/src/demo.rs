use crate::infra::rate_source;
use crate::render::render_result;
use clap::Args;
use loan_eligibility::eligibility::{
    ApplicationForm, Collateral, EligibilityService, EmploymentType, EvaluationConfig,
    MaritalStatus, PolicyKind,
};
use loan_eligibility::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the points-policy rate offset (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Only run the scenarios through this policy
    #[arg(long, value_parser = crate::infra::parse_policy)]
    pub(crate) policy: Option<PolicyKind>,
}

pub(crate) struct DemoScenario {
    pub(crate) label: &'static str,
    pub(crate) form: ApplicationForm,
}

fn base_form() -> ApplicationForm {
    ApplicationForm {
        age: 30,
        marital_status: MaritalStatus::Single,
        dependents: 0,
        employment_type: EmploymentType::Employed,
        employment_tenure_months: 12,
        has_recent_delinquency: false,
        monthly_income: 3000.0,
        monthly_expenses: 1000.0,
        credit_score: 700,
        collateral: Collateral::None,
        requested_amount: 5000.0,
        requested_term_months: 36,
    }
}

pub(crate) fn demo_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            label: "Salaried applicant, modest request",
            form: base_form(),
        },
        DemoScenario {
            label: "Applicant below the minimum age",
            form: ApplicationForm {
                age: 16,
                ..base_form()
            },
        },
        DemoScenario {
            label: "Established borrower pledging property",
            form: ApplicationForm {
                credit_score: 800,
                monthly_income: 6000.0,
                employment_tenure_months: 72,
                collateral: Collateral::Property,
                requested_amount: 20_000.0,
                requested_term_months: 60,
                ..base_form()
            },
        },
        DemoScenario {
            label: "Thin file with heavy obligations",
            form: ApplicationForm {
                credit_score: 500,
                monthly_income: 1000.0,
                monthly_expenses: 900.0,
                employment_tenure_months: 0,
                has_recent_delinquency: true,
                ..base_form()
            },
        },
        DemoScenario {
            label: "Large unsecured request",
            form: ApplicationForm {
                requested_amount: 15_000.0,
                requested_term_months: 120,
                ..base_form()
            },
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let policies = match args.policy {
        Some(policy) => vec![policy],
        None => vec![PolicyKind::Gated, PolicyKind::Points],
    };

    println!("Loan eligibility demo");

    for policy in policies {
        let service = EligibilityService::with_rate_source(
            EvaluationConfig::for_policy(policy),
            rate_source(args.seed),
        );

        println!("\n=== {} policy ===", policy);
        for scenario in demo_scenarios() {
            println!("\n{}", scenario.label);
            match service.assess(&scenario.form) {
                Ok(result) => println!("{}", render_result(&result)),
                Err(err) => println!("Rejected before evaluation: {err}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::eligibility::FixedRateOffset;
    use std::sync::Arc;

    #[test]
    fn scenarios_cover_every_gated_outcome() {
        let service = EligibilityService::new(EvaluationConfig::for_policy(PolicyKind::Gated));
        let outcomes: Vec<String> = demo_scenarios()
            .iter()
            .map(|scenario| match service.assess(&scenario.form) {
                Ok(result) => result.decision_label().to_string(),
                Err(_) => "invalid".to_string(),
            })
            .collect();

        assert!(outcomes.contains(&"approved".to_string()));
        assert!(outcomes.contains(&"denied".to_string()));
        assert!(outcomes.contains(&"invalid".to_string()));
    }

    #[test]
    fn property_scenario_scores_full_marks_under_points() {
        let scenario = &demo_scenarios()[2];
        let service = EligibilityService::with_rate_source(
            EvaluationConfig::for_policy(PolicyKind::Points),
            Arc::new(FixedRateOffset(0.0)),
        );

        let result = service.assess(&scenario.form).expect("valid scenario");

        assert_eq!(result.score, Some(100));
        assert_eq!(result.interest_rate(), Some(8.5));
    }
}
