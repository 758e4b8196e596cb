use loan_eligibility::eligibility::evaluation::format_money;
use loan_eligibility::eligibility::{Decision, EvaluationResult};

/// Multi-line, human-readable rendering of one evaluation.
pub(crate) fn render_result(result: &EvaluationResult) -> String {
    let mut lines = Vec::new();

    match &result.decision {
        Decision::Approved(terms) => {
            lines.push("Decision: APPROVED".to_string());
            lines.push(format!(
                "Approved amount: {}",
                format_money(terms.approved_amount)
            ));
            lines.push(format!("Annual interest rate: {:.2}%", terms.interest_rate));
            lines.push(format!("Term: {} months", terms.term_months));
            lines.push(format!(
                "Estimated installment: {}/month",
                format_money(terms.estimated_installment)
            ));
        }
        Decision::Conditional { advisory } => {
            lines.push("Decision: CONDITIONAL".to_string());
            lines.push(format!("Advisory: {advisory}"));
        }
        Decision::Denied { reason } => {
            lines.push("Decision: DENIED".to_string());
            lines.push(format!("Reason: {}", reason.summary()));
        }
    }

    lines.push(format!("Policy: {}", result.policy));
    if let Some(score) = result.score {
        lines.push(format!("Score: {score}/100"));
        for component in &result.components {
            lines.push(format!(
                "  - {:?}: {} ({})",
                component.factor, component.points, component.notes
            ));
        }
    }

    if result.recommendations.is_empty() {
        lines.push("Recommendations: none".to_string());
    } else {
        lines.push("Recommendations".to_string());
        for recommendation in &result.recommendations {
            lines.push(format!("- {recommendation}"));
        }
    }

    lines.join("\n")
}

/// Single-line rendering used for batch output.
pub(crate) fn render_summary_line(result: &EvaluationResult) -> String {
    let mut line = result.decision.summary();
    if let Some(score) = result.score {
        line.push_str(&format!(" [score {score}]"));
    }
    line
}
