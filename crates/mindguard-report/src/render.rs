use mindguard_core::models::assessment::AssessmentOutcome;
use tera::{Context, Tera};

use crate::error::ReportError;
use crate::view::SummaryView;

pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

/// Built-in plain-text summary.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.txt.tera");

/// Render the built-in summary for an outcome.
pub fn render_summary(outcome: &AssessmentOutcome) -> Result<String, ReportError> {
    render_template(SUMMARY_TEMPLATE_NAME, DEFAULT_SUMMARY_TEMPLATE, outcome)
}

/// Render `outcome` through a caller-supplied summary template.
///
/// Templates see a [`SummaryView`], so scores and percentages arrive already
/// formatted. Parse failures are [`ReportError::TemplateParse`].
pub fn render_template(
    template_name: &str,
    template_content: &str,
    outcome: &AssessmentOutcome,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(SummaryView::from(outcome))?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}
