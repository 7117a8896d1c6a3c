//! Feature grid and numbered process steps.

use crate::domain::entities::{Feature, ProcessStep};
use askama::Template;

/// Renders `templates/components/features.html`.
#[derive(Template)]
#[template(path = "components/features.html")]
pub struct FeatureGrid<'a> {
    pub features: &'a [Feature],
}

/// Renders `templates/components/process.html`; numbering starts at 1.
#[derive(Template)]
#[template(path = "components/process.html")]
pub struct ProcessSteps<'a> {
    pub steps: &'a [ProcessStep],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_cards() {
        let features = vec![
            Feature::new("Licensed", "State certified contractor"),
            Feature::new("Insured", "General liability and workers' comp"),
        ];
        let html = FeatureGrid { features: &features }.render().unwrap();

        assert_eq!(html.matches("class=\"feature-card\"").count(), 2);
        assert!(html.contains("<h3>Licensed</h3>"));
    }

    #[test]
    fn test_process_steps_numbered_from_one() {
        let steps = vec![
            ProcessStep::new("Consultation", ""),
            ProcessStep::new("Estimate", ""),
            ProcessStep::new("Build", ""),
        ];
        let html = ProcessSteps { steps: &steps }.render().unwrap();

        assert!(html.contains("<span class=\"process__number\">1</span>"));
        assert!(html.contains("<span class=\"process__number\">3</span>"));
        assert!(!html.contains("<span class=\"process__number\">0</span>"));
    }
}
