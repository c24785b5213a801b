//! End-to-end wizard sessions through the public API.
//!
//! Each test drives a `StackBuilder` the way a front end would: toggles,
//! navigation, and a submitter call before moving to success.

use std::time::Duration;

use stackfit_core::{
    Catalog, ContactForm, FlowStep, MockSubmitter, Problem, StackBuilder, Submission, SubmitError,
    Submitter, tree,
};

struct FailingSubmitter;

#[async_trait::async_trait]
impl Submitter for FailingSubmitter {
    async fn submit(&self, _submission: &Submission) -> Result<(), SubmitError> {
        Err(SubmitError::Failed("service unavailable".to_string()))
    }
}

fn contact_form() -> ContactForm {
    ContactForm {
        name: "Grace".to_string(),
        email: "grace@example.org".to_string(),
        problems: vec![Problem::NoisyAlerts, Problem::CrossTeam],
        additional_info: Some("We use custom auth for K8s".to_string()),
        accept_terms: true,
    }
}

async fn submit_and_advance(builder: &mut StackBuilder, submitter: &dyn Submitter) {
    let submission = Submission::new(contact_form(), builder).unwrap();
    if submitter.submit(&submission).await.is_ok() {
        builder.go_to_success();
    }
}

#[test]
fn every_option_toggles_back_to_empty() {
    let catalog = Catalog::builtin();
    let mut builder = StackBuilder::new(catalog.clone());

    for category in catalog.categories() {
        for id in tree::category_option_ids(category) {
            builder.toggle(id.as_str(), category.id.as_str());
            builder.toggle(id.as_str(), category.id.as_str());
            assert!(builder.selected_options().is_empty(), "{id}");
        }
    }
}

#[test]
fn single_select_clears_orphaned_sub_selections() {
    let catalog = Catalog::from_toml_str(
        r#"
[[categories]]
id = "cloud"
label = "Cloud"

[[categories.options]]
id = "aws"
label = "AWS"
sub_options = [{ id = "ecs", label = "ECS" }, { id = "eks", label = "EKS" }]

[[categories.options]]
id = "azure"
label = "Azure"

[[assessment_levels]]
min = 0
max = 1
title = "Any"
description = "Any"
icon = "empty"
ready = false
"#,
    )
    .unwrap();
    let mut builder = StackBuilder::new(catalog);

    builder.toggle("aws", "cloud");
    builder.toggle("eks", "cloud");
    assert!(builder.is_selected("eks"));

    builder.toggle("azure", "cloud");
    assert!(builder.is_selected("azure"));
    assert!(!builder.is_selected("aws"));
    assert!(!builder.is_selected("eks"));
    assert_eq!(builder.selected_options().len(), 1);
}

#[test]
fn assessment_boundaries_across_a_session() {
    let mut builder = StackBuilder::default();
    let steps = [
        ("slack", "communication", "Insufficient stack coverage", false),
        ("loki", "logs", "Basic coverage", true),
        ("kubernetes", "infrastructure", "Good coverage", true),
        ("github", "source-code", "Good coverage", true),
        ("gcp-metrics", "metrics", "Complete coverage", true),
    ];

    assert_eq!(builder.assessment_level().title, "Select your stack");
    for (count, (option, category, title, ready)) in steps.into_iter().enumerate() {
        builder.toggle(option, category);
        let snap = builder.snapshot();
        assert_eq!(snap.enabled_categories_count, count + 1);
        assert_eq!(snap.assessment_level.title, title);
        assert_eq!(snap.assessment_level.ready, ready);
        assert_eq!(snap.can_continue, ready);
    }
}

#[tokio::test(start_paused = true)]
async fn full_session_reaches_success_and_resets() {
    let mut builder = StackBuilder::default();
    builder.toggle("slack", "communication");
    builder.go_to_connect();
    assert_eq!(builder.current_step(), FlowStep::Select);

    builder.toggle("aws", "infrastructure");
    builder.toggle("ecs", "infrastructure");
    builder.toggle("datadog-logs", "logs");
    builder.go_to_connect();
    assert_eq!(builder.current_step(), FlowStep::Connect);

    submit_and_advance(&mut builder, &MockSubmitter::new(Duration::from_millis(1000))).await;
    assert_eq!(builder.current_step(), FlowStep::Success);

    builder.reset_state();
    let snap = builder.snapshot();
    assert!(snap.selected_options.is_empty());
    assert_eq!(snap.current_step, FlowStep::Select);
    assert_eq!(snap.assessment_level.title, "Select your stack");
}

#[tokio::test]
async fn failed_submission_stays_on_connect() {
    let mut builder = StackBuilder::default();
    builder.toggle("slack", "communication");
    builder.toggle("prometheus", "metrics");
    builder.go_to_connect();

    submit_and_advance(&mut builder, &FailingSubmitter).await;

    assert_eq!(builder.current_step(), FlowStep::Connect);
    assert_eq!(builder.selected_options().len(), 2);
}
