//! Non-interactive assessment of a list of option ids.

use std::io;

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;
use stackfit_core::{Catalog, FeedbackStatus, Snapshot, StackBuilder};

use super::render::{render_assessment_to, render_categories_to};

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Option ids to toggle, in order (e.g. slack loki aws ecs)
    #[arg(required = true, value_name = "OPTION_ID")]
    pub options: Vec<String>,

    /// Print the derived state as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AssessOutput<'a> {
    #[serde(flatten)]
    snapshot: Snapshot,
    feedback: Vec<FeedbackStatus<'a>>,
}

/// Toggle each id within its owning category.
///
/// Ids are toggled, not set: naming the same id twice deselects it.
fn build(catalog: Catalog, options: &[String]) -> Result<StackBuilder> {
    let mut builder = StackBuilder::new(catalog);
    for option_id in options {
        let Some((_, category)) = builder.catalog().find_option(option_id) else {
            bail!(
                "Unknown option '{}'. Run 'stackfit catalog' to list options",
                option_id
            );
        };
        let category_id = category.id.clone();
        builder.toggle(option_id, category_id.as_str());
    }
    Ok(builder)
}

pub fn run(args: AssessArgs, catalog: Catalog) -> Result<()> {
    let builder = build(catalog, &args.options)?;

    if args.json {
        let output = AssessOutput {
            snapshot: builder.snapshot(),
            feedback: builder.feedback(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut stdout = io::stdout();
        render_categories_to(&mut stdout, &builder)?;
        render_assessment_to(&mut stdout, &builder)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn build_resolves_owning_categories() {
        let builder = build(Catalog::builtin(), &ids(&["slack", "aws", "ecs"])).unwrap();

        assert_eq!(builder.enabled_categories_count(), 2);
        assert!(builder.is_selected("ecs"));
        assert!(builder.can_continue());
    }

    #[test]
    fn build_toggles_repeated_ids() {
        let builder = build(Catalog::builtin(), &ids(&["loki", "prometheus", "loki"])).unwrap();
        assert!(!builder.is_selected("loki"));
        assert_eq!(builder.enabled_categories_count(), 1);
    }

    #[test]
    fn build_applies_single_select() {
        let builder = build(Catalog::builtin(), &ids(&["slack", "teams"])).unwrap();
        assert!(!builder.is_selected("slack"));
        assert!(builder.is_selected("teams"));
    }

    #[test]
    fn build_rejects_unknown_ids() {
        let err = build(Catalog::builtin(), &ids(&["slack", "pagerduty"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option 'pagerduty'"));
    }

    #[test]
    fn json_output_flattens_snapshot() {
        let builder = build(Catalog::builtin(), &ids(&["github", "gcp-metrics"])).unwrap();
        let output = AssessOutput {
            snapshot: builder.snapshot(),
            feedback: builder.feedback(),
        };
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["enabled_categories_count"], 2);
        assert_eq!(json["can_continue"], true);
        assert_eq!(json["assessment_level"]["title"], "Basic coverage");
        assert_eq!(json["feedback"][0]["item"]["id"], "auto-receive");
        assert_eq!(json["feedback"][0]["active"], false);
    }
}
