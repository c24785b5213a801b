//! Static catalog of categories, options, assessment levels and feedback.
//!
//! The catalog is immutable configuration. It is built once, validated, and
//! handed to a [`StackBuilder`](crate::StackBuilder) at construction.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tree;

/// Identifier of an option, unique across the whole catalog.
///
/// # Examples
///
/// ```
/// use stackfit_core::OptionId;
///
/// let id = OptionId::from("loki");
/// assert_eq!(id.as_str(), "loki");
/// assert_eq!(id.to_string(), "loki");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OptionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OptionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A selectable tool, possibly unlocking finer-grained sub-options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOption {
    pub id: OptionId,
    pub label: String,
    /// Display hint only. Coming-soon options can still be selected.
    #[serde(default, skip_serializing_if = "is_false")]
    pub coming_soon: bool,
    /// Opaque image identifier resolved by whoever renders the option.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_options: Vec<StackOption>,
}

impl StackOption {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: OptionId::from(id),
            label: label.to_string(),
            coming_soon: false,
            image: String::new(),
            sub_options: Vec::new(),
        }
    }

    pub fn image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    pub fn coming_soon(mut self) -> Self {
        self.coming_soon = true;
        self
    }

    pub fn with_sub_options(mut self, sub_options: Vec<StackOption>) -> Self {
        self.sub_options = sub_options;
        self
    }

    pub fn has_sub_options(&self) -> bool {
        !self.sub_options.is_empty()
    }
}

/// A named group of related options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    /// Informational. A required category does not gate continuing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Single-select categories clear their other options when one is picked.
    #[serde(default)]
    pub multi_select: bool,
    pub options: Vec<StackOption>,
}

impl Category {
    /// Category where picking an option replaces any previous pick.
    pub fn single(id: &str, label: &str, options: Vec<StackOption>) -> Self {
        Self {
            id: CategoryId::from(id),
            label: label.to_string(),
            required: false,
            multi_select: false,
            options,
        }
    }

    /// Category where options are toggled independently.
    pub fn multi(id: &str, label: &str, options: Vec<StackOption>) -> Self {
        Self {
            multi_select: true,
            ..Self::single(id, label, options)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Icon shown next to an assessment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentIcon {
    Empty,
    Warning,
    Check,
    Complete,
}

/// A fit rating for an inclusive range of enabled-category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentLevel {
    pub min: usize,
    pub max: usize,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub fit_text: String,
    #[serde(default)]
    pub fit_description: String,
    pub icon: AssessmentIcon,
    pub ready: bool,
}

impl AssessmentLevel {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// A capability that lights up once any of its trigger categories has coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub trigger_categories: Vec<CategoryId>,
}

/// Catalog as written in a TOML file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDef {
    pub categories: Vec<Category>,
    pub assessment_levels: Vec<AssessmentLevel>,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDef")]
pub struct Catalog {
    categories: Vec<Category>,
    assessment_levels: Vec<AssessmentLevel>,
    feedback: Vec<FeedbackItem>,
}

impl TryFrom<CatalogDef> for Catalog {
    type Error = Error;

    fn try_from(def: CatalogDef) -> Result<Self> {
        Self::new(def.categories, def.assessment_levels, def.feedback)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog, rejecting it if any structural invariant is broken.
    pub fn new(
        categories: Vec<Category>,
        assessment_levels: Vec<AssessmentLevel>,
        feedback: Vec<FeedbackItem>,
    ) -> Result<Self> {
        let catalog = Self {
            categories,
            assessment_levels,
            feedback,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let def: CatalogDef = toml::from_str(s)?;
        Self::try_from(def)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Check every invariant the selection engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::InvalidCatalog("no categories".to_string()));
        }

        let mut category_ids = HashSet::new();
        let mut option_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
            for id in tree::category_option_ids(category) {
                if !option_ids.insert(id.as_str()) {
                    return Err(Error::InvalidCatalog(format!(
                        "duplicate option id: {id}"
                    )));
                }
            }
        }

        // Levels must tile 0..=category_count in order, without gaps.
        let mut next = 0;
        for level in &self.assessment_levels {
            if level.min != next || level.max < level.min {
                return Err(Error::InvalidCatalog(format!(
                    "assessment level '{}' covers {}..={} but {} was expected next",
                    level.title, level.min, level.max, next
                )));
            }
            next = level.max + 1;
        }
        if next != self.categories.len() + 1 {
            return Err(Error::InvalidCatalog(format!(
                "assessment levels cover 0..{} but there are {} categories",
                next,
                self.categories.len()
            )));
        }

        for item in &self.feedback {
            if let Some(unknown) = item
                .trigger_categories
                .iter()
                .find(|id| !category_ids.contains(id.as_str()))
            {
                return Err(Error::InvalidCatalog(format!(
                    "feedback '{}' is triggered by unknown category: {unknown}",
                    item.id
                )));
            }
        }

        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn assessment_levels(&self) -> &[AssessmentLevel] {
        &self.assessment_levels
    }

    pub fn feedback(&self) -> &[FeedbackItem] {
        &self.feedback
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Find an option anywhere in the catalog, along with its owning category.
    pub fn find_option(&self, id: &str) -> Option<(&StackOption, &Category)> {
        self.categories.iter().find_map(|category| {
            tree::find_option(&category.options, id).map(|option| (option, category))
        })
    }

    /// Level whose range contains `count`.
    ///
    /// Falls back to the first level when nothing matches, which a validated
    /// catalog never hits for counts up to the number of categories.
    pub fn assessment_level(&self, count: usize) -> &AssessmentLevel {
        self.assessment_levels
            .iter()
            .find(|level| level.contains(count))
            .unwrap_or(&self.assessment_levels[0])
    }

    /// The shipped stack catalog.
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            assessment_levels: builtin_levels(),
            feedback: builtin_feedback(),
        }
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::single(
            "communication",
            "Communication",
            vec![
                StackOption::new("slack", "Slack").image("slack"),
                StackOption::new("teams", "Teams")
                    .image("teams")
                    .coming_soon(),
            ],
        )
        .required(),
        Category::multi(
            "logs",
            "Logs",
            vec![
                StackOption::new("datadog-logs", "Datadog").image("datadog"),
                StackOption::new("loki", "Loki").image("loki"),
                StackOption::new("elasticsearch", "Elasticsearch").image("elasticsearch"),
                StackOption::new("cloudwatch-logs", "CloudWatch").image("aws"),
                StackOption::new("gcp-logging", "GCP Logging").image("gcp"),
                StackOption::new("splunk", "Splunk")
                    .image("splunk")
                    .coming_soon(),
            ],
        ),
        Category::multi(
            "infrastructure",
            "Infrastructure",
            vec![
                StackOption::new("kubernetes", "Kubernetes").image("kubernetes"),
                StackOption::new("aws", "Amazon Web Services")
                    .image("aws")
                    .with_sub_options(vec![StackOption::new("ecs", "ECS").image("aws")]),
                StackOption::new("azure", "Azure").image("azure"),
                StackOption::new("gcp", "Google Cloud Platform").image("gcp"),
            ],
        ),
        Category::multi(
            "source-code",
            "Source Code",
            vec![
                StackOption::new("github", "GitHub").image("github"),
                StackOption::new("gitlab", "GitLab")
                    .image("gitlab")
                    .coming_soon(),
            ],
        ),
        Category::multi(
            "metrics",
            "Metrics",
            vec![
                StackOption::new("prometheus", "Prometheus").image("prometheus"),
                StackOption::new("datadog-metrics", "Datadog").image("datadog"),
                StackOption::new("cloudwatch-metrics", "AWS CloudWatch").image("aws"),
                StackOption::new("gcp-metrics", "GCP Metrics").image("gcp"),
            ],
        ),
    ]
}

fn level(
    count: usize,
    title: &str,
    description: &str,
    fit_text: &str,
    fit_description: &str,
    icon: AssessmentIcon,
    ready: bool,
) -> AssessmentLevel {
    AssessmentLevel {
        min: count,
        max: count,
        title: title.to_string(),
        description: description.to_string(),
        fit_text: fit_text.to_string(),
        fit_description: fit_description.to_string(),
        icon,
        ready,
    }
}

fn builtin_levels() -> Vec<AssessmentLevel> {
    use AssessmentIcon::*;

    vec![
        level(
            0,
            "Select your stack",
            "Select options to see coverage",
            "",
            "",
            Empty,
            false,
        ),
        level(
            1,
            "Insufficient stack coverage",
            "Requires logs or metrics integration",
            "Poor fit | 1/5 enabled",
            "Requires logs or metrics integration",
            Warning,
            false,
        ),
        level(
            2,
            "Basic coverage",
            "2/5 capabilities enabled",
            "Minimal fit | 2/5 enabled",
            "Ready to continue",
            Warning,
            true,
        ),
        level(
            3,
            "Good coverage",
            "3/5 capabilities enabled",
            "Good fit | 3/5 enabled",
            "Ready for comprehensive investigations",
            Check,
            true,
        ),
        level(
            4,
            "Good coverage",
            "4/5 capabilities enabled",
            "Good fit | 4/5 enabled",
            "Ready for comprehensive investigations",
            Check,
            true,
        ),
        level(
            5,
            "Complete coverage",
            "5/5 capabilities enabled",
            "Excellent fit | 5/5 enabled",
            "e2e investigations ready",
            Complete,
            true,
        ),
    ]
}

fn feedback(id: &str, title: &str, description: &str, trigger: &str) -> FeedbackItem {
    FeedbackItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        trigger_categories: vec![CategoryId::from(trigger)],
    }
}

fn builtin_feedback() -> Vec<FeedbackItem> {
    vec![
        feedback(
            "auto-receive",
            "Auto-receive alerts via Slack",
            "Cleric joins your Slack channels to receive alerts and respond with investigations automatically",
            "communication",
        ),
        feedback(
            "search-logs",
            "Search logs and trace errors",
            "Query log systems to find error patterns, trace request flows, and identify root causes across distributed services",
            "logs",
        ),
        feedback(
            "query-metrics",
            "Query metrics and detect anomalies",
            "Analyze time-series data to identify performance degradations, resource bottlenecks, and abnormal patterns",
            "metrics",
        ),
        feedback(
            "debug-infra",
            "Debug infrastructure state",
            "Run kubectl, AWS CLI, and other cloud tools to inspect pods, containers, deployments, and cloud resources during investigations",
            "infrastructure",
        ),
        feedback(
            "analyze-code",
            "Analyze code, deployments, and CI/CD",
            "Review recent code changes, examine deployment history, check CI/CD logs, and suggest code fixes based on error patterns",
            "source-code",
        ),
    ]
}
