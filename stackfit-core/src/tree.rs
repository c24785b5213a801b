//! Pure traversal helpers over the option tree.
//!
//! Every function here is side-effect free and recomputes its answer from
//! the catalog and the selection set it is handed. Nothing is memoised.

use std::collections::{BTreeMap, HashSet};

use crate::catalog::{Category, CategoryId, OptionId, StackOption};

/// Depth-first search for an option by id, descending into sub-options.
pub fn find_option<'a>(options: &'a [StackOption], id: &str) -> Option<&'a StackOption> {
    for option in options {
        if option.id.as_str() == id {
            return Some(option);
        }
        if let Some(found) = find_option(&option.sub_options, id) {
            return Some(found);
        }
    }
    None
}

/// Every id reachable below `option`, parent-first in declaration order.
///
/// The option's own id is not included.
pub fn descendant_ids(option: &StackOption) -> Vec<&OptionId> {
    let mut ids = Vec::new();
    collect_descendants(option, &mut ids);
    ids
}

fn collect_descendants<'a>(option: &'a StackOption, ids: &mut Vec<&'a OptionId>) {
    for sub in &option.sub_options {
        ids.push(&sub.id);
        collect_descendants(sub, ids);
    }
}

/// Every option id in the category, top-level options and all descendants.
pub fn category_option_ids(category: &Category) -> Vec<&OptionId> {
    let mut ids = Vec::new();
    for option in &category.options {
        ids.push(&option.id);
        collect_descendants(option, &mut ids);
    }
    ids
}

/// Options in display order.
///
/// Each option is followed immediately by its sub-options if and only if the
/// option itself is selected. Sub-options of an unselected parent are
/// omitted, and the rule applies again at every depth.
pub fn flatten_for_display<'a>(
    options: &'a [StackOption],
    selected: &HashSet<OptionId>,
) -> Vec<&'a StackOption> {
    let mut flattened = Vec::new();
    push_visible(options, selected, &mut flattened);
    flattened
}

fn push_visible<'a>(
    options: &'a [StackOption],
    selected: &HashSet<OptionId>,
    out: &mut Vec<&'a StackOption>,
) {
    for option in options {
        out.push(option);
        if selected.contains(option.id.as_str()) {
            push_visible(&option.sub_options, selected, out);
        }
    }
}

/// True if any option in the category, at any depth, is selected.
pub fn category_has_selection(category: &Category, selected: &HashSet<OptionId>) -> bool {
    category_option_ids(category)
        .into_iter()
        .any(|id| selected.contains(id))
}

/// Coverage flag for every category.
pub fn category_status_map(
    categories: &[Category],
    selected: &HashSet<OptionId>,
) -> BTreeMap<CategoryId, bool> {
    categories
        .iter()
        .map(|category| {
            (
                category.id.clone(),
                category_has_selection(category, selected),
            )
        })
        .collect()
}

/// Number of categories with at least one selection.
pub fn count_enabled_categories(categories: &[Category], selected: &HashSet<OptionId>) -> usize {
    categories
        .iter()
        .filter(|category| category_has_selection(category, selected))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn selection(ids: &[&str]) -> HashSet<OptionId> {
        ids.iter().map(|id| OptionId::from(*id)).collect()
    }

    fn deep_option() -> StackOption {
        StackOption::new("cloud", "Cloud").with_sub_options(vec![
            StackOption::new("compute", "Compute").with_sub_options(vec![
                StackOption::new("vm", "VM"),
                StackOption::new("batch", "Batch"),
            ]),
            StackOption::new("storage", "Storage"),
        ])
    }

    // ==================== find_option Tests ====================

    #[test]
    fn find_option_top_level() {
        let catalog = Catalog::builtin();
        let logs = catalog.category("logs").unwrap();
        let found = find_option(&logs.options, "loki").unwrap();
        assert_eq!(found.label, "Loki");
    }

    #[test]
    fn find_option_searches_sub_options() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        let found = find_option(&infra.options, "ecs").unwrap();
        assert_eq!(found.label, "ECS");
    }

    #[test]
    fn find_option_searches_all_depths() {
        let options = vec![deep_option()];
        assert_eq!(find_option(&options, "batch").unwrap().label, "Batch");
    }

    #[test]
    fn find_option_missing_returns_none() {
        let catalog = Catalog::builtin();
        let logs = catalog.category("logs").unwrap();
        assert!(find_option(&logs.options, "ecs").is_none());
    }

    // ==================== descendant_ids Tests ====================

    #[test]
    fn descendant_ids_empty_for_leaf() {
        let leaf = StackOption::new("slack", "Slack");
        assert!(descendant_ids(&leaf).is_empty());
    }

    #[test]
    fn descendant_ids_parent_first_depth_first() {
        let deep = deep_option();
        let ids: Vec<&str> = descendant_ids(&deep)
            .into_iter()
            .map(OptionId::as_str)
            .collect();
        assert_eq!(ids, vec!["compute", "vm", "batch", "storage"]);
    }

    #[test]
    fn descendant_ids_excludes_self() {
        let option = deep_option();
        assert!(!descendant_ids(&option).contains(&&option.id));
    }

    // ==================== category_option_ids Tests ====================

    #[test]
    fn category_option_ids_includes_sub_options() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        let ids: Vec<&str> = category_option_ids(infra)
            .into_iter()
            .map(OptionId::as_str)
            .collect();
        assert_eq!(ids, vec!["kubernetes", "aws", "ecs", "azure", "gcp"]);
    }

    // ==================== flatten_for_display Tests ====================

    #[test]
    fn flatten_hides_sub_options_of_unselected_parent() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        let visible: Vec<&str> = flatten_for_display(&infra.options, &HashSet::new())
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(visible, vec!["kubernetes", "aws", "azure", "gcp"]);
    }

    #[test]
    fn flatten_injects_sub_options_after_selected_parent() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        let visible: Vec<&str> = flatten_for_display(&infra.options, &selection(&["aws"]))
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(visible, vec!["kubernetes", "aws", "ecs", "azure", "gcp"]);
    }

    #[test]
    fn flatten_child_selected_without_parent_stays_hidden() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        let visible = flatten_for_display(&infra.options, &selection(&["ecs"]));
        assert!(visible.iter().all(|o| o.id.as_str() != "ecs"));
    }

    #[test]
    fn flatten_expands_one_level_per_selected_node() {
        let options = vec![deep_option()];

        let only_root: Vec<&str> = flatten_for_display(&options, &selection(&["cloud"]))
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(only_root, vec!["cloud", "compute", "storage"]);

        let root_and_child: Vec<&str> =
            flatten_for_display(&options, &selection(&["cloud", "compute"]))
                .into_iter()
                .map(|o| o.id.as_str())
                .collect();
        assert_eq!(
            root_and_child,
            vec!["cloud", "compute", "vm", "batch", "storage"]
        );
    }

    // ==================== Coverage Tests ====================

    #[test]
    fn category_has_selection_tracks_logs() {
        let catalog = Catalog::builtin();
        let logs = catalog.category("logs").unwrap();

        assert!(!category_has_selection(logs, &HashSet::new()));
        for id in [
            "datadog-logs",
            "loki",
            "elasticsearch",
            "cloudwatch-logs",
            "gcp-logging",
            "splunk",
        ] {
            assert!(category_has_selection(logs, &selection(&[id])), "{id}");
        }
    }

    #[test]
    fn category_has_selection_counts_sub_options() {
        let catalog = Catalog::builtin();
        let infra = catalog.category("infrastructure").unwrap();
        assert!(category_has_selection(infra, &selection(&["ecs"])));
    }

    #[test]
    fn category_has_selection_ignores_other_categories() {
        let catalog = Catalog::builtin();
        let metrics = catalog.category("metrics").unwrap();
        assert!(!category_has_selection(metrics, &selection(&["datadog-logs"])));
    }

    #[test]
    fn status_map_has_entry_per_category() {
        let catalog = Catalog::builtin();
        let status = category_status_map(catalog.categories(), &selection(&["slack", "github"]));

        assert_eq!(status.len(), 5);
        assert_eq!(status.get("communication"), Some(&true));
        assert_eq!(status.get("source-code"), Some(&true));
        assert_eq!(status.get("logs"), Some(&false));
    }

    #[test]
    fn count_enabled_categories_counts_each_category_once() {
        let catalog = Catalog::builtin();
        let selected = selection(&["loki", "splunk", "prometheus"]);
        assert_eq!(count_enabled_categories(catalog.categories(), &selected), 2);
    }

    #[test]
    fn count_enabled_categories_ignores_unknown_ids() {
        let catalog = Catalog::builtin();
        let selected = selection(&["not-an-option"]);
        assert_eq!(count_enabled_categories(catalog.categories(), &selected), 0);
    }
}
