//! Derivation Pipeline
//!
//! Pure function from (item collection, view state) to the rendered list plus
//! facet summaries. Facets always come from the full collection so the
//! filter widgets show global availability, not the current subset.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::highlight::{contains_folded, fold_case};
use crate::model::{CategorySet, Listing};
use crate::view_state::{SortKey, ViewState};

/// Item count per category plus the "All" aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts<C> {
    pub all: usize,
    /// One entry per category in `C::ALL` order, zero counts included
    pub by_category: Vec<(C, usize)>,
}

impl<C: CategorySet> CategoryCounts<C> {
    /// Count for a category filter value (`None` = "All")
    pub fn get(&self, category: Option<C>) -> usize {
        match category {
            None => self.all,
            Some(c) => self
                .by_category
                .iter()
                .find(|(k, _)| *k == c)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        }
    }
}

/// Filtered + sorted view with facets
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a, T: Listing> {
    pub items: Vec<&'a T>,
    /// Every tag across the full collection, deduplicated and sorted
    pub all_tags: Vec<String>,
    pub counts: CategoryCounts<T::Category>,
}

/// Run facets, filter and sort. Neither input is modified.
pub fn derive_view<'a, T: Listing>(
    items: &'a [T],
    state: &ViewState<T::Category>,
) -> DerivedView<'a, T> {
    let (all_tags, counts) = compute_facets(items);

    let needle = fold_case(&state.query);
    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| matches(*item, state, &needle))
        .collect();
    sort_items(&mut visible, state.sort);

    DerivedView {
        items: visible,
        all_tags,
        counts,
    }
}

/// Tag universe and per-category counts of the unfiltered collection
pub fn compute_facets<T: Listing>(items: &[T]) -> (Vec<String>, CategoryCounts<T::Category>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut by_category: Vec<(T::Category, usize)> =
        T::Category::ALL.iter().map(|c| (*c, 0)).collect();
    let mut all = 0;

    for item in items {
        for tag in item.tags() {
            seen.insert(tag.as_str());
        }
        if let Some(slot) = by_category.iter_mut().find(|(c, _)| *c == item.category()) {
            slot.1 += 1;
        }
        all += 1;
    }

    let mut all_tags: Vec<String> = seen.into_iter().map(str::to_string).collect();
    all_tags.sort_by(|a, b| locale_cmp(a, b));

    (all_tags, CategoryCounts { all, by_category })
}

/// Category AND text AND every selected tag. `needle` is the folded query.
fn matches<T: Listing>(item: &T, state: &ViewState<T::Category>, needle: &[char]) -> bool {
    let by_category = state.category.map_or(true, |c| item.category() == c);
    let by_query = contains_folded(&item.search_text(), needle);
    let by_tags = state
        .tags
        .iter()
        .all(|selected| item.tags().iter().any(|t| t == selected));
    by_category && by_query && by_tags
}

/// Stable sort; ties keep input order
pub fn sort_items<T: Listing>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::NameAsc => items.sort_by(|a, b| locale_cmp(a.name(), b.name())),
        SortKey::NameDesc => items.sort_by(|a, b| locale_cmp(b.name(), a.name())),
        SortKey::CategoryThenName => items.sort_by(|a, b| {
            locale_cmp(a.category().label(), b.category().label())
                .then_with(|| locale_cmp(a.name(), b.name()))
        }),
        SortKey::TagCountDesc => items.sort_by(|a, b| b.tags().len().cmp(&a.tags().len())),
    }
}

/// Case-insensitive ordering with a lowercase-first tie-break, so the order is
/// total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentCategory, ComponentDemo};

    fn scenario_items() -> Vec<ComponentDemo> {
        vec![
            ComponentDemo::new("comp-card", "Card", ComponentCategory::DataDisplay, &["elevation"]),
            ComponentDemo::new(
                "comp-data-table",
                "Data Table",
                ComponentCategory::DataDisplay,
                &["sortable", "filterable"],
            ),
            ComponentDemo::new("comp-stepper", "Form Stepper", ComponentCategory::Forms, &["async"]),
        ]
    }

    fn names<T: Listing>(view: &DerivedView<'_, T>) -> Vec<String> {
        view.items.iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_category_filter_sorted_a_to_z() {
        let items = scenario_items();
        let state = ViewState {
            category: Some(ComponentCategory::DataDisplay),
            ..ViewState::default()
        };
        let view = derive_view(&items, &state);
        assert_eq!(names(&view), vec!["Card", "Data Table"]);
    }

    #[test]
    fn test_tag_filter_is_conjunctive() {
        let items = scenario_items();
        let mut state = ViewState::default();
        state.tags = vec!["sortable".to_string()];
        assert_eq!(names(&derive_view(&items, &state)), vec!["Data Table"]);

        state.tags.push("elevation".to_string());
        assert!(derive_view(&items, &state).items.is_empty());
    }

    #[test]
    fn test_tag_count_sort_keeps_input_order_on_ties() {
        let items = scenario_items();
        let state = ViewState {
            sort: SortKey::TagCountDesc,
            ..ViewState::default()
        };
        assert_eq!(
            names(&derive_view(&items, &state)),
            vec!["Data Table", "Card", "Form Stepper"]
        );
    }

    #[test]
    fn test_query_matches_category_and_tags_case_insensitively() {
        let items = scenario_items();
        let mut state = ViewState::default();

        state.query = "FORMS".to_string();
        assert_eq!(names(&derive_view(&items, &state)), vec!["Form Stepper"]);

        state.query = "Filter".to_string();
        assert_eq!(names(&derive_view(&items, &state)), vec!["Data Table"]);

        state.query = "nothing-like-this".to_string();
        assert!(derive_view(&items, &state).items.is_empty());
    }

    #[test]
    fn test_visible_rows_are_the_highlighted_ones() {
        let items = vec![
            ComponentDemo::new("a", "İnput", ComponentCategory::Forms, &[]),
            ComponentDemo::new("b", "ΟΔΟΣ", ComponentCategory::Layout, &[]),
        ];
        for query in ["i", "οσ", "ος", "İn"] {
            let state = ViewState {
                query: query.to_string(),
                ..ViewState::default()
            };
            let visible = names(&derive_view(&items, &state));
            for item in &items {
                assert_eq!(
                    visible.contains(&item.name),
                    crate::highlight(&item.search_text(), query).is_match(),
                    "{:?} / {:?}",
                    item.name,
                    query
                );
            }
        }
    }

    #[test]
    fn test_facets_ignore_filters() {
        let items = scenario_items();
        let state = ViewState {
            query: "card".to_string(),
            category: Some(ComponentCategory::Forms),
            ..ViewState::default()
        };
        let view = derive_view(&items, &state);
        assert!(view.items.is_empty());
        assert_eq!(view.all_tags, vec!["async", "elevation", "filterable", "sortable"]);
        assert_eq!(view.counts.get(None), 3);
        assert_eq!(view.counts.get(Some(ComponentCategory::DataDisplay)), 2);
        assert_eq!(view.counts.get(Some(ComponentCategory::Forms)), 1);
        assert_eq!(view.counts.get(Some(ComponentCategory::Layout)), 0);
    }

    #[test]
    fn test_category_then_name_and_descending() {
        let items = scenario_items();
        let mut state = ViewState {
            sort: SortKey::CategoryThenName,
            ..ViewState::default()
        };
        assert_eq!(
            names(&derive_view(&items, &state)),
            vec!["Card", "Data Table", "Form Stepper"]
        );

        state.sort = SortKey::NameDesc;
        assert_eq!(
            names(&derive_view(&items, &state)),
            vec!["Form Stepper", "Data Table", "Card"]
        );
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zed", "alpha"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<ComponentDemo> = Vec::new();
        let view = derive_view(&items, &ViewState::default());
        assert!(view.items.is_empty());
        assert!(view.all_tags.is_empty());
        assert_eq!(view.counts.all, 0);
        assert_eq!(view.counts.by_category.len(), ComponentCategory::ALL.len());
    }
}
