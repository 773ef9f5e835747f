use proptest::prelude::*;
use showcase_core::derive::{compute_facets, derive_view};
use showcase_core::model::{CategorySet, ComponentCategory, ComponentDemo};
use showcase_core::view_state::{SortKey, ViewMode, ViewState};

const TAGS: [&str; 6] = ["async", "tokens", "sortable", "a11y", "Beta", "motion"];

fn category() -> impl Strategy<Value = ComponentCategory> {
    (0..ComponentCategory::ALL.len()).prop_map(|i| ComponentCategory::ALL[i])
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    (0..SortKey::ALL.len()).prop_map(|i| SortKey::ALL[i])
}

fn item() -> impl Strategy<Value = ComponentDemo> {
    (
        "[A-Za-z][A-Za-z ]{0,10}",
        category(),
        proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
    )
        .prop_map(|(name, cat, tags)| ComponentDemo::new(&name, &name, cat, &tags))
}

fn items() -> impl Strategy<Value = Vec<ComponentDemo>> {
    proptest::collection::vec(item(), 0..24)
}

fn view_state() -> impl Strategy<Value = ViewState<ComponentCategory>> {
    (
        any::<String>(),
        proptest::option::of(category()),
        proptest::collection::vec("[a-z0-9]([a-z0-9 _+&=%-]{0,8}[a-z0-9])?", 0..4),
        sort_key(),
        any::<bool>(),
    )
        .prop_map(|(query, category, tags, sort, list)| ViewState {
            query,
            category,
            tags,
            sort,
            view: if list { ViewMode::List } else { ViewMode::Grid },
        })
}

proptest! {
    #[test]
    fn prop_query_string_round_trip(state in view_state()) {
        let encoded = state.to_query_string();
        prop_assert_eq!(ViewState::from_query_string(&encoded), state);
    }

    #[test]
    fn prop_selecting_a_tag_never_grows_results(
        items in items(),
        mut state in view_state(),
        extra in proptest::sample::select(TAGS.to_vec()),
    ) {
        state.query.clear();
        let before: Vec<String> = derive_view(&items, &state).items.iter().map(|i| i.id.clone()).collect();
        if !state.has_tag(extra) {
            state.toggle_tag(extra);
        }
        let after = derive_view(&items, &state);
        prop_assert!(after.items.len() <= before.len());
        for kept in &after.items {
            prop_assert!(before.contains(&kept.id));
            prop_assert!(kept.tags.iter().any(|t| t == extra));
        }
    }

    #[test]
    fn prop_facets_ignore_filters(items in items(), state in view_state()) {
        let view = derive_view(&items, &state);
        let (all_tags, counts) = compute_facets(&items);
        prop_assert_eq!(&view.all_tags, &all_tags);
        prop_assert_eq!(&view.counts, &counts);
        prop_assert_eq!(view.counts.all, items.len());
    }

    #[test]
    fn prop_sort_is_stable(items in items(), sort in sort_key()) {
        let state = ViewState { sort, ..ViewState::default() };
        let view = derive_view(&items, &state);
        let position = |x: &ComponentDemo| items.iter().position(|i| std::ptr::eq(i, x));
        for pair in view.items.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tie = match sort {
                SortKey::TagCountDesc => a.tags.len() == b.tags.len(),
                SortKey::CategoryThenName => a.category == b.category && a.name == b.name,
                SortKey::NameAsc | SortKey::NameDesc => a.name == b.name,
            };
            if tie {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    #[test]
    fn prop_inputs_untouched(items in items(), state in view_state()) {
        let snapshot = items.clone();
        let state_before = state.clone();
        let _ = derive_view(&items, &state);
        prop_assert_eq!(items, snapshot);
        prop_assert_eq!(state, state_before);
    }
}
