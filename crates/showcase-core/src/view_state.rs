//! View State
//!
//! The filter/sort/view configuration of a list, mirrored into the URL query
//! string so it survives navigation and can be shared as a link.
//!
//! | key    | meaning          | encoding                        |
//! |--------|------------------|---------------------------------|
//! | `q`    | free-text search | raw string                      |
//! | `cat`  | category filter  | category label, absent = "All"  |
//! | `tags` | selected tags    | comma-joined, trimmed           |
//! | `sort` | sort key         | `a-z`, `z-a`, `category`, `tags`|
//! | `view` | display mode     | `grid` or `list`                |
//!
//! Fields at their default are omitted from the serialized form. The codec is
//! pure; writing goes through a [`Navigator`].

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::CategorySet;

/// Label of the category sentinel that matches everything
pub const ALL_CATEGORIES: &str = "All";

/// Flat string-keyed query representation
pub type QueryMap = BTreeMap<String, String>;

/// Characters left unescaped in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ========================
// Field Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    CategoryThenName,
    TagCountDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::CategoryThenName,
        SortKey::TagCountDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "a-z",
            SortKey::NameDesc => "z-a",
            SortKey::CategoryThenName => "category",
            SortKey::TagCountDesc => "tags",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Sort: A → Z",
            SortKey::NameDesc => "Sort: Z → A",
            SortKey::CategoryThenName => "Sort: Category",
            SortKey::TagCountDesc => "Sort: Tag count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// Addressable fields of a [`ViewState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Query,
    Category,
    Tags,
    Sort,
    View,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Query, Field::Category, Field::Tags, Field::Sort, Field::View];

    /// Query-string key
    pub fn key(&self) -> &'static str {
        match self {
            Field::Query => "q",
            Field::Category => "cat",
            Field::Tags => "tags",
            Field::Sort => "sort",
            Field::View => "view",
        }
    }
}

/// Split a comma-joined tag field, trimming and dropping empty tokens
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ========================
// ViewState
// ========================

/// User-controlled filter/sort/view configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<C> {
    pub query: String,
    /// `None` is the "All" sentinel
    pub category: Option<C>,
    /// Conjunctive: an item must carry every selected tag
    pub tags: Vec<String>,
    pub sort: SortKey,
    pub view: ViewMode,
}

impl<C> Default for ViewState<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: None,
            tags: Vec::new(),
            sort: SortKey::default(),
            view: ViewMode::default(),
        }
    }
}

impl<C: CategorySet> ViewState<C> {
    /// Serialized value of one field; defaults render as their canonical value
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Query => self.query.clone(),
            Field::Category => self
                .category
                .map(|c| c.label())
                .unwrap_or(ALL_CATEGORIES)
                .to_string(),
            Field::Tags => self.tags.join(","),
            Field::Sort => self.sort.as_str().to_string(),
            Field::View => self.view.as_str().to_string(),
        }
    }

    /// Replace one field from its string form. Unrecognized values fall back
    /// to the field default.
    pub fn apply(&mut self, field: Field, value: &str) {
        match field {
            Field::Query => self.query = value.to_string(),
            Field::Category => self.category = C::from_label(value),
            Field::Tags => self.tags = parse_tags(value),
            Field::Sort => self.sort = SortKey::parse(value).unwrap_or_default(),
            Field::View => self.view = ViewMode::parse(value).unwrap_or_default(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.has_tag(tag) {
            self.tags.retain(|t| t != tag);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Flat map with default/empty fields omitted
    pub fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        if !self.query.is_empty() {
            map.insert(Field::Query.key().to_string(), self.query.clone());
        }
        if let Some(cat) = self.category {
            map.insert(Field::Category.key().to_string(), cat.label().to_string());
        }
        if !self.tags.is_empty() {
            map.insert(Field::Tags.key().to_string(), self.tags.join(","));
        }
        if self.sort != SortKey::default() {
            map.insert(Field::Sort.key().to_string(), self.sort.as_str().to_string());
        }
        if self.view != ViewMode::default() {
            map.insert(Field::View.key().to_string(), self.view.as_str().to_string());
        }
        map
    }

    /// Parse a flat map; absent or malformed fields take their defaults
    pub fn from_query_map(map: &QueryMap) -> Self {
        let mut state = Self::default();
        for field in Field::ALL {
            if let Some(value) = map.get(field.key()) {
                state.apply(field, value);
            }
        }
        state
    }

    /// Percent-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        encode_query(&self.to_query_map())
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::from_query_map(&decode_query(query))
    }
}

/// Encode a flat map as `k=v&k=v`
pub fn encode_query(map: &QueryMap) -> String {
    map.iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY_VALUE),
                utf8_percent_encode(v, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode `?k=v&k=v`; the first occurrence of a repeated key wins
pub fn decode_query(query: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        map.entry(decode_component(k))
            .or_insert_with(|| decode_component(v));
    }
    map
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

// ========================
// Store
// ========================

/// Performs a client-side navigation without reloading the document
pub trait Navigator {
    /// Replace the current history entry with `path?query`
    fn replace_query(&self, path: &str, query: &str);
}

/// Current [`ViewState`] plus the navigation side effect of writing it
pub struct ViewStateStore<C, N> {
    path: String,
    state: ViewState<C>,
    navigator: N,
}

impl<C: CategorySet, N: Navigator> ViewStateStore<C, N> {
    pub fn new(path: impl Into<String>, state: ViewState<C>, navigator: N) -> Self {
        Self {
            path: path.into(),
            state,
            navigator,
        }
    }

    /// Build from the location's current query string
    pub fn from_location(path: impl Into<String>, query: &str, navigator: N) -> Self {
        Self::new(path, ViewState::from_query_string(query), navigator)
    }

    pub fn state(&self) -> &ViewState<C> {
        &self.state
    }

    /// Current value of a field, or its default
    pub fn get(&self, field: Field) -> String {
        self.state.get(field)
    }

    /// Replace a field and navigate to the re-serialized state. Empty values
    /// drop the key from the URL.
    pub fn set(&mut self, field: Field, value: &str) {
        self.state.apply(field, value);
        self.commit();
    }

    pub fn set_category(&mut self, category: Option<C>) {
        self.state.category = category;
        self.commit();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
        self.commit();
    }

    pub fn clear_tags(&mut self) {
        self.state.tags.clear();
        self.commit();
    }

    fn commit(&self) {
        let query = self.state.to_query_string();
        log::debug!("view state -> {}?{}", self.path, query);
        self.navigator.replace_query(&self.path, &query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentCategory;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for &RecordingNavigator {
        fn replace_query(&self, path: &str, query: &str) {
            self.visits.borrow_mut().push(format!("{}?{}", path, query));
        }
    }

    type State = ViewState<ComponentCategory>;

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags("a, ,b"), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_default_state_serializes_empty() {
        assert_eq!(State::default().to_query_string(), "");
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let state = State::from_query_string("sort=newest&view=carousel&cat=Widgets");
        assert_eq!(state.sort, SortKey::NameAsc);
        assert_eq!(state.view, ViewMode::Grid);
        assert_eq!(state.category, None);
    }

    #[test]
    fn test_parse_full_query() {
        let state = State::from_query_string("?q=data%20table&cat=Data+Display&tags=sortable%2C%20filterable&sort=z-a&view=list");
        assert_eq!(state.query, "data table");
        assert_eq!(state.category, Some(ComponentCategory::DataDisplay));
        assert_eq!(state.tags, vec!["sortable", "filterable"]);
        assert_eq!(state.sort, SortKey::NameDesc);
        assert_eq!(state.view, ViewMode::List);
    }

    #[test]
    fn test_get_returns_defaults() {
        let state = State::default();
        assert_eq!(state.get(Field::Query), "");
        assert_eq!(state.get(Field::Category), "All");
        assert_eq!(state.get(Field::Tags), "");
        assert_eq!(state.get(Field::Sort), "a-z");
        assert_eq!(state.get(Field::View), "grid");
    }

    #[test]
    fn test_set_navigates_with_canonical_query() {
        let nav = RecordingNavigator::default();
        let mut store = ViewStateStore::<ComponentCategory, _>::from_location(
            "/showcase/components",
            "q=card&sort=tags",
            &nav,
        );

        store.set(Field::Query, "");
        store.set(Field::Category, "Forms");
        store.set(Field::Category, "All");
        store.toggle_tag("async");

        let visits = nav.visits.borrow();
        assert_eq!(
            *visits,
            vec![
                "/showcase/components?sort=tags".to_string(),
                "/showcase/components?cat=Forms&sort=tags".to_string(),
                "/showcase/components?sort=tags".to_string(),
                "/showcase/components?sort=tags&tags=async".to_string(),
            ]
        );
    }

    #[test]
    fn test_store_state_tracks_writes() {
        let nav = RecordingNavigator::default();
        let mut store =
            ViewStateStore::<ComponentCategory, _>::from_location("/showcase/components", "", &nav);
        assert_eq!(store.state(), &State::default());

        store.set_category(Some(ComponentCategory::Layout));
        store.toggle_tag("grid");
        store.toggle_tag("flex");
        store.clear_tags();

        assert_eq!(store.state().category, Some(ComponentCategory::Layout));
        assert!(store.state().tags.is_empty());
        assert_eq!(store.get(Field::Category), "Layout");
        assert_eq!(nav.visits.borrow().last().map(String::as_str), Some("/showcase/components?cat=Layout"));
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let mut state = State::default();
        state.toggle_tag("async");
        state.toggle_tag("tokens");
        assert_eq!(state.tags, vec!["async", "tokens"]);
        state.toggle_tag("async");
        assert_eq!(state.tags, vec!["tokens"]);
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let map = decode_query("q=first&q=second");
        assert_eq!(map.get("q").map(String::as_str), Some("first"));
    }
}
