//! Showcase sidebar navigation.

pub const SHOWCASE_ROOT: &str = "/showcase";

/// (route, label) in sidebar order
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("/showcase", "Showcase"),
    ("/showcase/dashboards", "Dashboards"),
    ("/showcase/components", "Components"),
    ("/showcase/forms", "Forms"),
    ("/showcase/theming", "Theming"),
    ("/showcase/accessibility", "Accessibility"),
    ("/showcase/motion", "Motion"),
];

/// Route of the entry to highlight: the longest one prefixing `pathname`
pub fn selected_route(pathname: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .map(|(route, _)| *route)
        .filter(|route| pathname.starts_with(route))
        .max_by_key(|route| route.len())
        .unwrap_or(SHOWCASE_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(selected_route("/showcase/components"), "/showcase/components");
        assert_eq!(selected_route("/showcase/forms/step-2"), "/showcase/forms");
        assert_eq!(selected_route("/showcase"), "/showcase");
        assert_eq!(selected_route("/elsewhere"), "/showcase");
    }
}
