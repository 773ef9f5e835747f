//! Seed data served by the mocked API and the static showcase screens.

use crate::model::{
    ComponentCategory, ComponentDemo, Complexity, Kpi, Project, Status, Tile, TileCategory,
};

const COVER: &str = "https://postimg.cc/Dm3cqnBQ";

pub const REPO_URL: &str = "https://github.com/you/teams-hq";

fn demo(
    id: &str,
    name: &str,
    category: ComponentCategory,
    complexity: Complexity,
    tags: &[&str],
    description: &str,
    status: Status,
) -> ComponentDemo {
    ComponentDemo {
        complexity,
        cover: COVER.to_string(),
        description: Some(description.to_string()),
        status: Some(status),
        ..ComponentDemo::new(id, name, category, tags)
    }
}

pub fn components() -> Vec<ComponentDemo> {
    vec![
        demo(
            "comp-card",
            "Card",
            ComponentCategory::DataDisplay,
            Complexity::Basic,
            &["elevation", "tokens"],
            "On-brand surface with gradient border.",
            Status::Updated,
        ),
        demo(
            "comp-data-table",
            "Data Table",
            ComponentCategory::DataDisplay,
            Complexity::Advanced,
            &["virtualized", "sortable", "filterable"],
            "High-performance table with sorting and filtering.",
            Status::New,
        ),
        demo(
            "comp-stepper",
            "Form Stepper",
            ComponentCategory::Forms,
            Complexity::Intermediate,
            &["async", "validation"],
            "Multi-step form pattern with validation and async edges.",
            Status::Updated,
        ),
    ]
}

fn kpi(id: &str, label: &str, value: f64, delta: Option<f64>) -> Kpi {
    Kpi {
        id: id.to_string(),
        label: label.to_string(),
        value,
        delta,
    }
}

pub fn kpis() -> Vec<Kpi> {
    vec![
        kpi("users", "Active Users", 12450.0, Some(8.3)),
        kpi("retention", "30d Retention %", 41.2, Some(1.4)),
        kpi("nps", "NPS", 62.0, Some(3.0)),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        id: "teams-hq".to_string(),
        title: "Teams HQ — SaaS Analytics Admin".to_string(),
        description:
            "Token-driven theming, complex tables, async forms, charts, and a11y-first UX."
                .to_string(),
        highlights: strings(&["Design System", "Mocked API", "Virtualized Table", "WCAG patterns"]),
        badges: strings(&["Rust", "Leptos", "WASM", "CSS variables"]),
        hero: "/mock-imgs/paws-hero.png".to_string(),
        url: None,
        repo: Some(REPO_URL.to_string()),
        components: strings(&["comp-card", "comp-data-table", "comp-stepper"]),
        kpis: vec![
            kpi("k1", "TTI (ms)", 1100.0, Some(-12.0)),
            kpi("k2", "CLS", 0.02, None),
            kpi("k3", "Lighthouse UI", 98.0, None),
        ],
    }]
}

fn tile(
    href: &str,
    title: &str,
    desc: &str,
    tags: &[&str],
    category: TileCategory,
    status: Option<Status>,
) -> Tile {
    Tile {
        href: href.to_string(),
        title: title.to_string(),
        desc: desc.to_string(),
        tags: strings(tags),
        category,
        status,
    }
}

pub fn tiles() -> Vec<Tile> {
    vec![
        tile(
            "/showcase/dashboards",
            "Dashboards",
            "KPIs, charts, and insights.",
            &["Charts", "KPIs", "Cards"],
            TileCategory::DataViz,
            Some(Status::Updated),
        ),
        tile(
            "/showcase/components",
            "Components",
            "Reusable UI, themed & accessible.",
            &["Buttons", "Tables", "Patterns"],
            TileCategory::Product,
            None,
        ),
        tile(
            "/showcase/forms",
            "Forms",
            "Multi-step, validation, async UX.",
            &["Validation", "Steps", "Async"],
            TileCategory::Forms,
            Some(Status::New),
        ),
        tile(
            "/showcase/theming",
            "Theming",
            "Tokens + dark / light in one place.",
            &["Tokens", "Dark/Light"],
            TileCategory::Theming,
            None,
        ),
        tile(
            "/showcase/accessibility",
            "Accessibility",
            "WCAG-friendly patterns.",
            &["Focus", "Landmarks"],
            TileCategory::A11y,
            None,
        ),
        tile(
            "/showcase/motion",
            "Motion",
            "Micro-interactions and presence.",
            &["Transitions", "Presence"],
            TileCategory::Motion,
            None,
        ),
    ]
}

/// Row of the dashboards "Top Teams" table
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub team: &'static str,
    pub active: u32,
    pub conversion: f64,
    pub delta: i32,
}

pub const TOP_TEAMS: [TeamRow; 4] = [
    TeamRow { team: "Growth", active: 3240, conversion: 3.2, delta: 6 },
    TeamRow { team: "Sales", active: 2801, conversion: 4.5, delta: 2 },
    TeamRow { team: "Support", active: 1950, conversion: 2.2, delta: -1 },
    TeamRow { team: "Ops", active: 1543, conversion: 1.8, delta: 3 },
];

/// `Team,Active Users,Conversion %,Delta` rows for export
pub fn teams_csv(rows: &[TeamRow]) -> String {
    let mut out = String::from("Team,Active Users,Conversion %,Delta\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            row.team, row.active, row.conversion, row.delta
        ));
    }
    out
}

/// Leptos usage snippet for a component demo, shown in the preview drawer
pub fn usage_snippet(demo: &ComponentDemo) -> String {
    let props = demo
        .tags
        .iter()
        .map(|t| format!("{}=true", t.replace(['-', ' '], "_")))
        .collect::<Vec<_>>()
        .join(" ");
    let component = demo.name.replace(' ', "");
    format!(
        "```rust\nview! {{\n    <{} {}>\n        \"{}\"\n    </{}>\n}}\n```",
        component,
        props,
        demo.description.as_deref().unwrap_or(&demo.name),
        component
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_component_ids_unique() {
        let items = components();
        let ids: HashSet<_> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_project_references_known_components() {
        let ids: HashSet<String> = components().into_iter().map(|c| c.id).collect();
        for project in projects() {
            assert!(project.components.iter().all(|id| ids.contains(id)));
        }
    }

    #[test]
    fn test_teams_csv() {
        let csv = teams_csv(&TOP_TEAMS[..2]);
        assert_eq!(
            csv,
            "Team,Active Users,Conversion %,Delta\nGrowth,3240,3.2,6\nSales,2801,4.5,2\n"
        );
    }

    #[test]
    fn test_usage_snippet_is_rust_fence() {
        let card = &components()[0];
        let snippet = usage_snippet(card);
        assert!(snippet.starts_with("```rust\n"));
        assert!(snippet.contains("<Card elevation=true tokens=true>"));
    }
}
