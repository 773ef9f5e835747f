//! Showcase Models
//!
//! Data structures served by the mocked API and rendered by the gallery.

use serde::{Deserialize, Serialize};

// ========================
// Pipeline Traits
// ========================

/// A fixed, ordered set of categories
pub trait CategorySet: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every category, in display order
    const ALL: &'static [Self];

    /// Display label, also the URL `cat` value
    fn label(self) -> &'static str;

    /// Parse a label back; unknown labels yield `None`
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Anything the derivation pipeline can filter, sort and facet
pub trait Listing {
    type Category: CategorySet;

    fn name(&self) -> &str;
    fn category(&self) -> Self::Category;
    fn tags(&self) -> &[String];

    /// Text the free-text query is matched against
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name(),
            self.category().label(),
            self.tags().join(" ")
        )
    }
}

// ========================
// Component Demos
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    Navigation,
    Forms,
    Feedback,
    #[serde(rename = "Data Display")]
    DataDisplay,
    Layout,
}

impl CategorySet for ComponentCategory {
    const ALL: &'static [Self] = &[
        ComponentCategory::Navigation,
        ComponentCategory::Forms,
        ComponentCategory::Feedback,
        ComponentCategory::DataDisplay,
        ComponentCategory::Layout,
    ];

    fn label(self) -> &'static str {
        match self {
            ComponentCategory::Navigation => "Navigation",
            ComponentCategory::Forms => "Forms",
            ComponentCategory::Feedback => "Feedback",
            ComponentCategory::DataDisplay => "Data Display",
            ComponentCategory::Layout => "Layout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

/// Release marker shown as a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    New,
    Updated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Updated => "Updated",
        }
    }
}

/// A component in the gallery (matches the `/api/components` payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDemo {
    pub id: String,
    pub name: String,
    pub category: ComponentCategory,
    #[serde(default)]
    pub complexity: Complexity,
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentDemo {
    pub fn new(id: &str, name: &str, category: ComponentCategory, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            complexity: Complexity::default(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover: String::new(),
            status: None,
            description: None,
        }
    }
}

impl Listing for ComponentDemo {
    type Category = ComponentCategory;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> ComponentCategory {
        self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ========================
// Showcase Tiles
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    Product,
    #[serde(rename = "Data Viz")]
    DataViz,
    Forms,
    Theming,
    A11y,
    Motion,
}

impl CategorySet for TileCategory {
    const ALL: &'static [Self] = &[
        TileCategory::Product,
        TileCategory::DataViz,
        TileCategory::Forms,
        TileCategory::Theming,
        TileCategory::A11y,
        TileCategory::Motion,
    ];

    fn label(self) -> &'static str {
        match self {
            TileCategory::Product => "Product",
            TileCategory::DataViz => "Data Viz",
            TileCategory::Forms => "Forms",
            TileCategory::Theming => "Theming",
            TileCategory::A11y => "A11y",
            TileCategory::Motion => "Motion",
        }
    }
}

/// An entry in the showcase grid linking to a demo screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub href: String,
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    pub category: TileCategory,
    pub status: Option<Status>,
}

impl Listing for Tile {
    type Category = TileCategory;

    fn name(&self) -> &str {
        &self.title
    }

    fn category(&self) -> TileCategory {
        self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    // Tiles are found by what they show, not by their category label
    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.desc, self.tags.join(" "))
    }
}

// ========================
// Landing + Dashboards
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl Kpi {
    /// Badge text for the delta, e.g. `▲ 8.3%` / `▼ 12%`
    pub fn delta_label(&self) -> Option<String> {
        self.delta.map(|d| {
            let arrow = if d >= 0.0 { '▲' } else { '▼' };
            format!("{} {}%", arrow, d.abs())
        })
    }

    /// Whole numbers get thousands separators, fractions print as-is
    pub fn display_value(&self) -> String {
        if self.value.fract() != 0.0 || self.value.abs() >= 1e15 {
            return self.value.to_string();
        }
        let digits = (self.value.abs() as u64).to_string();
        let mut out = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if self.value < 0.0 {
            out.insert(0, '-');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub badges: Vec<String>,
    pub hero: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Ids of the component demos this project uses
    pub components: Vec<String>,
    pub kpis: Vec<Kpi>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in ComponentCategory::ALL {
            assert_eq!(ComponentCategory::from_label(cat.label()), Some(*cat));
        }
        assert_eq!(ComponentCategory::from_label("data display"), None);
        assert_eq!(TileCategory::from_label("Data Viz"), Some(TileCategory::DataViz));
    }

    #[test]
    fn test_component_wire_format() {
        let json = r#"{"id":"comp-card","name":"Card","category":"Data Display","complexity":"basic","tags":["elevation"],"cover":"","status":"Updated"}"#;
        let demo: ComponentDemo = serde_json::from_str(json).unwrap();
        assert_eq!(demo.category, ComponentCategory::DataDisplay);
        assert_eq!(demo.status, Some(Status::Updated));
        assert!(demo.description.is_none());
    }

    #[test]
    fn test_search_text_joins_name_category_tags() {
        let demo = ComponentDemo::new("x", "Data Table", ComponentCategory::DataDisplay, &["sortable", "filterable"]);
        assert_eq!(demo.search_text(), "Data Table Data Display sortable filterable");
    }

    #[test]
    fn test_kpi_delta_label() {
        let up = Kpi { id: "a".into(), label: "NPS".into(), value: 62.0, delta: Some(3.0) };
        let down = Kpi { id: "b".into(), label: "TTI".into(), value: 1100.0, delta: Some(-12.0) };
        assert_eq!(up.delta_label().as_deref(), Some("▲ 3%"));
        assert_eq!(down.delta_label().as_deref(), Some("▼ 12%"));
    }

    #[test]
    fn test_kpi_display_value() {
        let kpi = |value| Kpi { id: "k".into(), label: "k".into(), value, delta: None };
        assert_eq!(kpi(12450.0).display_value(), "12,450");
        assert_eq!(kpi(1100.0).display_value(), "1,100");
        assert_eq!(kpi(98.0).display_value(), "98");
        assert_eq!(kpi(41.2).display_value(), "41.2");
        assert_eq!(kpi(0.02).display_value(), "0.02");
        assert_eq!(kpi(-1234567.0).display_value(), "-1,234,567");
    }
}
