//! Theme Variables
//!
//! Brand colors and corner radius exposed as CSS custom properties, persisted
//! as one JSON object.

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ThemeError};
use crate::storage::KeyValueStore;

/// Storage key of the serialized [`ThemeVars`]
pub const THEME_KEY: &str = "__teams_hq_theme_vars";

pub const VAR_PRIMARY: &str = "--brand-primary";
pub const VAR_SECONDARY: &str = "--brand-secondary";
pub const VAR_RADIUS: &str = "--brand-radius";

pub const RADIUS_MAX: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Value of the document's `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVars {
    pub primary: String,
    pub secondary: String,
    pub radius: u8,
}

impl Default for ThemeVars {
    fn default() -> Self {
        Self {
            primary: "#FF3B7E".to_string(),
            secondary: "#47C5FB".to_string(),
            radius: 14,
        }
    }
}

impl ThemeVars {
    pub fn set_primary(&mut self, input: &str) -> Result<(), ThemeError> {
        self.primary = normalize_color(input)?;
        Ok(())
    }

    pub fn set_secondary(&mut self, input: &str) -> Result<(), ThemeError> {
        self.secondary = normalize_color(input)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: u8) {
        self.radius = radius.min(RADIUS_MAX);
    }

    /// (custom property, value) pairs to write on the document root
    pub fn css_vars(&self) -> [(&'static str, String); 3] {
        [
            (VAR_PRIMARY, self.primary.clone()),
            (VAR_SECONDARY, self.secondary.clone()),
            (VAR_RADIUS, format!("{}px", self.radius)),
        ]
    }

    /// `:root { ... }` snippet for copying
    pub fn css_block(&self) -> String {
        let body: Vec<String> = self
            .css_vars()
            .iter()
            .map(|(name, value)| format!("  {}: {};", name, value))
            .collect();
        format!(":root {{\n{}\n}}", body.join("\n"))
    }

    pub fn try_load<S: KeyValueStore>(store: &S) -> Result<Option<Self>, StorageError> {
        let Some(raw) = store.read(THEME_KEY)? else {
            return Ok(None);
        };
        let corrupt = |reason: String| StorageError::Corrupt {
            key: THEME_KEY.to_string(),
            reason,
        };
        let parsed: ThemeVars = serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;

        let mut vars = ThemeVars::default();
        vars.set_primary(&parsed.primary)
            .and_then(|_| vars.set_secondary(&parsed.secondary))
            .map_err(|e| corrupt(e.to_string()))?;
        vars.set_radius(parsed.radius);
        Ok(Some(vars))
    }

    /// Persisted vars, or defaults when absent or unreadable
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(vars) => vars.unwrap_or_default(),
            Err(e) => {
                log::warn!("theme reset to defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn flush<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        let raw = serde_json::to_string(self).map_err(|e| StorageError::Write {
            key: THEME_KEY.to_string(),
            reason: e.to_string(),
        })?;
        store.write(THEME_KEY, &raw)
    }
}

/// Normalize `#rgb`, `#rrggbb` or `rgb(r, g, b[, a])` to upper-case `#RRGGBB`
pub fn normalize_color(input: &str) -> Result<String, ThemeError> {
    let s = input.trim();
    let invalid = || ThemeError::InvalidColor(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let full = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        return Ok(format!("#{}", full.to_ascii_uppercase()));
    }

    let lower = s.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let channels: Vec<&str> = inner.split(',').map(str::trim).collect();
    if !(3..=4).contains(&channels.len()) {
        return Err(invalid());
    }
    let mut out = String::from("#");
    for channel in &channels[..3] {
        let value: u8 = channel.parse().map_err(|_| invalid())?;
        out.push_str(&format!("{:02X}", value));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_normalize_color_forms() {
        assert_eq!(normalize_color("#ff3b7e").unwrap(), "#FF3B7E");
        assert_eq!(normalize_color("#abc").unwrap(), "#AABBCC");
        assert_eq!(normalize_color("rgb(255, 59, 126)").unwrap(), "#FF3B7E");
        assert_eq!(normalize_color("rgba(71,197,251,0.25)").unwrap(), "#47C5FB");
        assert!(normalize_color("#12345").is_err());
        assert!(normalize_color("rgb(300, 0, 0)").is_err());
        assert!(normalize_color("teal").is_err());
    }

    #[test]
    fn test_invalid_color_keeps_previous_value() {
        let mut vars = ThemeVars::default();
        assert!(vars.set_primary("nope").is_err());
        assert_eq!(vars.primary, "#FF3B7E");
    }

    #[test]
    fn test_radius_clamped() {
        let mut vars = ThemeVars::default();
        vars.set_radius(99);
        assert_eq!(vars.radius, RADIUS_MAX);
    }

    #[test]
    fn test_css_block() {
        let vars = ThemeVars::default();
        assert_eq!(
            vars.css_block(),
            ":root {\n  --brand-primary: #FF3B7E;\n  --brand-secondary: #47C5FB;\n  --brand-radius: 14px;\n}"
        );
    }

    #[test]
    fn test_persist_and_reload() {
        let store = MemoryStore::new();
        let mut vars = ThemeVars::default();
        vars.set_secondary("#0f0").unwrap();
        vars.set_radius(6);
        vars.flush(&store).unwrap();

        assert_eq!(ThemeVars::load(&store), vars);
    }

    #[test]
    fn test_corrupt_theme_loads_defaults() {
        let store = MemoryStore::new()
            .with_entry(THEME_KEY, r##"{"primary":"bogus","secondary":"#fff","radius":3}"##);
        assert!(ThemeVars::try_load(&store).is_err());
        assert_eq!(ThemeVars::load(&store), ThemeVars::default());
    }
}
