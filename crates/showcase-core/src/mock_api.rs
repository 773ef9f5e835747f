//! Mocked HTTP Layer
//!
//! In-process stand-in for the backend. Routes `GET` paths to seed data and
//! answers with JSON bodies, the way a real endpoint would.

use serde::Serialize;

use crate::error::ApiError;
use crate::highlight::{contains_folded, fold_case};
use crate::model::{ComponentDemo, Kpi, Project};
use crate::seed;
use crate::view_state::decode_query;

pub const COMPONENTS_PATH: &str = "/api/components";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const KPIS_PATH: &str = "/api/kpis";

pub struct MockApi {
    components: Vec<ComponentDemo>,
    projects: Vec<Project>,
    kpis: Vec<Kpi>,
    fail: bool,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    /// Serve the built-in seed data
    pub fn new() -> Self {
        Self {
            components: seed::components(),
            projects: seed::projects(),
            kpis: seed::kpis(),
            fail: false,
        }
    }

    pub fn with_components(mut self, components: Vec<ComponentDemo>) -> Self {
        self.components = components;
        self
    }

    /// Make every request fail, for demoing the error state
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Handle `GET path?query` and return the JSON body
    pub fn get(&self, url: &str) -> Result<String, ApiError> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        if self.fail {
            return Err(ApiError::Unavailable(path.to_string()));
        }
        log::debug!("GET {}", url);

        match path {
            COMPONENTS_PATH => {
                let q = decode_query(query)
                    .get("q")
                    .map(|q| fold_case(q))
                    .unwrap_or_default();
                encode(&self.search_components(&q))
            }
            PROJECTS_PATH => encode(&self.projects),
            KPIS_PATH => encode(&self.kpis),
            _ => Err(ApiError::NotFound(path.to_string())),
        }
    }

    /// Server-side prefilter: substring on name only
    fn search_components(&self, q: &[char]) -> Vec<&ComponentDemo> {
        self.components
            .iter()
            .filter(|c| contains_folded(&c.name, q))
            .collect()
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Parse a JSON body returned by [`MockApi::get`]
pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentCategory;

    fn names(body: &str) -> Vec<String> {
        decode::<Vec<ComponentDemo>>(body)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_components_without_query_returns_all() {
        let api = MockApi::new();
        assert_eq!(names(&api.get(COMPONENTS_PATH).unwrap()).len(), 3);
    }

    #[test]
    fn test_components_prefilter_is_name_only() {
        let api = MockApi::new();
        assert_eq!(
            names(&api.get("/api/components?q=TABLE").unwrap()),
            vec!["Data Table"]
        );
        // tag match does not count server-side
        assert!(names(&api.get("/api/components?q=sortable").unwrap()).is_empty());
        assert_eq!(
            names(&api.get("/api/components?q=form%20step").unwrap()),
            vec!["Form Stepper"]
        );
    }

    #[test]
    fn test_serves_replaced_collection() {
        let api = MockApi::new().with_components(vec![
            ComponentDemo::new("comp-input", "İnput", ComponentCategory::Forms, &["text"]),
            ComponentDemo::new("comp-road", "ΟΔΟΣ", ComponentCategory::Layout, &[]),
        ]);
        assert_eq!(names(&api.get(COMPONENTS_PATH).unwrap()), vec!["İnput", "ΟΔΟΣ"]);
        assert_eq!(names(&api.get("/api/components?q=%CE%BF%CF%83").unwrap()), vec!["ΟΔΟΣ"]);
        // the dotted capital folds to two chars, a bare "i" is not inside it
        assert!(names(&api.get("/api/components?q=i").unwrap()).is_empty());
    }

    #[test]
    fn test_kpis_and_projects() {
        let api = MockApi::new();
        let kpis: Vec<Kpi> = decode(&api.get(KPIS_PATH).unwrap()).unwrap();
        assert_eq!(kpis[0].id, "users");
        let projects: Vec<Project> = decode(&api.get(PROJECTS_PATH).unwrap()).unwrap();
        assert_eq!(projects[0].kpis.len(), 3);
    }

    #[test]
    fn test_unknown_path_and_failure_switch() {
        let api = MockApi::new();
        assert_eq!(
            api.get("/api/nope"),
            Err(ApiError::NotFound("/api/nope".to_string()))
        );
        let down = MockApi::new().failing(true);
        assert!(matches!(down.get(KPIS_PATH), Err(ApiError::Unavailable(_))));
    }

    #[test]
    fn test_decode_error() {
        assert!(matches!(decode::<Vec<Kpi>>("{"), Err(ApiError::Decode(_))));
    }
}
