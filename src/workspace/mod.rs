//! Fixture-backed workspace object store: listings, metadata and version
//! lookups, and assay table downloads for the survey objects the agent
//! can talk about.

pub mod fixtures;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};

/// Latest-version listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub object_type: &'static str,
    pub created_date: &'static str,
    pub created_by: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assays: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionSummary {
    pub version_id: &'static str,
    pub created_date: &'static str,
    pub created_by: &'static str,
    pub description: &'static str,
}

/// All-versions listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectVersionsSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub object_type: &'static str,
    pub versions: &'static [VersionSummary],
    pub total_versions: u32,
    pub latest_version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssayStat {
    pub element: &'static str,
    pub min_value: f64,
    pub max_value: f64,
    pub average_value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeInfo {
    Categorical {
        name: &'static str,
        values: &'static [&'static str],
        dominant_value: &'static str,
    },
    Numerical {
        name: &'static str,
        min_value: f64,
        max_value: f64,
        average_value: f64,
        unit: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CollectionStats {
    Drillholes { holes: u32, intervals: u32, total_length: f64 },
    Points { points: u32, area_coverage: f64 },
}

/// Detailed object record: spatial extent, assay statistics, attribute
/// descriptors and collection counts.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub object_type: &'static str,
    pub description: &'static str,
    pub created_date: &'static str,
    pub created_by: &'static str,
    pub bounding_box: BoundingBox,
    pub dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assays: Option<&'static [AssayStat]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<&'static [AttributeInfo]>,
    pub collections: CollectionStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataQuality {
    pub completeness: f64,
    pub accuracy: f64,
    pub consistency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionDetail {
    pub version_id: &'static str,
    pub created_date: &'static str,
    pub created_by: &'static str,
    pub description: &'static str,
    pub file_size: u64,
    pub file_size_unit: &'static str,
    pub changes: &'static [&'static str],
    pub validation_status: &'static str,
    pub data_quality: DataQuality,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionHistory {
    pub id: &'static str,
    pub name: &'static str,
    pub object_type: &'static str,
    pub total_versions: u32,
    pub versions: &'static [VersionDetail],
}

/// One named series of an object's assay table. Attribute names are
/// stored lower-case.
#[derive(Debug, Clone)]
pub struct AttributeSeries {
    pub name: &'static str,
    pub values: &'static [f64],
}

#[derive(Debug, Clone)]
pub struct ObjectTable {
    pub object: &'static str,
    pub attributes: &'static [AttributeSeries],
}

impl ObjectTable {
    pub fn get(&self, attribute: &str) -> Option<&'static [f64]> {
        self.attributes.iter().find(|a| a.name == attribute).map(|a| a.values)
    }

    pub fn first(&self) -> Option<&AttributeSeries> {
        self.attributes.first()
    }

    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|a| a.name).collect()
    }
}

/// Resolved identity of a named object.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectRef {
    pub object_id: String,
    pub object_type: &'static str,
    pub version_id: &'static str,
}

/// Common shorthand element symbols accepted for assay attributes.
const ATTRIBUTE_ALIASES: &[(&str, &str)] = &[
    ("au", "gold"),
    ("ag", "silver"),
    ("cu", "copper"),
    ("pb", "lead"),
    ("zn", "zinc"),
    ("fe", "iron"),
    ("mo", "molybdenum"),
    ("u", "uranium"),
];

pub fn resolve_alias(attribute: &str) -> Option<&'static str> {
    ATTRIBUTE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == attribute)
        .map(|(_, real)| *real)
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceClient;

impl WorkspaceClient {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_objects(&self) -> &'static [ObjectSummary] {
        fixtures::OBJECTS_LATEST
    }

    pub async fn list_objects_all_versions(&self) -> &'static [ObjectVersionsSummary] {
        fixtures::OBJECTS_ALL_VERSIONS
    }

    pub fn object_detail(&self, name: &str) -> Option<&'static ObjectDetail> {
        fixtures::OBJECT_DETAILS.iter().find(|d| d.name == name)
    }

    pub fn version_history(&self, name: &str) -> Option<&'static VersionHistory> {
        fixtures::VERSION_HISTORIES.iter().find(|h| h.name == name)
    }

    pub fn table(&self, name: &str) -> Option<&'static ObjectTable> {
        fixtures::TABLES.iter().find(|t| t.object == name)
    }

    pub fn known_table_objects(&self) -> Vec<&'static str> {
        fixtures::TABLES.iter().map(|t| t.object).collect()
    }

    fn available_objects(&self) -> Vec<&'static str> {
        fixtures::OBJECT_DETAILS.iter().map(|d| d.name).collect()
    }

    /// Detailed info per requested name; unknown names yield an error
    /// record carrying the available object names instead of failing the
    /// whole call.
    pub async fn objects_info(&self, names: &[String]) -> Vec<Value> {
        names
            .iter()
            .map(|name| match self.object_detail(name) {
                Some(detail) => serde_json::to_value(detail).unwrap_or(Value::Null),
                None => json!({
                    "error": format!("Object '{name}' not found in workspace"),
                    "available_objects": self.available_objects(),
                }),
            })
            .collect()
    }

    pub async fn object_versions_info(&self, names: &[String]) -> Vec<Value> {
        names
            .iter()
            .map(|name| match self.version_history(name) {
                Some(history) => serde_json::to_value(history).unwrap_or(Value::Null),
                None => json!({
                    "error": format!("Object '{name}' not found in workspace"),
                    "available_objects": self.available_objects(),
                }),
            })
            .collect()
    }

    pub fn resolve_object_id(&self, name: &str) -> Result<ObjectRef, String> {
        match self.object_detail(name) {
            Some(detail) => Ok(ObjectRef {
                object_id: format!("obj_id_{name}"),
                object_type: detail.object_type,
                version_id: "version_latest",
            }),
            None => Err(format!("Unable to find object named '{name}' in the workspace.")),
        }
    }

    /// Downloads one attribute's table data. Falls back through alias
    /// resolution, then the object's first attribute, then a deterministic
    /// placeholder series for objects without table data.
    pub async fn download_table_data(&self, object_name: &str, attribute: Option<&str>) -> Vec<f64> {
        info!("downloading table data for {object_name}, attribute: {attribute:?}");

        if let Err(e) = self.resolve_object_id(object_name) {
            warn!("{e}");
            return Vec::new();
        }

        if let Some(table) = self.table(object_name) {
            if let Some(requested) = attribute {
                let normalized = requested.to_lowercase();
                if let Some(values) = table.get(&normalized) {
                    return values.to_vec();
                }
                if let Some(mapped) = resolve_alias(&normalized) {
                    if let Some(values) = table.get(mapped) {
                        info!("resolved attribute alias {normalized} -> {mapped}");
                        return values.to_vec();
                    }
                }
                if let Some(first) = table.first() {
                    warn!(
                        "attribute '{requested}' not found for {object_name}, returning {} data",
                        first.name
                    );
                    return first.values.to_vec();
                }
            } else if let Some(first) = table.first() {
                return first.values.to_vec();
            }
        }

        warn!("no table data for object '{object_name}', returning placeholder series");
        placeholder_series(object_name, attribute)
    }
}

/// Deterministic stand-in series for objects without stored table data.
/// Seeded from the object/attribute pair so repeated calls agree.
fn placeholder_series(object_name: &str, attribute: Option<&str>) -> Vec<f64> {
    let mut hasher = DefaultHasher::new();
    object_name.hash(&mut hasher);
    attribute.unwrap_or_default().hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    (0..50)
        .map(|_| (rng.gen_range(0.1f64..100.0) * 100.0).round() / 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_series_is_stable_per_object_and_attribute() {
        let a = placeholder_series("future_drillholes", Some("gold"));
        let b = placeholder_series("future_drillholes", Some("gold"));
        let c = placeholder_series("future_drillholes", Some("silver"));

        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|v| (0.1..=100.0).contains(v)));
    }
}
