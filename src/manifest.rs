//! Structured read of the project's `package.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::CheckError;
use crate::probe::Probe;

pub const MANIFEST_PATH: &str = "package.json";

type Table = BTreeMap<String, Value>;

/// The subset of `package.json` the suite inspects. Unknown keys are ignored,
/// and fields of an unexpected type read as absent instead of failing the
/// parse, the way property access on a parsed JS object behaves.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "lenient_table")]
    pub scripts: Table,
    #[serde(default, deserialize_with = "lenient_table")]
    pub dependencies: Table,
    #[serde(default, deserialize_with = "lenient_table")]
    pub dev_dependencies: Table,
}

impl Manifest {
    /// Only invalid JSON is an error. A non-object document yields an empty
    /// manifest.
    pub fn parse(path: &str, content: &str) -> Result<Self, CheckError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CheckError::manifest(path, content, e))?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| CheckError::manifest(path, content, e))
    }

    pub fn load(probe: &dyn Probe) -> Result<Self, CheckError> {
        let content = probe.read_to_string(MANIFEST_PATH)?;
        Self::parse(MANIFEST_PATH, &content)
    }

    pub fn name_is(&self, expected: &str) -> bool {
        matches!(&self.name, Some(Value::String(name)) if name == expected)
    }

    pub fn has_script(&self, script: &str) -> bool {
        present(&self.scripts, script)
    }

    pub fn has_dependency(&self, dep: &str) -> bool {
        present(&self.dependencies, dep)
    }

    pub fn has_dev_dependency(&self, dep: &str) -> bool {
        present(&self.dev_dependencies, dep)
    }
}

fn lenient_table<'de, D>(deserializer: D) -> Result<Table, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().collect(),
        _ => Table::new(),
    })
}

fn present(table: &Table, key: &str) -> bool {
    table.get(key).is_some_and(truthy)
}

// JS truthiness: "", 0, false and null are falsy; objects and arrays are not.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;
    use crate::probe::MemoryProbe;

    const SAMPLE: &str = r#"{
        "name": "portfolio-website",
        "private": true,
        "scripts": { "dev": "vite", "build": "vite build", "lint": "" },
        "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0" },
        "devDependencies": { "vite": "^5.0.0" }
    }"#;

    #[test]
    fn parses_known_fields_and_ignores_the_rest() {
        let manifest = Manifest::parse(MANIFEST_PATH, SAMPLE).unwrap();
        assert!(manifest.name_is("portfolio-website"));
        assert!(manifest.has_script("build"));
        assert!(manifest.has_dependency("react-dom"));
        assert!(manifest.has_dev_dependency("vite"));
        assert!(!manifest.has_dev_dependency("tailwindcss"));
    }

    #[test]
    fn empty_entries_count_as_missing() {
        let manifest = Manifest::parse(MANIFEST_PATH, SAMPLE).unwrap();
        assert!(!manifest.has_script("lint"));
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let manifest = Manifest::parse(MANIFEST_PATH, "{}").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert!(!manifest.name_is("portfolio-website"));
    }

    #[test]
    fn invalid_json_is_a_manifest_error() {
        let err = Manifest::parse(MANIFEST_PATH, "{ \"name\": ").unwrap_err();
        assert!(matches!(err, CheckError::Manifest { .. }));
        assert_eq!(err.kind(), FailureKind::Collaborator);
    }

    #[test]
    fn load_reads_through_probe() {
        let probe = MemoryProbe::new().with_file(MANIFEST_PATH, SAMPLE);
        let manifest = Manifest::load(&probe).unwrap();
        assert_eq!(manifest.scripts.get("dev").and_then(Value::as_str), Some("vite"));
        assert!(Manifest::load(&MemoryProbe::new()).is_err());
    }

    #[test]
    fn numeric_name_is_not_the_package_name() {
        let manifest = Manifest::parse(MANIFEST_PATH, r#"{ "name": 42 }"#).unwrap();
        assert!(!manifest.name_is("42"));
        assert!(!manifest.name_is("portfolio-website"));
    }

    #[test]
    fn non_string_entries_follow_js_truthiness() {
        let manifest = Manifest::parse(
            MANIFEST_PATH,
            r#"{
                "scripts": { "build": true, "dev": 0 },
                "dependencies": { "react": { "version": "18" }, "react-dom": null, "vite": 1 }
            }"#,
        )
        .unwrap();
        assert!(manifest.has_script("build"));
        assert!(!manifest.has_script("dev"));
        assert!(manifest.has_dependency("react"));
        assert!(!manifest.has_dependency("react-dom"));
        assert!(manifest.has_dependency("vite"));
    }

    #[test]
    fn mistyped_tables_read_as_empty() {
        let manifest =
            Manifest::parse(MANIFEST_PATH, r#"{ "name": "x", "scripts": "vite", "dependencies": [] }"#)
                .unwrap();
        assert!(manifest.name_is("x"));
        assert!(manifest.scripts.is_empty());
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn non_object_document_is_an_empty_manifest() {
        assert_eq!(Manifest::parse(MANIFEST_PATH, "[]").unwrap(), Manifest::default());
        assert_eq!(Manifest::parse(MANIFEST_PATH, "null").unwrap(), Manifest::default());
    }
}
