use crate::dependency_tree::domain::{Catalogue, DependencyEdge, RawComponent};
use crate::shared::Result;
use serde::Deserialize;

const CYCLONEDX_BOM_FORMAT: &str = "CycloneDX";

/// The parts of a CycloneDX JSON document the tree needs
///
/// Everything is optional so that partial documents still load; arrays given
/// as `null` are treated as empty.
#[derive(Debug, Deserialize, Default)]
struct BomDocument {
    #[serde(rename = "bomFormat")]
    bom_format: Option<String>,
    #[serde(rename = "specVersion")]
    spec_version: Option<String>,
    components: Option<Vec<BomComponent>>,
    dependencies: Option<Vec<BomDependency>>,
}

#[derive(Debug, Deserialize)]
struct BomComponent {
    #[serde(rename = "bom-ref")]
    bom_ref: Option<String>,
    name: Option<String>,
    version: Option<String>,
    #[serde(rename = "type")]
    component_type: Option<String>,
    scope: Option<String>,
    components: Option<Vec<BomComponent>>,
}

#[derive(Debug, Deserialize)]
struct BomDependency {
    #[serde(rename = "ref")]
    bom_ref: Option<String>,
    #[serde(rename = "dependsOn")]
    depends_on: Option<Vec<String>>,
}

impl From<BomComponent> for RawComponent {
    fn from(component: BomComponent) -> Self {
        RawComponent {
            id: component.bom_ref,
            name: component.name,
            version: component.version,
            component_type: component.component_type,
            scope: component.scope,
            components: component
                .components
                .unwrap_or_default()
                .into_iter()
                .map(RawComponent::from)
                .collect(),
        }
    }
}

/// Decoder for CycloneDX JSON bills of materials
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Decodes a CycloneDX JSON document into a catalogue
    ///
    /// # Errors
    /// Returns an error if the content is not JSON of the expected shape, or if
    /// it declares a `bomFormat` other than CycloneDX.
    pub fn parse(content: &str) -> Result<Catalogue> {
        let document: BomDocument = serde_json::from_str(content)?;

        if let Some(format) = document.bom_format.as_deref() {
            if format != CYCLONEDX_BOM_FORMAT {
                anyhow::bail!(
                    "Unsupported bomFormat '{}', expected '{}'",
                    format,
                    CYCLONEDX_BOM_FORMAT
                );
            }
        }

        tracing::debug!(
            "Decoding CycloneDX document (specVersion {})",
            document.spec_version.as_deref().unwrap_or("unspecified")
        );

        let components = document
            .components
            .unwrap_or_default()
            .into_iter()
            .map(RawComponent::from)
            .collect();

        let dependencies = document
            .dependencies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|dependency| match dependency.bom_ref {
                Some(parent) => Some(DependencyEdge::new(
                    parent,
                    dependency.depends_on.unwrap_or_default(),
                )),
                None => {
                    tracing::debug!("Ignoring dependency entry without a 'ref'");
                    None
                }
            })
            .collect();

        Ok(Catalogue::new(components, dependencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components_and_dependencies() {
        let content = r#"{
            "bomFormat": "CycloneDX",
            "specVersion": "1.5",
            "components": [
                {"bom-ref": "pkg:maven/a@1", "name": "alpha", "version": "1", "type": "library", "scope": "required"},
                {"bom-ref": "pkg:maven/b@2", "name": "beta", "version": "2", "type": "framework"}
            ],
            "dependencies": [
                {"ref": "pkg:maven/a@1", "dependsOn": ["pkg:maven/b@2"]},
                {"ref": "pkg:maven/b@2"}
            ]
        }"#;

        let catalogue = CycloneDxParser::parse(content).unwrap();

        assert_eq!(catalogue.components().len(), 2);
        let alpha = &catalogue.components()[0];
        assert_eq!(alpha.id.as_deref(), Some("pkg:maven/a@1"));
        assert_eq!(alpha.name.as_deref(), Some("alpha"));
        assert_eq!(alpha.component_type.as_deref(), Some("library"));
        assert_eq!(alpha.scope.as_deref(), Some("required"));
        assert!(catalogue.components()[1].scope.is_none());

        assert_eq!(catalogue.dependencies().len(), 2);
        assert_eq!(catalogue.dependencies()[0].parent_id(), "pkg:maven/a@1");
        assert_eq!(
            catalogue.dependencies()[0].child_ids(),
            &["pkg:maven/b@2".to_string()]
        );
        assert!(catalogue.dependencies()[1].child_ids().is_empty());
    }

    #[test]
    fn test_parse_nested_components() {
        let content = r#"{
            "components": [
                {"name": "app", "components": [{"name": "plugin", "version": "0.1"}]}
            ]
        }"#;

        let catalogue = CycloneDxParser::parse(content).unwrap();

        let app = &catalogue.components()[0];
        assert!(app.id.is_none());
        assert_eq!(app.components.len(), 1);
        assert_eq!(app.components[0].name.as_deref(), Some("plugin"));
        assert!(catalogue.dependencies().is_empty());
    }

    #[test]
    fn test_parse_null_arrays() {
        let content = r#"{"bomFormat": "CycloneDX", "components": null, "dependencies": null}"#;

        let catalogue = CycloneDxParser::parse(content).unwrap();

        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_parse_skips_dependency_without_ref() {
        let content = r#"{"dependencies": [{"dependsOn": ["x"]}, {"ref": "y"}]}"#;

        let catalogue = CycloneDxParser::parse(content).unwrap();

        assert_eq!(catalogue.dependencies().len(), 1);
        assert_eq!(catalogue.dependencies()[0].parent_id(), "y");
    }

    #[test]
    fn test_parse_rejects_other_bom_format() {
        let err = CycloneDxParser::parse(r#"{"bomFormat": "SPDX"}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported bomFormat 'SPDX'"));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(CycloneDxParser::parse("not json").is_err());
    }

    #[test]
    fn test_parse_ignores_unrelated_fields() {
        let content = r#"{
            "bomFormat": "CycloneDX",
            "metadata": {"timestamp": "2024-01-01T00:00:00Z"},
            "components": [{"bom-ref": "a", "name": "alpha", "licenses": [], "purl": "pkg:npm/alpha@1"}]
        }"#;

        let catalogue = CycloneDxParser::parse(content).unwrap();
        assert_eq!(catalogue.components().len(), 1);
    }
}
