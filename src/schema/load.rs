use super::types::{Container, Leaf, List, OtherNode, PrimitiveKind, SchemaNode};
use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk encoding of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    /// Pick the format from the file extension; anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false)
        {
            SchemaFormat::Yaml
        } else {
            SchemaFormat::Json
        }
    }
}

/// Node as written in the schema document, before kind-specific validation
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    name: Option<String>,
    kind: String,
    #[serde(default, rename = "type")]
    leaf_type: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    structname: Option<String>,
    #[serde(default)]
    children: HashMap<String, RawNode>,
}

/// Load a schema tree from a YAML or JSON file
///
/// The document root is a single node:
///
/// ```yaml
/// name: device
/// kind: container
/// children:
///   application:
///     kind: list
///     key: id
///     structname: Device_Application
///     children:
///       id: { kind: leaf, type: string }
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML/JSON, or
/// a node lacks a field its kind requires (leaf `type`, list `key`).
pub fn load_schema(path: &Path) -> anyhow::Result<SchemaNode> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;
    parse_schema(&content, SchemaFormat::from_path(path))
        .with_context(|| format!("Failed to load schema: {}", path.display()))
}

/// Parse a schema tree from an in-memory document
pub fn parse_schema(content: &str, format: SchemaFormat) -> anyhow::Result<SchemaNode> {
    let raw: RawNode = match format {
        SchemaFormat::Yaml => serde_yaml::from_str(content)?,
        SchemaFormat::Json => serde_json::from_str(content)?,
    };
    let Some(name) = raw.name.clone() else {
        bail!("schema root has no name");
    };
    convert(raw, name, &[])
}

fn convert(raw: RawNode, name: String, parent: &[String]) -> anyhow::Result<SchemaNode> {
    let mut path = parent.to_vec();
    path.push(name.clone());

    let node = match raw.kind.trim().to_ascii_lowercase().as_str() {
        "leaf" => {
            let Some(ty) = raw.leaf_type else {
                bail!("leaf '/{}' has no type", path.join("/"));
            };
            SchemaNode::Leaf(Leaf {
                name,
                kind: PrimitiveKind::parse(&ty),
            })
        }
        "container" => SchemaNode::Container(Container {
            name,
            struct_name: raw.structname,
            children: convert_children(raw.children, &path)?,
        }),
        "list" => {
            let key = raw.key.unwrap_or_default();
            if key.trim().is_empty() {
                bail!("list '/{}' has no key", path.join("/"));
            }
            SchemaNode::List(List {
                name,
                struct_name: raw.structname,
                key,
                children: convert_children(raw.children, &path)?,
            })
        }
        _ => SchemaNode::Other(OtherNode {
            name,
            kind: raw.kind,
        }),
    };
    Ok(node)
}

fn convert_children(
    children: HashMap<String, RawNode>,
    path: &[String],
) -> anyhow::Result<HashMap<String, SchemaNode>> {
    children
        .into_iter()
        .map(|(key, mut raw)| -> anyhow::Result<(String, SchemaNode)> {
            let name = raw.name.take().unwrap_or_else(|| key.clone());
            Ok((key, convert(raw, name, path)?))
        })
        .collect()
}
