use super::builders::{build_container, build_leaf, build_list};
use super::endpoints::GnmiEndpoints;
use super::error::GenError;
use super::naming::{model_path, pascalize};
use crate::config::GeneratorConfig;
use crate::schema::SchemaNode;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Generate every endpoint descriptor below `node`
///
/// `node` itself produces no descriptors; its children are visited
/// recursively and all descriptors are flattened into a single aggregate
/// labelled with `plugin_name`. `path` is the schema path from the model
/// root to `node` (empty when `node` is the root).
///
/// The result is a pure function of its inputs: children are visited in name
/// order and every collection is sorted before it is returned, so repeated
/// runs yield identical aggregates.
///
/// # Errors
///
/// Any [`GenError`] raised in a subtree aborts the whole walk; no partial
/// aggregate is returned.
pub fn walk(
    node: &SchemaNode,
    path: &[String],
    plugin_name: &str,
    config: &GeneratorConfig,
) -> Result<GnmiEndpoints, GenError> {
    let walker = Walker {
        plugin_name,
        config,
    };
    let endpoints = walker.walk_children(node, path, &model_path(path), true)?;
    debug!(
        plugin = plugin_name,
        leaves = endpoints.leaves_endpoints.len(),
        containers = endpoints.container_endpoints.len(),
        lists = endpoints.list_endpoints.len(),
        "generated gnmi endpoints"
    );
    Ok(endpoints)
}

struct Walker<'a> {
    plugin_name: &'a str,
    config: &'a GeneratorConfig,
}

impl Walker<'_> {
    /// Visit the children of `node`. Leaves are skipped inside list items:
    /// the list descriptor already covers them through its key and sibling paths.
    fn walk_children(
        &self,
        node: &SchemaNode,
        path: &[String],
        parent_model_path: &str,
        include_leaves: bool,
    ) -> Result<GnmiEndpoints, GenError> {
        let mut out = GnmiEndpoints::new(self.plugin_name);
        let Some(children) = node.children() else {
            return Ok(out);
        };
        let ops = &self.config.operations;

        for child in sorted_children(children, path)? {
            let mut child_path = path.to_vec();
            child_path.push(child.name().to_string());
            trace!(path = %child_path.join("/"), kind = child.kind_name(), "visiting node");

            match child {
                SchemaNode::Leaf(leaf) => {
                    if include_leaves {
                        let built = build_leaf(leaf, &child_path, ops)?;
                        self.log_built(built.iter().map(|e| e.method_name.as_str()));
                        out.leaves_endpoints.extend(built);
                    }
                }
                SchemaNode::Container(container) => {
                    let built = build_container(container, &child_path, parent_model_path, ops);
                    self.log_built(built.iter().map(|e| e.method_name.as_str()));
                    out.container_endpoints.extend(built);
                    let nested =
                        self.walk_children(child, &child_path, &model_path(&child_path), true)?;
                    out.merge(nested);
                }
                SchemaNode::List(list) => {
                    let built = build_list(list, &child_path, parent_model_path, ops)?;
                    self.log_built(built.iter().map(|e| e.item.method_name.as_str()));
                    out.list_endpoints.extend(built);
                    let nested =
                        self.walk_children(child, &child_path, &model_path(&child_path), false)?;
                    out.merge(nested);
                }
                SchemaNode::Other(other) => {
                    if self.config.strict {
                        return Err(GenError::UnknownNodeKind {
                            path: child_path,
                            kind: other.kind.clone(),
                        });
                    }
                    warn!(
                        path = %child_path.join("/"),
                        kind = %other.kind,
                        "skipping node of unsupported kind"
                    );
                }
            }
        }

        out.sort();
        Ok(out)
    }

    fn log_built<'b>(&self, method_names: impl Iterator<Item = &'b str>) {
        if self.config.debug {
            for name in method_names {
                debug!(method = name, "built endpoint");
            }
        }
    }
}

/// Children in schema-name order, rejecting siblings whose generated names
/// collide
fn sorted_children<'n>(
    children: &'n HashMap<String, SchemaNode>,
    path: &[String],
) -> Result<Vec<&'n SchemaNode>, GenError> {
    let mut sorted: Vec<&SchemaNode> = children.values().collect();
    sorted.sort_by(|a, b| {
        a.name()
            .cmp(b.name())
            .then_with(|| a.kind_name().cmp(b.kind_name()))
    });

    let mut seen = HashSet::new();
    for child in &sorted {
        if matches!(child, SchemaNode::Other(_)) {
            continue;
        }
        let generated = pascalize(child.name());
        if !seen.insert(generated.clone()) {
            let mut child_path = path.to_vec();
            child_path.push(child.name().to_string());
            return Err(GenError::MalformedModel {
                path: child_path,
                name: generated,
            });
        }
    }
    Ok(sorted)
}
