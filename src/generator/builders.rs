//! Per-kind descriptor construction
//!
//! Every builder takes the full schema path of the node it is given (the
//! node's own name included) and emits one descriptor per requested
//! operation, in operation order.

use super::endpoints::{ContainerEndpoint, KeyField, LeafEndpoint, ListEndpoint, ListKey};
use super::error::GenError;
use super::naming::{key_needs_ptr, model_path, pascalize, pluralize, resolve_leaf_type};
use super::operation::{Operation, OperationSet};
use crate::schema::{Container, Leaf, List, SchemaNode};
use std::collections::HashMap;

/// Build the leaf descriptors for `leaf`
///
/// # Errors
///
/// [`GenError::UnsupportedType`] when the leaf's kind has no type mapping.
pub fn build_leaf(
    leaf: &Leaf,
    path: &[String],
    ops: &OperationSet,
) -> Result<Vec<LeafEndpoint>, GenError> {
    let go = resolve_leaf_type(&leaf.kind).ok_or_else(|| GenError::UnsupportedType {
        path: path.to_vec(),
        kind: leaf.kind.to_string(),
    })?;
    let model_name = model_path(path);

    Ok(ops
        .iter()
        .map(|op| LeafEndpoint {
            method: op,
            method_name: method_name(op, &model_name),
            model_name: model_name.clone(),
            path: path.to_vec(),
            go_type: go.go_type.to_string(),
            go_return_type: go.read_expr.to_string(),
            go_empty_return_type: go.zero_expr.to_string(),
        })
        .collect())
}

/// Build the container descriptors for `container`
pub fn build_container(
    container: &Container,
    path: &[String],
    parent_model_path: &str,
    ops: &OperationSet,
) -> Vec<ContainerEndpoint> {
    container_headers(
        &container.name,
        container.struct_name.as_deref(),
        path,
        parent_model_path,
        ops,
    )
}

/// Build the item descriptors for `list`
///
/// The collection accessor is attached to the first descriptor only, so a
/// list contributes one accessor whatever the operation set.
///
/// # Errors
///
/// [`GenError::MalformedKey`] when a key field is repeated or is not a leaf
/// child of the list, [`GenError::UnsupportedType`] when a key leaf has no
/// type mapping.
pub fn build_list(
    list: &List,
    path: &[String],
    parent_model_path: &str,
    ops: &OperationSet,
) -> Result<Vec<ListEndpoint>, GenError> {
    let headers = container_headers(
        &list.name,
        list.struct_name.as_deref(),
        path,
        parent_model_path,
        ops,
    );
    let model_name = headers
        .first()
        .map(|h| h.model_name.clone())
        .unwrap_or_else(|| pascalize(&list.name));
    let key = resolve_list_key(list, path, &model_name)?;
    let key_fields = list.key_fields();
    let mut sibling_paths = Vec::new();
    collect_sibling_paths(&list.children, &key_fields, "", &mut sibling_paths);
    sort_paths(&mut sibling_paths);
    let mut accessor = Some(method_name(Operation::Get, &pluralize(&model_path(path))));

    Ok(headers
        .into_iter()
        .map(|item| ListEndpoint {
            item,
            key: key.clone(),
            sibling_paths: sibling_paths.clone(),
            list_method_name: accessor.take(),
        })
        .collect())
}

fn method_name(op: Operation, suffix: &str) -> String {
    format!("{}_{}", op.verb(), suffix)
}

fn container_headers(
    name: &str,
    struct_name: Option<&str>,
    path: &[String],
    parent_model_path: &str,
    ops: &OperationSet,
) -> Vec<ContainerEndpoint> {
    let model_name = struct_name
        .map(str::to_string)
        .unwrap_or_else(|| pascalize(name));
    let model_path = model_path(path);

    ops.iter()
        .map(|op| ContainerEndpoint {
            model_name: model_name.clone(),
            model_path: model_path.clone(),
            parent_model_path: parent_model_path.to_string(),
            method: op,
            method_name: method_name(op, &model_path),
            path: path.to_vec(),
        })
        .collect()
}

fn resolve_list_key(list: &List, path: &[String], model_name: &str) -> Result<ListKey, GenError> {
    let fields = list.key_fields();
    if fields.is_empty() {
        return Err(GenError::MalformedKey {
            path: path.to_vec(),
            key: list.key.clone(),
        });
    }

    let mut keys = Vec::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        if fields[..i].contains(field) {
            return Err(GenError::MalformedKey {
                path: path.to_vec(),
                key: (*field).to_string(),
            });
        }
        let Some(SchemaNode::Leaf(leaf)) = list.children.get(*field) else {
            return Err(GenError::MalformedKey {
                path: path.to_vec(),
                key: (*field).to_string(),
            });
        };
        let go = resolve_leaf_type(&leaf.kind).ok_or_else(|| {
            let mut leaf_path = path.to_vec();
            leaf_path.push(leaf.name.clone());
            GenError::UnsupportedType {
                path: leaf_path,
                kind: leaf.kind.to_string(),
            }
        })?;
        keys.push(KeyField {
            name: pascalize(field),
            key_type: go.go_type.to_string(),
            ptr: fields.len() > 1 && key_needs_ptr(&leaf.kind),
        });
    }

    let key_type = match keys.as_slice() {
        [single] => single.key_type.clone(),
        _ => format!("{model_name}_Key"),
    };
    Ok(ListKey { key_type, keys })
}

/// Collect `/`-joined paths of leaves reachable from `children` through
/// containers. Nested lists describe their own items and are not entered.
fn collect_sibling_paths(
    children: &HashMap<String, SchemaNode>,
    skip: &[&str],
    prefix: &str,
    out: &mut Vec<String>,
) {
    for (name, child) in children {
        if skip.contains(&name.as_str()) {
            continue;
        }
        let child_path = if prefix.is_empty() {
            child.name().to_string()
        } else {
            format!("{prefix}/{}", child.name())
        };
        match child {
            SchemaNode::Leaf(_) => out.push(child_path),
            SchemaNode::Container(c) => collect_sibling_paths(&c.children, &[], &child_path, out),
            SchemaNode::List(_) | SchemaNode::Other(_) => {}
        }
    }
}

fn sort_paths(paths: &mut [String]) {
    paths.sort_by(|a, b| {
        let (pa, pb) = (pascalize(a).to_lowercase(), pascalize(b).to_lowercase());
        pa.cmp(&pb).then_with(|| a.cmp(b))
    });
}
