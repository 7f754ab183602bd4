use super::operation::Operation;
use serde::Serialize;
use std::cmp::Ordering;

/// Descriptor of a client method reading or writing a single leaf value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafEndpoint {
    pub method: Operation,
    /// Generated method name (e.g. `Get_ALeaf`)
    pub method_name: String,
    /// Pascalized leaf name
    pub model_name: String,
    /// Schema path from the model root to the leaf
    pub path: Vec<String>,
    /// Go value type returned or accepted by the method
    pub go_type: String,
    /// Expression extracting the value from the gNMI `TypedValue`
    pub go_return_type: String,
    /// Zero value returned alongside errors
    pub go_empty_return_type: String,
}

/// Descriptor of a client method operating on a whole container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerEndpoint {
    /// Generated struct name (`structname` override or pascalized name)
    pub model_name: String,
    /// Pascalized path joined without separator (e.g. `SystemConfig`)
    pub model_path: String,
    /// Model path of the enclosing container or list, empty at the root
    pub parent_model_path: String,
    pub method: Operation,
    pub method_name: String,
    pub path: Vec<String>,
}

/// One field of a list key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyField {
    /// Pascalized key leaf name
    pub name: String,
    /// Go type of the key leaf
    pub key_type: String,
    /// Whether the field is held behind a pointer in the generated item struct
    pub ptr: bool,
}

/// Key of a list node
///
/// For a single key field `key_type` is that field's type; for composite
/// keys it names the generated key struct (`<ModelName>_Key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListKey {
    pub key_type: String,
    /// Key fields in declared order
    pub keys: Vec<KeyField>,
}

/// Descriptor of a client method operating on one item of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEndpoint {
    /// Item accessor, shaped like a container endpoint
    pub item: ContainerEndpoint,
    pub key: ListKey,
    /// Paths of the non-key leaves under the item, relative to it
    pub sibling_paths: Vec<String>,
    /// Collection accessor (`Get_<ModelPath>_List`). Set on exactly one
    /// descriptor per list node.
    pub list_method_name: Option<String>,
}

/// All descriptors generated for one model root
///
/// The three collections are always present (possibly empty) and sorted by
/// (operation, model name, method name, path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GnmiEndpoints {
    pub leaves_endpoints: Vec<LeafEndpoint>,
    pub container_endpoints: Vec<ContainerEndpoint>,
    pub list_endpoints: Vec<ListEndpoint>,
    pub plugin_name: String,
}

impl GnmiEndpoints {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        GnmiEndpoints {
            leaves_endpoints: Vec::new(),
            container_endpoints: Vec::new(),
            list_endpoints: Vec::new(),
            plugin_name: plugin_name.into(),
        }
    }

    /// Move every descriptor of `other` into `self`, keeping `self`'s plugin name
    pub fn merge(&mut self, other: GnmiEndpoints) {
        self.leaves_endpoints.extend(other.leaves_endpoints);
        self.container_endpoints.extend(other.container_endpoints);
        self.list_endpoints.extend(other.list_endpoints);
    }

    /// Sort all three collections into their canonical order
    pub fn sort(&mut self) {
        self.leaves_endpoints
            .sort_by(|a, b| compare(leaf_key(a), leaf_key(b)));
        self.container_endpoints
            .sort_by(|a, b| compare(container_key(a), container_key(b)));
        self.list_endpoints
            .sort_by(|a, b| compare(container_key(&a.item), container_key(&b.item)));
    }

    /// Collection accessor names, one per list node
    pub fn list_accessors(&self) -> impl Iterator<Item = &str> {
        self.list_endpoints
            .iter()
            .filter_map(|l| l.list_method_name.as_deref())
    }

    /// Total number of item-level descriptors
    pub fn len(&self) -> usize {
        self.leaves_endpoints.len() + self.container_endpoints.len() + self.list_endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type EndpointKey<'a> = (Operation, &'a str, &'a str, &'a [String]);

fn leaf_key(e: &LeafEndpoint) -> EndpointKey<'_> {
    (e.method, e.model_name.as_str(), e.method_name.as_str(), e.path.as_slice())
}

fn container_key(e: &ContainerEndpoint) -> EndpointKey<'_> {
    (e.method, e.model_name.as_str(), e.method_name.as_str(), e.path.as_slice())
}

fn compare(a: EndpointKey<'_>, b: EndpointKey<'_>) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
        .then_with(|| a.1.cmp(b.1))
        .then_with(|| a.2.cmp(b.2))
        .then_with(|| a.3.cmp(b.3))
}
