use std::collections::HashMap;
use std::fmt;

/// Built-in primitive kind of a leaf node
///
/// Covers the YANG built-in types. Anything the schema source spells in a way
/// we do not recognise is kept verbatim in [`PrimitiveKind::Other`] so the
/// generator can report it with the offending path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
    Enum,
    Decimal64,
    Binary,
    Bits,
    Union,
    Leafref,
    Identityref,
    Empty,
    InstanceIdentifier,
    /// Unrecognised type name
    Other(String),
}

impl PrimitiveKind {
    /// Parse a kind from its YANG spelling (`boolean`, `enumeration`, ...)
    ///
    /// The short aliases `bool` and `enum` are accepted as well. Never fails:
    /// unknown names end up in [`PrimitiveKind::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => PrimitiveKind::String,
            "int8" => PrimitiveKind::Int8,
            "int16" => PrimitiveKind::Int16,
            "int32" => PrimitiveKind::Int32,
            "int64" => PrimitiveKind::Int64,
            "uint8" => PrimitiveKind::Uint8,
            "uint16" => PrimitiveKind::Uint16,
            "uint32" => PrimitiveKind::Uint32,
            "uint64" => PrimitiveKind::Uint64,
            "boolean" | "bool" => PrimitiveKind::Bool,
            "enumeration" | "enum" => PrimitiveKind::Enum,
            "decimal64" => PrimitiveKind::Decimal64,
            "binary" => PrimitiveKind::Binary,
            "bits" => PrimitiveKind::Bits,
            "union" => PrimitiveKind::Union,
            "leafref" => PrimitiveKind::Leafref,
            "identityref" => PrimitiveKind::Identityref,
            "empty" => PrimitiveKind::Empty,
            "instance-identifier" => PrimitiveKind::InstanceIdentifier,
            _ => PrimitiveKind::Other(s.to_string()),
        }
    }

    /// YANG spelling of the kind
    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint32",
            PrimitiveKind::Uint64 => "uint64",
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Enum => "enumeration",
            PrimitiveKind::Decimal64 => "decimal64",
            PrimitiveKind::Binary => "binary",
            PrimitiveKind::Bits => "bits",
            PrimitiveKind::Union => "union",
            PrimitiveKind::Leafref => "leafref",
            PrimitiveKind::Identityref => "identityref",
            PrimitiveKind::Empty => "empty",
            PrimitiveKind::InstanceIdentifier => "instance-identifier",
            PrimitiveKind::Other(s) => s,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A terminal node carrying a single typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Schema-case identifier (e.g. `a_leaf`)
    pub name: String,
    /// Declared primitive kind
    pub kind: PrimitiveKind,
}

/// A grouping node with named children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    /// Schema-case identifier
    pub name: String,
    /// Pre-computed target type name (the `structname` annotation)
    pub struct_name: Option<String>,
    /// Child nodes keyed by schema name. Iteration order is unspecified.
    pub children: HashMap<String, SchemaNode>,
}

/// A keyed collection node
///
/// The item shape is described by `children`; `key` names the child leaves
/// forming the (possibly composite) key, separated by whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    pub name: String,
    pub struct_name: Option<String>,
    /// Space-separated key field names, in declared key order
    pub key: String,
    pub children: HashMap<String, SchemaNode>,
}

impl List {
    /// Key field names in declared order
    pub fn key_fields(&self) -> Vec<&str> {
        self.key.split_whitespace().collect()
    }
}

/// A node kind the generator has no descriptor builder for
/// (`choice`, `leaf-list`, `anydata`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    pub name: String,
    /// The kind tag as written in the schema source
    pub kind: String,
}

/// A node of the model tree consumed by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Leaf(Leaf),
    Container(Container),
    List(List),
    Other(OtherNode),
}

impl SchemaNode {
    /// Create a leaf node
    pub fn leaf(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        SchemaNode::Leaf(Leaf {
            name: name.into(),
            kind,
        })
    }

    /// Create an empty container node
    pub fn container(name: impl Into<String>) -> Self {
        SchemaNode::Container(Container {
            name: name.into(),
            ..Container::default()
        })
    }

    /// Create an empty list node keyed by `key` (space-separated field names)
    pub fn list(name: impl Into<String>, key: impl Into<String>) -> Self {
        SchemaNode::List(List {
            name: name.into(),
            key: key.into(),
            ..List::default()
        })
    }

    /// Create a node of a kind the generator does not handle
    pub fn other(name: impl Into<String>, kind: impl Into<String>) -> Self {
        SchemaNode::Other(OtherNode {
            name: name.into(),
            kind: kind.into(),
        })
    }

    /// Set the target type name override. No effect on leaves and other nodes.
    pub fn with_struct_name(mut self, struct_name: impl Into<String>) -> Self {
        match &mut self {
            SchemaNode::Container(c) => c.struct_name = Some(struct_name.into()),
            SchemaNode::List(l) => l.struct_name = Some(struct_name.into()),
            SchemaNode::Leaf(_) | SchemaNode::Other(_) => {}
        }
        self
    }

    /// Add a child keyed by its own name. No effect on leaves and other nodes.
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        let name = child.name().to_string();
        if let Some(children) = self.children_mut() {
            children.insert(name, child);
        }
        self
    }

    /// Schema-case identifier of the node
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Leaf(l) => &l.name,
            SchemaNode::Container(c) => &c.name,
            SchemaNode::List(l) => &l.name,
            SchemaNode::Other(o) => &o.name,
        }
    }

    /// Kind tag as it would appear in the schema source
    pub fn kind_name(&self) -> &str {
        match self {
            SchemaNode::Leaf(_) => "leaf",
            SchemaNode::Container(_) => "container",
            SchemaNode::List(_) => "list",
            SchemaNode::Other(o) => &o.kind,
        }
    }

    /// Children of a container or list; `None` for leaves and other nodes
    pub fn children(&self) -> Option<&HashMap<String, SchemaNode>> {
        match self {
            SchemaNode::Container(c) => Some(&c.children),
            SchemaNode::List(l) => Some(&l.children),
            SchemaNode::Leaf(_) | SchemaNode::Other(_) => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut HashMap<String, SchemaNode>> {
        match self {
            SchemaNode::Container(c) => Some(&mut c.children),
            SchemaNode::List(l) => Some(&mut l.children),
            SchemaNode::Leaf(_) | SchemaNode::Other(_) => None,
        }
    }
}
