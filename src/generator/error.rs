use std::fmt;

/// Error raised while generating endpoint descriptors
///
/// Every variant except [`GenError::EmptyOperationSet`] carries the schema
/// path of the offending node. Any of them aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A leaf's primitive kind has no entry in the type table
    UnsupportedType {
        /// Path of the leaf
        path: Vec<String>,
        /// The primitive kind as written in the schema
        kind: String,
    },
    /// A list key field that does not name a distinct leaf child of the list
    MalformedKey {
        /// Path of the list
        path: Vec<String>,
        /// The key field that could not be resolved
        key: String,
    },
    /// A node kind with no descriptor builder, reported only in strict mode
    UnknownNodeKind {
        /// Path of the node
        path: Vec<String>,
        /// The kind tag of the node
        kind: String,
    },
    /// Two siblings resolve to the same generated name
    MalformedModel {
        /// Path of the second sibling
        path: Vec<String>,
        /// The colliding generated name
        name: String,
    },
    /// The configured operation set is empty
    EmptyOperationSet,
}

fn display_path(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::UnsupportedType { path, kind } => write!(
                f,
                "unsupported type '{}' for leaf {}",
                kind,
                display_path(path)
            ),
            GenError::MalformedKey { path, key } => write!(
                f,
                "key field '{}' of list {} does not name a distinct leaf child",
                key,
                display_path(path)
            ),
            GenError::UnknownNodeKind { path, kind } => {
                write!(f, "unknown node kind '{}' at {}", kind, display_path(path))
            }
            GenError::MalformedModel { path, name } => write!(
                f,
                "generated name '{}' of {} collides with a sibling",
                name,
                display_path(path)
            ),
            GenError::EmptyOperationSet => {
                write!(f, "operation set must contain at least one operation")
            }
        }
    }
}

impl std::error::Error for GenError {}
