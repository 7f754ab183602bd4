use crate::schema::PrimitiveKind;

/// Target-language value type of a leaf plus the expressions the client
/// template needs around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoType {
    /// Go type name (e.g. `string`, `uint8`)
    pub go_type: &'static str,
    /// Expression extracting the value from a gNMI `TypedValue` named `val`
    pub read_expr: &'static str,
    /// Zero value literal of `go_type`
    pub zero_expr: &'static str,
}

/// Convert a schema-case identifier to PascalCase
///
/// Splits on `_`, `-` and `.`, upper-cases the first character of every
/// non-empty part and keeps the rest untouched.
///
/// # Example
///
/// ```rust
/// use gnmi_client_gen::generator::pascalize;
///
/// assert_eq!(pascalize("a_leaf"), "ALeaf");
/// assert_eq!(pascalize("admin-status"), "AdminStatus");
/// ```
pub fn pascalize(s: &str) -> String {
    s.split(|c| matches!(c, '_' | '-' | '.'))
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Pascalize every path segment and concatenate them without separator
pub fn model_path(path: &[String]) -> String {
    path.iter().map(|segment| pascalize(segment)).collect()
}

/// Collection form of a model name, used for the list accessor method
pub fn pluralize(model_name: &str) -> String {
    format!("{model_name}_List")
}

/// Map a leaf primitive kind to its Go type and accessor expressions
///
/// Returns `None` for kinds with no safe mapping (`union`, `leafref`,
/// `identityref`, `bits`, `empty`, `instance-identifier`, unknown names).
pub fn resolve_leaf_type(kind: &PrimitiveKind) -> Option<GoType> {
    let (go_type, read_expr, zero_expr) = match kind {
        PrimitiveKind::String | PrimitiveKind::Enum => ("string", "val.GetStringVal()", "\"\""),
        PrimitiveKind::Int8 => ("int8", "int8(val.GetIntVal())", "0"),
        PrimitiveKind::Int16 => ("int16", "int16(val.GetIntVal())", "0"),
        PrimitiveKind::Int32 => ("int32", "int32(val.GetIntVal())", "0"),
        PrimitiveKind::Int64 => ("int64", "val.GetIntVal()", "0"),
        PrimitiveKind::Uint8 => ("uint8", "uint8(val.GetUintVal())", "0"),
        PrimitiveKind::Uint16 => ("uint16", "uint16(val.GetUintVal())", "0"),
        PrimitiveKind::Uint32 => ("uint32", "uint32(val.GetUintVal())", "0"),
        PrimitiveKind::Uint64 => ("uint64", "val.GetUintVal()", "0"),
        PrimitiveKind::Bool => ("bool", "val.GetBoolVal()", "false"),
        PrimitiveKind::Decimal64 => ("float64", "val.GetDoubleVal()", "0"),
        PrimitiveKind::Binary => ("[]byte", "val.GetBytesVal()", "nil"),
        PrimitiveKind::Bits
        | PrimitiveKind::Union
        | PrimitiveKind::Leafref
        | PrimitiveKind::Identityref
        | PrimitiveKind::Empty
        | PrimitiveKind::InstanceIdentifier
        | PrimitiveKind::Other(_) => return None,
    };
    Some(GoType {
        go_type,
        read_expr,
        zero_expr,
    })
}

/// Whether a composite key field of this kind is held behind a pointer in
/// the generated item struct. Enumerations are plain values.
pub fn key_needs_ptr(kind: &PrimitiveKind) -> bool {
    !matches!(kind, PrimitiveKind::Enum)
}
