use std::fmt;

///
/// TypeModel
///
/// Static structural descriptor for one filterable type: its path and the
/// named fields a predicate may reference. This is the whole surface the
/// rewriter and validator depend on; no runtime type inspection exists
/// anywhere in the engine.
///

#[derive(Debug)]
pub struct TypeModel {
    /// Fully-qualified type path (for diagnostics and identity).
    pub path: &'static str,
    /// Ordered field list.
    pub fields: &'static [FieldModel],
}

impl TypeModel {
    /// Look up a field by name. Names match case-sensitively.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}

///
/// FieldModel
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as referenced by member-access nodes.
    pub name: &'static str,
    /// Structural kind of the field's value.
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Minimal type surface needed for member resolution. `Record` carries the
/// nested model so member chains resolve member-by-member; every other
/// kind terminates a chain.
///

#[derive(Debug)]
pub enum FieldKind {
    Blob,
    Bool,
    Float64,
    Int,
    Text,
    Uint,
    Ulid,
    Unit,
    List(&'static FieldKind),
    Record(&'static TypeModel),
    /// Marker for fields that are not filterable.
    Unsupported,
}

impl FieldKind {
    /// Nested model for record fields; `None` terminates member chains.
    #[must_use]
    pub const fn record_model(&self) -> Option<&'static TypeModel> {
        match self {
            Self::Record(model) => Some(*model),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => write!(f, "Blob"),
            Self::Bool => write!(f, "Bool"),
            Self::Float64 => write!(f, "Float64"),
            Self::Int => write!(f, "Int"),
            Self::Text => write!(f, "Text"),
            Self::Uint => write!(f, "Uint"),
            Self::Ulid => write!(f, "Ulid"),
            Self::Unit => write!(f, "Unit"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Record(model) => write!(f, "{}", model.path),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

///
/// Shaped
///
/// Links a Rust type to its static `TypeModel`. Predicates are typed
/// against `Shaped` implementors; the rewriter resolves member names
/// against the destination's model instead of reflecting over the type.
///
/// CONTRACT: model paths identify shapes; two distinct shapes must not
/// share a path.
///

pub trait Shaped {
    const MODEL: &'static TypeModel;
}
