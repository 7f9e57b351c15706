//! Core value model for structural transforms.
//!
//! Every transform in this crate operates on [`Value`], a closed enum of the
//! four structural kinds the engine distinguishes: scalars, lists, maps, and
//! opaque records. Keeping the enum closed means each transform dispatches
//! exhaustively and the compiler flags any kind it forgets to handle.
//!
//! # Example
//!
//! ```rust
//! use remold::{Key, Map, Value};
//!
//! let mut server = Map::new();
//! server.insert(Key::str("host"), Value::from("10.0.0.4"));
//! server.insert(Key::str("port"), Value::from(8080_i64));
//!
//! let value = Value::Map(server);
//! assert!(value.is_map());
//! ```

use crate::map::Map;
use std::fmt;

/// The structural kind of a value.
///
/// Used for dispatch inside the transforms and to name the offending kind in
/// type-mismatch errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Atomic values (string, int, float, bool, null)
    Scalar,
    /// Key-value pairs
    Map,
    /// Ordered sequences
    List,
    /// Opaque tagged records, never traversed
    Record,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Scalar => write!(f, "scalar"),
            Kind::Map => write!(f, "map"),
            Kind::List => write!(f, "list"),
            Kind::Record => write!(f, "record"),
        }
    }
}

/// Scalar (leaf) values.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{}", s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => write!(f, "null"),
        }
    }
}

/// A map key.
///
/// Only `Str` keys are candidates for symbolization, and only `Sym` keys for
/// the reverse direction; `Int` keys pass through every conversion unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Symbolic (interned-name) key
    Sym(String),
    /// Plain string key
    Str(String),
    /// Integer key
    Int(i64),
}

impl Key {
    /// Build a symbolic key from a name.
    pub fn sym(name: impl Into<String>) -> Self {
        Key::Sym(name.into())
    }

    /// Build a string key from a name.
    pub fn str(name: impl Into<String>) -> Self {
        Key::Str(name.into())
    }

    /// The key's name, for `Sym` and `Str` keys.
    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Sym(s) | Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// True for `Sym` keys.
    pub fn is_sym(&self) -> bool {
        matches!(self, Key::Sym(_))
    }

    /// True for `Str` keys.
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Sym(s) => write!(f, ":{}", s),
            Key::Str(s) => write!(f, "{}", s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

/// An opaque tagged record.
///
/// Records are structured values the transforms treat atomically: never
/// traversed into, never flattened, and never removed by compaction even
/// when they carry zero fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    tag: String,
    fields: Map,
}

impl Record {
    /// Create a record with no fields.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: Map::new(),
        }
    }

    /// Create a record with the given fields.
    pub fn with_fields(tag: impl Into<String>, fields: Map) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }

    /// The record's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The record's fields.
    pub fn fields(&self) -> &Map {
        &self.fields
    }
}

/// A value the transforms operate on.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A scalar value
    Scalar(Scalar),
    /// An ordered list of values
    List(Vec<Value>),
    /// A map of key-value pairs
    Map(Map),
    /// An opaque tagged record
    Record(Record),
}

impl Value {
    /// The scalar null value.
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    /// Get the structural kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Scalar(_) => Kind::Scalar,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
        }
    }

    /// True for scalar null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    /// True for any scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// True for maps.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True for lists.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// True for records.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Borrow the scalar, if this is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the map, if this is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow the list, if this is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the record, if this is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

/// Borrow the map inside a value, or report the kind that was found.
pub(crate) fn expect_map(value: &Value) -> crate::error::Result<&Map> {
    match value {
        Value::Map(m) => Ok(m),
        other => Err(crate::error::RemoldError::TypeMismatch {
            expected: Kind::Map,
            got: other.kind(),
        }),
    }
}

// =============================================================================
// Conversions from Rust primitives
// =============================================================================

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Scalar(Scalar::Int(i as i64))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Scalar(Scalar::Int(i as i64))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Scalar(Scalar::Int(i as i64))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Scalar(Scalar::Float(x as f64))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Scalar(Scalar::Null),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

// serde_json::Value ingestion (JSON never carries symbolic keys or records;
// those arise only through this crate's own operations)
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Value::Scalar(Scalar::Float(f))
                } else {
                    Value::Scalar(Scalar::String(n.to_string()))
                }
            }
            serde_json::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut map = Map::new();
                for (k, v) in obj {
                    map.insert(Key::Str(k), Value::from(v));
                }
                Value::Map(map)
            }
        }
    }
}
