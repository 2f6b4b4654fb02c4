use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// A converted argument value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Value {
    /// The argument was not given and has no default.
    None,
    /// The state of a flag.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(String),
    /// A filesystem path.
    Path(PathBuf),
    /// The values of an argument taking many values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is `Value::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the `bool` value or `None` if this is not a `Value::Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value or `None` if this is not a `Value::Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice or `None` if this is not a `Value::Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the path or `None` if this is not a `Value::Path`.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::Path(p) => Some(p.as_path()),
            _ => None,
        }
    }

    /// Returns the values or `None` if this is not a `Value::List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::List(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        Value::Path(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

/// Extracts a typed value out of a `Value`.
///
/// Returns `None` when the `Value` has a different shape than `Self`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;

    /// Name of the type used in error messages.
    fn type_name() -> &'static str;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn type_name() -> &'static str {
        "bool"
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn type_name() -> &'static str {
        "integer"
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int().and_then(|n| u64::try_from(n).ok())
    }

    fn type_name() -> &'static str {
        "unsigned integer"
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }

    fn type_name() -> &'static str {
        "string"
    }
}

impl FromValue for PathBuf {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Path(p) => Some(p.clone()),
            Value::Str(s) => Some(PathBuf::from(s)),
            _ => None,
        }
    }

    fn type_name() -> &'static str {
        "path"
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }

    fn type_name() -> &'static str {
        "list"
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_none() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }

    fn type_name() -> &'static str {
        T::type_name()
    }
}
