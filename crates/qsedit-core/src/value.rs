//! Values that can be assigned to a query parameter.

use std::fmt;

/// A parameter value handed to [`set_parameters`](crate::editor::set_parameters).
///
/// `Null` and blank text remove the parameter instead of storing it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl QueryValue {
    /// String form stored in the query string, or `None` for `Null`.
    pub fn as_query_string(&self) -> Option<String> {
        match self {
            QueryValue::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// True for `Null`, empty text, and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Text(s) => s.trim().is_empty(),
            QueryValue::Integer(_) | QueryValue::Float(_) | QueryValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => Ok(()),
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Text(s.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

impl From<f32> for QueryValue {
    fn from(x: f32) -> Self {
        QueryValue::Float(f64::from(x))
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(n: $t) -> Self {
                    QueryValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

// Values past i64::MAX fall back to their decimal text.
macro_rules! wide_integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(n: $t) -> Self {
                    i64::try_from(n)
                        .map(QueryValue::Integer)
                        .unwrap_or_else(|_| QueryValue::Text(n.to_string()))
                }
            }
        )*
    };
}

wide_integer_value!(u64, usize, isize);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(QueryValue::Null)
    }
}
