//! Attribute values.
//!
//! A value is a primitive, a collection, or a reference to another entity.
//! References hold the target's *name*, never the entity itself: the
//! `WorldState` is the sole owner of every entity, so cycles between
//! entities are just names pointing at names.

use std::fmt;

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (an unset reference slot, for instance).
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A symbolic constant such as a mode name (`set_time`, `read_time`).
    Symbol(String),
    List(Vec<Value>),
    /// Reference to another entity, by name.
    Ref(String),
}

impl Value {
    /// Build a [`Value::Symbol`].
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Build a [`Value::Ref`] pointing at the entity called `name`.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    /// Build a list of symbols.
    #[must_use]
    pub fn symbols<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(|n| Self::Symbol(n.into())).collect())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The referenced entity name, if this value is a [`Value::Ref`].
    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Ref(name) => Some(name),
            _ => None,
        }
    }

    /// Every entity name this value references, descending into lists.
    #[must_use]
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Ref(name) => names.push(name),
            Self::List(items) => {
                for item in items {
                    item.collect_references(names);
                }
            }
            _ => {}
        }
    }

    /// True if this is a list of symbols equal to `names`, in order.
    #[must_use]
    pub fn is_symbol_list(&self, names: &[&str]) -> bool {
        self.as_list().is_some_and(|items| {
            items.len() == names.len()
                && items
                    .iter()
                    .zip(names)
                    .all(|(item, name)| item.as_symbol() == Some(*name))
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, ":{s}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Ref(name) => write!(f, "&{name}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
