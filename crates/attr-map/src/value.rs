use crate::AttrMap;
use crate::AutoStr;
use crate::Ext;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(AutoStr),
    Array(Vec<Value>),
    Map(AttrMap),
    Ext(Ext),
}

// constructors
impl Value {
    pub fn str(text: impl Into<AutoStr>) -> Self {
        Value::Str(text.into())
    }

    pub fn array() -> Self {
        Value::Array(vec![])
    }

    pub fn map() -> Self {
        Value::Map(AttrMap::new())
    }

    pub fn ext<T: std::any::Any + fmt::Debug>(value: T) -> Self {
        Value::Ext(Ext::new(value))
    }

    /// Text form without quotes around strings, used for headers and cells.
    pub fn repr(&self) -> AutoStr {
        match self {
            Value::Str(s) => s.clone(),
            _ => self.to_string().into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Ext(ext) => ext.type_name(),
        }
    }
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

// Quick Readers
impl Value {
    pub fn as_str(&self) -> &str {
        match self {
            Value::Str(value) => value.as_str(),
            _ => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            _ => false,
        }
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(value) => *value,
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(value) => *value,
            Value::Int(value) => *value as f64,
            _ => 0.0,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Value::Map(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut AttrMap> {
        match self {
            Value::Map(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ext(&self) -> Option<&Ext> {
        match self {
            Value::Ext(value) => Some(value),
            _ => None,
        }
    }
}

fn print_array(f: &mut Formatter<'_>, value: &[Value]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in value.iter().enumerate() {
        write!(f, "{}", v)?;
        if i < value.len() - 1 {
            write!(f, ", ")?;
        }
    }
    write!(f, "]")
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "\"{}\"", value),
            Value::Array(value) => print_array(f, value),
            // nested maps render through their own stylers
            Value::Map(map) => write!(f, "{}", map.describe()),
            Value::Ext(ext) => write!(f, "{}", ext),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Value {
        Value::Int(u as i64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Value {
        match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(u as f64),
        }
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Value {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s.into())
    }
}

impl From<AutoStr> for Value {
    fn from(s: AutoStr) -> Value {
        Value::Str(s)
    }
}

impl From<Ext> for Value {
    fn from(ext: Ext) -> Value {
        Value::Ext(ext)
    }
}

impl From<AttrMap> for Value {
    fn from(map: AttrMap) -> Value {
        Value::Map(map)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Value {
        match v {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Value {
        Value::Array(v.into_iter().map(|v| v.into()).collect())
    }
}

// Every mapping becomes a nested AttrMap, whether it arrives at construction
// or through a later set.
impl<K, V> From<HashMap<K, V>> for Value
where
    K: Into<AutoStr>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V>) -> Value {
        Value::Map(AttrMap::from_pairs(map))
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<AutoStr>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Value {
        Value::Map(AttrMap::from_pairs(map))
    }
}

impl<K, V> From<IndexMap<K, V>> for Value
where
    K: Into<AutoStr>,
    V: Into<Value>,
{
    fn from(map: IndexMap<K, V>) -> Value {
        Value::Map(AttrMap::from_pairs(map))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s.into()),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(obj) => Value::Map(AttrMap::from_pairs(obj)),
        }
    }
}
