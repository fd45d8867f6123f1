use crate::error::{DictError, DictResult};
use crate::probe::is_probe;
use crate::AutoStr;
use crate::Styler;
use crate::Value;
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

/// A dictionary whose entries can also be read and written as attributes.
///
/// There is a single entry table behind both access paths, so `map["key"]`,
/// `map.get("key")` and `map.attr("key")` always agree, and a `set_attr` is
/// visible through `get` immediately (and the other way round).
///
/// ```rust
/// use attr_map::{dict, Value};
///
/// let mut q = dict!(zap = Value::Nil, bald = 6.28);
/// assert_eq!(q.attr("bald"), Some(&Value::Float(6.28)));
///
/// q.set_attr("bald", 3.14);
/// assert_eq!(q["bald"], Value::Float(3.14));
/// ```
///
/// Mappings stored as values (`HashMap`, `BTreeMap`, `IndexMap`, JSON objects)
/// are turned into nested `AttrMap`s, both at construction and on later sets.
///
/// Rendering goes through the optional `reprstyler` / `reprstyler_html`
/// fields, see [`AttrMap::describe`] and [`AttrMap::describe_html`].
#[derive(Clone, Default)]
pub struct AttrMap {
    values: IndexMap<AutoStr, Value>,
    pub reprstyler: Option<Styler>,
    pub reprstyler_html: Option<Styler>,
}

impl IntoIterator for AttrMap {
    type Item = (AutoStr, Value);
    type IntoIter = indexmap::map::IntoIter<AutoStr, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a AutoStr, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, AutoStr, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AttrMap {
    pub fn iter(&self) -> indexmap::map::Iter<'_, AutoStr, Value> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, AutoStr, Value> {
        self.values.iter_mut()
    }
}

// construction
impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every pair of `initial`. Mapping values become nested maps.
    pub fn from_pairs(
        initial: impl IntoIterator<Item = (impl Into<AutoStr>, impl Into<Value>)>,
    ) -> Self {
        let mut map = Self::new();
        for (key, value) in initial {
            map.set(key, value);
        }
        map
    }

    /// Copy `initial`, then apply every named pair on top of it, so a named
    /// value wins over an initial value with the same key.
    pub fn with_named(
        initial: impl IntoIterator<Item = (impl Into<AutoStr>, impl Into<Value>)>,
        named: impl IntoIterator<Item = (impl Into<AutoStr>, impl Into<Value>)>,
    ) -> Self {
        Self::from_pairs(initial).with_pairs(named)
    }

    /// Set key-value (chainable)
    pub fn with(mut self, key: impl Into<AutoStr>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set multiple key-values (chainable)
    pub fn with_pairs(
        mut self,
        pairs: impl IntoIterator<Item = (impl Into<AutoStr>, impl Into<Value>)>,
    ) -> Self {
        for (key, value) in pairs {
            self.set(key, value);
        }
        self
    }

    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.reprstyler = Some(styler);
        self
    }

    pub fn with_styler_html(mut self, styler: Styler) -> Self {
        self.reprstyler_html = Some(styler);
        self
    }

    /// Create an AttrMapBuilder for conditional construction
    ///
    /// ```rust
    /// use attr_map::AttrMap;
    ///
    /// let map = AttrMap::builder()
    ///     .pair("name", "probe")
    ///     .pair_if(false, "depth", 3)
    ///     .build();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn builder() -> AttrMapBuilder {
        AttrMapBuilder::new()
    }
}

// keyed access
impl AttrMap {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> Vec<AutoStr> {
        self.values.keys().cloned().collect()
    }

    pub fn key_names(&self) -> Vec<&str> {
        self.values.keys().map(|k| k.as_str()).collect()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, AutoStr, Value> {
        self.values.values()
    }

    /// Keyed lookup. Never logs.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    /// Store `value` under `key`, returning the value it replaced. The key
    /// keeps its position if it was already present.
    pub fn set(&mut self, key: impl Into<AutoStr>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn delete(&mut self, key: &str) -> DictResult<Value> {
        match self.values.shift_remove(key) {
            Some(value) => Ok(value),
            None => Err(DictError::key_not_found(key, self.values.keys())),
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

// attribute access
impl AttrMap {
    /// Attribute-style read.
    ///
    /// A missing name is not an error: it logs a warning listing the valid
    /// keys and returns `None`. Probe names (see [`crate::PROBE_ATTRS`]) return
    /// `None` without the warning.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        let found = self.values.get(name);
        if found.is_none() {
            self.warn_missing(name);
        }
        found
    }

    pub fn attr_mut(&mut self, name: &str) -> Option<&mut Value> {
        if !self.values.contains_key(name) {
            self.warn_missing(name);
        }
        self.values.get_mut(name)
    }

    pub fn set_attr(&mut self, name: impl Into<AutoStr>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        if !crate::is_attr_name(&name) {
            tracing::debug!(key = %name, "key is not an attribute name, only keyed access can spell it");
        }
        self.set(name, value)
    }

    pub fn del_attr(&mut self, name: &str) -> DictResult<Value> {
        self.delete(name)
    }

    fn warn_missing(&self, name: &str) {
        if is_probe(name) {
            return;
        }
        let valid: Vec<&str> = self.key_names();
        tracing::warn!(
            key = name,
            "no key \"{}\" in this dictionary. valid keys are {:?}",
            name,
            valid
        );
    }
}

// typed readers
impl AttrMap {
    pub fn get_or_nil(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Nil)
    }

    pub fn get_str_or(&self, key: &str, default: impl Into<AutoStr>) -> AutoStr {
        match self.get(key) {
            Some(Value::Str(s)) => s.clone(),
            _ => default.into(),
        }
    }

    pub fn get_str_of(&self, key: &str) -> AutoStr {
        self.get_str_or(key, "")
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Int(i)) => *i,
            _ => default,
        }
    }

    pub fn get_int_of(&self, key: &str) -> i64 {
        self.get_int_or(key, 0)
    }

    pub fn get_float_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Float(f)) => *f,
            Some(Value::Int(i)) => *i as f64,
            _ => default,
        }
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    pub fn get_bool_of(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    pub fn get_map(&self, key: &str) -> Option<&AttrMap> {
        self.get(key).and_then(Value::as_map)
    }

    pub fn get_map_mut(&mut self, key: &str) -> Option<&mut AttrMap> {
        self.get_mut(key).and_then(Value::as_map_mut)
    }

    pub fn merge(&mut self, other: &AttrMap) {
        for (key, value) in &other.values {
            self.set(key.clone(), value.clone());
        }
    }
}

// state
impl AttrMap {
    /// Every entry as a flat map. Stylers are closures and are not part of the
    /// exported state.
    pub fn export_state(&self) -> IndexMap<AutoStr, Value> {
        self.values.clone()
    }

    /// Load entries from an exported state. Entries already present and not in
    /// `state` are kept.
    pub fn import_state(&mut self, state: IndexMap<AutoStr, Value>) {
        for (key, value) in state {
            self.set(key, value);
        }
    }

    pub fn from_state(state: IndexMap<AutoStr, Value>) -> Self {
        let mut map = Self::new();
        map.import_state(state);
        map
    }
}

// rendering
impl AttrMap {
    /// Default structural text: `{key: value, ...}`, ignoring stylers on this
    /// map. Stylers that need a fallback text should call this rather than
    /// `describe`.
    pub fn structural(&self) -> String {
        format!("{}", Structural(self))
    }

    /// Text form: `reprstyler` if set, otherwise `structural()`. A failing
    /// styler is logged and replaced by `structural()`.
    pub fn describe(&self) -> String {
        match &self.reprstyler {
            Some(styler) => styler.render_or_fallback("reprstyler", self),
            None => self.structural(),
        }
    }

    /// HTML form: `reprstyler_html` if set, else `reprstyler`, else
    /// `structural()`.
    pub fn describe_html(&self) -> String {
        match (&self.reprstyler_html, &self.reprstyler) {
            (Some(styler), _) => styler.render_or_fallback("reprstyler_html", self),
            (None, Some(styler)) => styler.render_or_fallback("reprstyler", self),
            (None, None) => self.structural(),
        }
    }
}

struct Structural<'a>(&'a AttrMap);

impl Display for Structural<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values = &self.0.values;
        write!(f, "{{")?;
        for (i, (k, v)) in values.iter().enumerate() {
            write!(f, "{}: {}", k, v)?;
            if i < values.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}

impl Display for AttrMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for AttrMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AttrMap");
        s.field("values", &self.values);
        if let Some(styler) = &self.reprstyler {
            s.field("reprstyler", styler);
        }
        if let Some(styler) = &self.reprstyler_html {
            s.field("reprstyler_html", styler);
        }
        s.finish()
    }
}

/// Maps compare by entries only; stylers are not compared.
impl PartialEq for AttrMap {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Index<&str> for AttrMap {
    type Output = Value;

    /// Panics when `key` is missing, like `HashMap`'s `Index`.
    fn index(&self, key: &str) -> &Value {
        match self.values.get(key) {
            Some(value) => value,
            None => panic!("no key \"{}\" in this dictionary", key),
        }
    }
}

impl IndexMut<&str> for AttrMap {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.values.get_mut(key) {
            Some(value) => value,
            None => panic!("no key \"{}\" in this dictionary", key),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttrMap
where
    K: Into<AutoStr>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K, V> Extend<(K, V)> for AttrMap
where
    K: Into<AutoStr>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

// ========== AttrMapBuilder ==========

/// Builder for creating `AttrMap`s with conditional construction support
#[derive(Debug, Clone, Default)]
pub struct AttrMapBuilder {
    pairs: Vec<(AutoStr, Value)>,
    reprstyler: Option<Styler>,
    reprstyler_html: Option<Styler>,
}

impl AttrMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key-value pair to the map
    pub fn pair(mut self, key: impl Into<AutoStr>, value: impl Into<Value>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Add key-value pairs in a batch
    pub fn pairs(
        mut self,
        pairs: impl IntoIterator<Item = (impl Into<AutoStr>, impl Into<Value>)>,
    ) -> Self {
        for (key, value) in pairs {
            self.pairs.push((key.into(), value.into()));
        }
        self
    }

    /// Conditionally add a key-value pair
    pub fn pair_if(self, condition: bool, key: impl Into<AutoStr>, value: impl Into<Value>) -> Self {
        if condition {
            self.pair(key, value)
        } else {
            self
        }
    }

    pub fn styler(mut self, styler: Styler) -> Self {
        self.reprstyler = Some(styler);
        self
    }

    pub fn styler_html(mut self, styler: Styler) -> Self {
        self.reprstyler_html = Some(styler);
        self
    }

    pub fn build(self) -> AttrMap {
        let mut map = AttrMap::from_pairs(self.pairs);
        map.reprstyler = self.reprstyler;
        map.reprstyler_html = self.reprstyler_html;
        map
    }
}
