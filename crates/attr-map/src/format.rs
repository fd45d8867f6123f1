//! Formatters for `Ext` values.
//!
//! The HTML renderer knows how to show numbers and strings. Everything else a
//! map can hold arrives as an [`Ext`] payload, and a `FormatterRegistry` maps
//! the payload's type to a short cell text such as `array(shape=(2, 3))`.

use crate::Ext;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

type FormatFn = Box<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Array,
    Tensor,
    Custom,
}

struct Entry {
    kind: FormatKind,
    fun: FormatFn,
}

#[derive(Default)]
pub struct FormatterRegistry {
    formatters: HashMap<TypeId, Entry>,
}

static SHARED: LazyLock<FormatterRegistry> = LazyLock::new(FormatterRegistry::with_builtins);

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry used by [`crate::basic_html`]. Built once on first use and
    /// never changed afterwards.
    pub fn shared() -> &'static FormatterRegistry {
        &SHARED
    }

    /// Numeric vectors from the standard library, shown as arrays.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_array::<Vec<f64>>(|v| vec![v.len()]);
        registry.register_array::<Vec<f32>>(|v| vec![v.len()]);
        registry.register_array::<Vec<i64>>(|v| vec![v.len()]);
        registry.register_array::<Vec<i32>>(|v| vec![v.len()]);
        registry.register_array::<Vec<Vec<f64>>>(|rows| {
            let cols = rows.first().map(|r| r.len()).unwrap_or(0);
            vec![rows.len(), cols]
        });
        registry
    }

    /// Register a formatter for payloads of type `T`. A later registration for
    /// the same type replaces the earlier one.
    pub fn register<T, F>(&mut self, fun: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.insert::<T, F>(FormatKind::Custom, fun)
    }

    /// Register `T` as a numeric array, rendered `array(shape=...)`.
    pub fn register_array<T>(&mut self, shape: impl Fn(&T) -> Vec<usize> + Send + Sync + 'static) -> &mut Self
    where
        T: Any,
    {
        self.insert::<T, _>(FormatKind::Array, move |v: &T| {
            format!("array(shape={})", format_shape(&shape(v)))
        })
    }

    /// Register `T` as a tensor, rendered `tensor(shape=...)`.
    pub fn register_tensor<T>(&mut self, shape: impl Fn(&T) -> Vec<usize> + Send + Sync + 'static) -> &mut Self
    where
        T: Any,
    {
        self.insert::<T, _>(FormatKind::Tensor, move |v: &T| {
            format!("tensor(shape={})", format_shape(&shape(v)))
        })
    }

    fn insert<T, F>(&mut self, kind: FormatKind, fun: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let fun: FormatFn = Box::new(move |any: &dyn Any| any.downcast_ref::<T>().map(&fun));
        self.formatters.insert(TypeId::of::<T>(), Entry { kind, fun });
        self
    }

    pub fn kind_of(&self, ext: &Ext) -> Option<FormatKind> {
        self.formatters.get(&ext.payload_type_id()).map(|f| f.kind)
    }

    pub fn format(&self, ext: &Ext) -> Option<String> {
        let formatter = self.formatters.get(&ext.payload_type_id())?;
        (formatter.fun)(ext.as_any())
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.len())
            .finish()
    }
}

/// Dims written as a tuple: `()`, `(3,)`, `(2, 3)`.
pub fn format_shape(dims: &[usize]) -> String {
    match dims {
        [] => "()".to_string(),
        [one] => format!("({},)", one),
        _ => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}
