//! Opaque host values.
//!
//! `Ext` lets a map hold values of any Rust type that the `Value` enum does not
//! model directly, such as numeric arrays or tensors from other crates. The
//! payload is reference counted, so cloning a map shares its ext values.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

trait ExtPayload: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> ExtPayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Clone)]
pub struct Ext {
    type_name: &'static str,
    payload: Rc<dyn ExtPayload>,
}

impl Ext {
    pub fn new<T: Any + fmt::Debug>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            payload: Rc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Last path segment of the type name, `Vec<f64>` rather than
    /// `alloc::vec::Vec<f64>`.
    pub fn short_type_name(&self) -> &'static str {
        let base = match self.type_name.find('<') {
            Some(at) => &self.type_name[..at],
            None => self.type_name,
        };
        match base.rfind("::") {
            Some(at) => &self.type_name[at + 2..],
            None => self.type_name,
        }
    }

    pub fn payload_type_id(&self) -> TypeId {
        Any::type_id(self.as_any())
    }

    pub fn as_any(&self) -> &dyn Any {
        // Rc<dyn ExtPayload> is itself an ExtPayload, go through the trait object.
        ExtPayload::as_any(&*self.payload)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Two ext values are equal only when they share the same payload.
impl PartialEq for Ext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for Ext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ext").field(&self.payload).finish()
    }
}

impl fmt::Display for Ext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Grid {
        rows: usize,
        cols: usize,
    }

    #[test]
    fn test_downcast() {
        let ext = Ext::new(Grid { rows: 2, cols: 3 });
        assert!(ext.is::<Grid>());
        assert!(!ext.is::<Vec<f64>>());
        let grid = ext.downcast_ref::<Grid>().unwrap();
        assert_eq!((grid.rows, grid.cols), (2, 3));
        assert_eq!(ext.payload_type_id(), TypeId::of::<Grid>());
    }

    #[test]
    fn test_short_type_name() {
        let ext = Ext::new(vec![1.0f64, 2.0]);
        assert_eq!(ext.short_type_name(), "Vec<f64>");
        let ext = Ext::new(Grid { rows: 1, cols: 1 });
        assert_eq!(ext.short_type_name(), "Grid");
    }

    #[test]
    fn test_eq_is_identity() {
        let a = Ext::new(vec![1, 2, 3]);
        let b = a.clone();
        let c = Ext::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_uses_debug() {
        let ext = Ext::new(vec![1, 2]);
        assert_eq!(ext.to_string(), "[1, 2]");
    }
}
