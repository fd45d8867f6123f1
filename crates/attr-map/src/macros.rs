//! `dict!` constructor macro.
//!
//! ```rust
//! use attr_map::{dict, Value};
//!
//! // named values
//! let q = dict!(zap = Value::Nil, bald = 6.28);
//! assert_eq!(q["bald"], Value::Float(6.28));
//!
//! // initial pairs, then named values on top
//! let q = dict!([("bald", 1.0), ("hair", 0.0)]; bald = 6.28);
//! assert_eq!(q.key_names(), vec!["bald", "hair"]);
//! assert_eq!(q["bald"], Value::Float(6.28));
//! ```

/// Build an [`AttrMap`](crate::AttrMap) from named values, optionally on top
/// of an initial collection of pairs.
#[macro_export]
macro_rules! dict {
    () => {
        $crate::AttrMap::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut dict = $crate::AttrMap::new();
        $( dict.set(stringify!($key), $value); )+
        dict
    }};
    ($initial:expr; $($key:ident = $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut dict = $crate::AttrMap::from_pairs($initial);
        $( dict.set(stringify!($key), $value); )*
        dict
    }};
}
