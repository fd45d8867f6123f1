//! A dictionary with attribute-style access.
//!
//! [`AttrMap`] stores string keys and [`Value`]s and lets callers reach every
//! entry both by key (`map["k"]`, [`AttrMap::get`]) and as an attribute
//! ([`AttrMap::attr`], [`AttrMap::set_attr`], [`AttrMap::del_attr`]). Rendering
//! can be customised per map with [`Styler`]s; [`basic_text`] and
//! [`basic_html`] are ready-made ones.

mod string;
pub use string::*;

mod ext;
pub use ext::*;

mod value;
pub use value::*;

mod error;
pub use error::*;

mod probe;
pub use probe::*;

mod styler;
pub use styler::*;

mod dict;
pub use dict::*;

mod format;
pub use format::*;

mod render;
pub use render::*;

mod serialize;

mod macros;
