//! Stylers: user-supplied renderers for a map.
//!
//! A styler takes the map and returns its text (or HTML). A styler that fails
//! never takes the caller down with it: the error goes to the log and the map's
//! structural form is used instead.

use crate::AttrMap;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Signature every styler has. The default renderers in [`crate::render`]
/// already match it.
pub type StyleFn = dyn Fn(&AttrMap) -> miette::Result<String>;

#[derive(Clone)]
pub struct Styler {
    name: &'static str,
    fun: Rc<StyleFn>,
}

impl Styler {
    pub fn new<F>(fun: F) -> Self
    where
        F: Fn(&AttrMap) -> miette::Result<String> + 'static,
    {
        Self {
            name: "styler",
            fun: Rc::new(fun),
        }
    }

    /// Same as `new`, with a name that shows up in logs and `Debug` output.
    pub fn named<F>(name: &'static str, fun: F) -> Self
    where
        F: Fn(&AttrMap) -> miette::Result<String> + 'static,
    {
        Self {
            name,
            fun: Rc::new(fun),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, subject: &AttrMap) -> miette::Result<String> {
        (self.fun)(subject)
    }

    /// Run the styler, falling back to `subject.structural()` when it returns
    /// an error or panics.
    pub(crate) fn render_or_fallback(&self, field: &str, subject: &AttrMap) -> String {
        let reason = match panic::catch_unwind(AssertUnwindSafe(|| self.call(subject))) {
            Ok(Ok(text)) => return text,
            Ok(Err(err)) => err.to_string(),
            Err(payload) => format!("panicked: {}", format_panic(payload)),
        };
        tracing::error!(
            styler = self.name,
            field,
            error = %reason,
            "{} failed: {}\n-- falling back to the default representation --",
            field,
            reason
        );
        subject.structural()
    }
}

fn format_panic(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with non-string payload".into()
    }
}

impl fmt::Debug for Styler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<styler {}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict;

    #[test]
    fn test_call() {
        let map = dict!(bald = 6.28);
        let styler = Styler::new(|m: &AttrMap| Ok(format!("baldness score: {:.3}", m.get_float_or("bald", 0.0))));
        assert_eq!(styler.call(&map).unwrap(), "baldness score: 6.280");
    }

    #[test]
    fn test_fallback_on_error() {
        let map = dict!(bald = 6.28);
        let styler = Styler::named("broken", |_: &AttrMap| Err(miette::miette!("boom")));
        assert_eq!(styler.render_or_fallback("reprstyler", &map), "{bald: 6.28}");
    }

    #[test]
    fn test_fallback_on_panic() {
        let map = dict!(bald = 6.28);
        let styler = Styler::named("typo", |m: &AttrMap| Ok(format!("hair: {}", m["hair"])));
        assert_eq!(styler.render_or_fallback("reprstyler", &map), "{bald: 6.28}");
    }

    #[test]
    fn test_format_panic() {
        assert_eq!(format_panic(Box::new("static")), "static");
        assert_eq!(format_panic(Box::new(String::from("owned"))), "owned");
        assert_eq!(format_panic(Box::new(7u8)), "panic with non-string payload");
    }

    #[test]
    fn test_debug() {
        let styler = Styler::named("basic", |_: &AttrMap| Ok(String::new()));
        assert_eq!(format!("{:?}", styler), "<styler basic>");
        assert_eq!(styler.name(), "basic");
    }
}
