//! Default renderers. Each has the styler signature, so it can be installed
//! directly:
//!
//! ```rust
//! use attr_map::{basic_text, dict, Styler};
//!
//! let mut q = dict!(zap = 1, bald = 6.28);
//! q.reprstyler = Some(Styler::named("basic_text", basic_text));
//! assert_eq!(q.describe(), "keys:'zap', 'bald', ");
//! ```

use crate::{quoted, AttrMap, FormatterRegistry, Styler, Value};

/// Keys that name the styler fields. Never listed by the renderers.
pub const STYLER_KEYS: [&str; 2] = ["reprstyler", "reprstyler_html"];

/// Keys shown in the HTML header instead of the table.
const HEADER_KEYS: [&str; 2] = ["type", "name"];

fn is_styler_key(key: &str) -> bool {
    STYLER_KEYS.contains(&key)
}

/// `keys:'a', 'b', ` for every key except the styler keys.
pub fn basic_text(subject: &AttrMap) -> miette::Result<String> {
    let mut txt = String::from("keys:");
    for key in subject.key_names() {
        if is_styler_key(key) {
            continue;
        }
        txt.push_str(&quoted(key));
        txt.push_str(", ");
    }
    Ok(txt)
}

/// HTML summary table using the shared formatter registry.
pub fn basic_html(subject: &AttrMap) -> miette::Result<String> {
    basic_html_with(subject, FormatterRegistry::shared())
}

/// HTML summary table: an optional `Type:` / `Name:` header followed by a
/// key/value table of the remaining entries.
pub fn basic_html_with(subject: &AttrMap, registry: &FormatterRegistry) -> miette::Result<String> {
    let mut txt = String::new();
    if let Some(ty) = subject.get("type") {
        txt.push_str(&format!("<em>Type:</em> {}; ", ty.repr()));
    }
    if let Some(name) = subject.get("name") {
        txt.push_str(&format!("<em>Name:</em> {}; ", name.repr()));
    }
    txt.push_str("<br/>");
    txt.push_str("<table><tr><th>key</th><th>value</th></tr>");
    for (key, value) in subject.iter() {
        if is_styler_key(key) || HEADER_KEYS.contains(&key.as_str()) {
            continue;
        }
        let cell = html_cell(value, registry);
        txt.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", key, cell));
    }
    txt.push_str("</table>");
    Ok(txt)
}

/// Cell text in priority order: numbers, strings, registered ext formatters,
/// then the value's own text form.
fn html_cell(value: &Value, registry: &FormatterRegistry) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => s.to_string(),
        Value::Ext(ext) => registry
            .format(ext)
            .unwrap_or_else(|| ext.to_string()),
        other => other.to_string(),
    }
}

/// A styler running [`basic_html_with`] against its own registry.
pub fn html_styler(registry: FormatterRegistry) -> Styler {
    Styler::named("basic_html", move |subject: &AttrMap| {
        basic_html_with(subject, &registry)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dict, Ext};

    #[derive(Debug)]
    struct Tensor(Vec<usize>);

    #[test]
    fn test_basic_text() {
        let map = dict!(zap = Value::Nil, bald = 6.28);
        assert_eq!(basic_text(&map).unwrap(), "keys:'zap', 'bald', ");
    }

    #[test]
    fn test_basic_text_skips_styler_keys() {
        let map = dict!(reprstyler = "x", a = 1, reprstyler_html = "y");
        assert_eq!(basic_text(&map).unwrap(), "keys:'a', ");
        assert_eq!(basic_text(&AttrMap::new()).unwrap(), "keys:");
    }

    #[test]
    fn test_basic_html_skips_styler_keys() {
        let map = dict!(reprstyler = "x", a = 1, reprstyler_html = "y");
        assert_eq!(
            basic_html(&map).unwrap(),
            "<br/><table><tr><th>key</th><th>value</th></tr><tr><td>a</td><td>1</td></tr></table>"
        );
    }

    #[test]
    fn test_basic_html_header_and_table() {
        let map = dict!(type = "transducer", name = "probe", count = 4, ratio = 0.5, label = "hi");
        let html = basic_html(&map).unwrap();
        assert_eq!(
            html,
            "<em>Type:</em> transducer; <em>Name:</em> probe; <br/>\
             <table><tr><th>key</th><th>value</th></tr>\
             <tr><td>count</td><td>4</td></tr>\
             <tr><td>ratio</td><td>0.5</td></tr>\
             <tr><td>label</td><td>hi</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_basic_html_no_header() {
        let map = dict!(a = true);
        assert_eq!(
            basic_html(&map).unwrap(),
            "<br/><table><tr><th>key</th><th>value</th></tr><tr><td>a</td><td>true</td></tr></table>"
        );
    }

    #[test]
    fn test_basic_html_ext_cells() {
        let map = dict!(
            weights = Ext::new(vec![0.5f64, 0.25, 0.25]),
            field = Ext::new(Tensor(vec![2, 8, 8])),
            other = Ext::new('c')
        );

        let html = basic_html(&map).unwrap();
        assert!(html.contains("<tr><td>weights</td><td>array(shape=(3,))</td></tr>"));
        assert!(html.contains("<tr><td>field</td><td>Tensor([2, 8, 8])</td></tr>"));
        assert!(html.contains("<tr><td>other</td><td>'c'</td></tr>"));

        let mut registry = FormatterRegistry::new();
        registry.register_tensor::<Tensor>(|t| t.0.clone());
        let html = basic_html_with(&map, &registry).unwrap();
        assert!(html.contains("<tr><td>field</td><td>tensor(shape=(2, 8, 8))</td></tr>"));
        // not registered in this registry
        assert!(html.contains("<tr><td>weights</td><td>[0.5, 0.25, 0.25]</td></tr>"));
    }

    #[test]
    fn test_html_styler() {
        let mut registry = FormatterRegistry::new();
        registry.register_tensor::<Tensor>(|t| t.0.clone());
        let mut map = dict!(field = Ext::new(Tensor(vec![4])));
        map.reprstyler_html = Some(html_styler(registry));
        assert!(map.describe_html().contains("tensor(shape=(4,))"));
        // text rendering is unaffected by an html-only styler
        assert_eq!(map.describe(), "{field: Tensor([4])}");
    }
}
