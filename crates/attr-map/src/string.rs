pub use ecow::EcoString as AutoStr;

/// Quote a key the way the text renderers list it: `'key'`.
pub fn quoted(key: &str) -> AutoStr {
    let mut out = AutoStr::new();
    out.push('\'');
    out.push_str(key);
    out.push('\'');
    out
}

/// Whether `name` could be written as a field access (`map.name`) in most
/// host languages. Keys that fail this are still valid entries, they just
/// only make sense through keyed access.
pub fn is_attr_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_astr_as_hash_key() {
        use std::collections::HashMap;

        let mut map: HashMap<AutoStr, AutoStr> = HashMap::new();
        let key = AutoStr::from("key");
        let val = AutoStr::from("value");
        map.insert(key.clone(), val.clone());

        assert_eq!(map.get("key"), Some(&val));
        assert_eq!(map.get(&key), Some(&val));
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("bald"), "'bald'");
        assert_eq!(quoted(""), "''");
    }

    #[test]
    fn test_is_attr_name() {
        assert!(is_attr_name("bald"));
        assert!(is_attr_name("_private"));
        assert!(is_attr_name("x2"));
        assert!(!is_attr_name("2x"));
        assert!(!is_attr_name("with space"));
        assert!(!is_attr_name(""));
    }
}
