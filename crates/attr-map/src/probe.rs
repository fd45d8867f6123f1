/// Attribute names that notebook front ends and array/tensor libraries query
/// to find out whether an object supports some protocol. A map answers these
/// with `None` and no warning.
pub const PROBE_ATTRS: &[&str] = &[
    "_ipython_canary_method_should_not_exist_",
    "_ipython_display_",
    "_repr_mimebundle_",
    "reprstyler_html",
    "reprstyler",
    "_repr_markdown_",
    "_repr_svg_",
    "_repr_png_",
    "_repr_pdf_",
    "_repr_jpeg_",
    "_repr_latex_",
    "_repr_json_",
    "_repr_javascript_",
    "is_tensor_like",
];

pub fn is_probe(name: &str) -> bool {
    PROBE_ATTRS.contains(&name)
}
