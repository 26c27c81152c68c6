//! Minimal HTML element rendering

use maud::html;

/// Escape text for use inside an HTML attribute value or element body
pub fn escape_html(value: &str) -> String {
    html! { (value) }.into_string()
}

/// Render `<name attr="v" ...>value</name>`
///
/// Attribute values are escaped and attributes without a value are left out.
/// `value` is inserted as-is so labels may carry entities like `&#8592;`.
pub fn tag(name: &str, value: impl std::fmt::Display, attributes: &[(&str, Option<&str>)]) -> String {
    let mut html = format!("<{name}");
    for (attr, attr_value) in attributes {
        if let Some(attr_value) = attr_value {
            html.push_str(&format!(" {attr}=\"{}\"", escape_html(attr_value)));
        }
    }
    html.push_str(&format!(">{value}</{name}>"));
    html
}
