use crate::models::ClippingRecord;

/// Make a title usable as a path component by replacing every `:` with `-`
///
/// No other characters are touched.
///
/// # Examples
///
/// ```
/// use kindle_clipper::writer::sanitize_component;
///
/// assert_eq!(sanitize_component("Rainbow: A Search"), "Rainbow- A Search");
/// ```
pub fn sanitize_component(name: &str) -> String {
    name.replace(':', "-")
}

/// Render the contents of a clipping file
///
/// ```text
/// Title: <title>
/// Author: <author>
/// <location label>
///
/// <body>
/// ```
///
/// Every field is trimmed and no newline follows the body.
pub fn render_record(record: &ClippingRecord) -> String {
    format!(
        "Title: {}\nAuthor: {}\n{}\n\n{}",
        record.title.trim(),
        record.author.trim(),
        record.location.label.trim(),
        record.body.trim()
    )
}
