//! Records and their `<Placemark>` markup.

use super::escape::{escape_attribute, escape_text, is_blank};
use super::style::StyleKind;

/// Ordered attribute name/value pairs of a record.
///
/// Order is the order the caller supplied, so the same input always renders
/// the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Value of the first attribute with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Attributes {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// One exported data point.
///
/// Coordinates and timestamp are kept as text and written as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Value of the column chosen as the display label (may be empty)
    pub label: String,
    pub attributes: Attributes,
    pub latitude: String,
    pub longitude: String,
    /// Pre-formatted timestamp
    pub timestamp: String,
}

/// Renders one `<Placemark>` block, including its trailing newline.
///
/// `empty_label` replaces a blank `record.label` in `<name>`. Attributes with
/// blank values are left out of `<ExtendedData>`.
pub fn render_placemark(record: &Record, style: StyleKind, empty_label: &str) -> String {
    let mut out = String::new();
    out.push_str("    <Placemark>\n");

    let name = if is_blank(&record.label) {
        empty_label
    } else {
        record.label.as_str()
    };
    out.push_str(&format!("      <name>{}</name>\n", escape_text(name)));

    // KML wants longitude first
    out.push_str("      <Point>\n");
    out.push_str(&format!(
        "        <coordinates>{},{}</coordinates>\n",
        escape_text(&record.longitude),
        escape_text(&record.latitude)
    ));
    out.push_str("      </Point>\n");

    out.push_str("      <ExtendedData>\n");
    for (name, value) in record.attributes.iter() {
        if is_blank(value) {
            continue;
        }
        out.push_str(&format!("        <Data name=\"{}\">\n", escape_attribute(name)));
        out.push_str(&format!("          <value>{}</value>\n", escape_text(value)));
        out.push_str("        </Data>\n");
    }
    out.push_str("      </ExtendedData>\n");

    out.push_str(&format!(
        "      <TimeStamp><when>{}</when></TimeStamp>\n",
        escape_text(&record.timestamp)
    ));
    out.push_str(&format!("      <styleUrl>{}</styleUrl>\n", style.style_url()));
    out.push_str("    </Placemark>\n");
    out
}
