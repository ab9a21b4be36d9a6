//! Fixed visual styles shared by every placemark.
//!
//! Each document defines three styles (one per quality level) and a StyleMap
//! for each. Placemarks then point at a StyleMap by id instead of repeating
//! the full style, which keeps large exports compact.

use strum_macros::{Display, EnumIter};

use crate::config::{ICON_URL, LABEL_SCALE};

/// Visual style of a placemark.
///
/// `Slow` (yellow) doubles as the fallback when a record's quality is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StyleKind {
    /// Green marker
    Pass,
    /// Yellow marker
    Slow,
    /// Red marker
    Fail,
}

impl StyleKind {
    /// Entry of [`STYLE_TABLE`] for this kind.
    pub fn definition(self) -> &'static StyleDefinition {
        match self {
            StyleKind::Fail => &STYLE_TABLE[0],
            StyleKind::Pass => &STYLE_TABLE[1],
            StyleKind::Slow => &STYLE_TABLE[2],
        }
    }

    /// Color name used in the style ids (`red`, `green` or `yellow`).
    pub fn color_name(self) -> &'static str {
        self.definition().color_name
    }

    /// Anchor a placemark uses to reference its StyleMap, e.g. `#stylemap_green`.
    pub fn style_url(self) -> &'static str {
        self.definition().style_url
    }
}

/// One row of the process-wide style table.
#[derive(Debug)]
pub struct StyleDefinition {
    pub kind: StyleKind,
    pub color_name: &'static str,
    /// KML colors are `aabbggrr`, not `rrggbbaa`.
    pub color_code: &'static str,
    pub style_url: &'static str,
}

/// Styles in emission order.
pub static STYLE_TABLE: [StyleDefinition; 3] = [
    StyleDefinition {
        kind: StyleKind::Fail,
        color_name: "red",
        color_code: "ff0000ff",
        style_url: "#stylemap_red",
    },
    StyleDefinition {
        kind: StyleKind::Pass,
        color_name: "green",
        color_code: "ff00ff00",
        style_url: "#stylemap_green",
    },
    StyleDefinition {
        kind: StyleKind::Slow,
        color_name: "yellow",
        color_code: "ff00ffff",
        style_url: "#stylemap_yellow",
    },
];

/// StyleMap interaction states, both mapped to the same style.
const STYLE_MAP_KEYS: [&str; 2] = ["normal", "highlight"];

/// Renders the StyleMap and Style blocks for all three colors.
pub fn render_styles() -> String {
    let mut out = String::new();
    for definition in &STYLE_TABLE {
        render_style(&mut out, definition);
    }
    out
}

fn render_style(out: &mut String, definition: &StyleDefinition) {
    let color = definition.color_name;

    out.push_str(&format!("    <StyleMap id=\"stylemap_{}\">\n", color));
    for key in STYLE_MAP_KEYS {
        out.push_str("      <Pair>\n");
        out.push_str(&format!("        <key>{}</key>\n", key));
        out.push_str(&format!("        <styleUrl>#style_{}</styleUrl>\n", color));
        out.push_str("      </Pair>\n");
    }
    out.push_str("    </StyleMap>\n");

    out.push_str(&format!("    <Style id=\"style_{}\">\n", color));
    out.push_str("      <IconStyle>\n");
    out.push_str(&format!("        <color>{}</color>\n", definition.color_code));
    out.push_str("        <Icon>\n");
    out.push_str(&format!("          <href>{}</href>\n", ICON_URL));
    out.push_str("        </Icon>\n");
    out.push_str("      </IconStyle>\n");
    out.push_str("      <LabelStyle>\n");
    out.push_str(&format!("        <scale>{}</scale>\n", LABEL_SCALE));
    out.push_str("      </LabelStyle>\n");
    out.push_str("    </Style>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_style_table_matches_kinds() {
        for kind in StyleKind::iter() {
            assert_eq!(kind.definition().kind, kind);
        }
    }

    #[test]
    fn test_style_urls() {
        assert_eq!(StyleKind::Pass.style_url(), "#stylemap_green");
        assert_eq!(StyleKind::Fail.style_url(), "#stylemap_red");
        assert_eq!(StyleKind::Slow.style_url(), "#stylemap_yellow");
    }

    #[test]
    fn test_color_codes_are_aabbggrr() {
        assert_eq!(StyleKind::Fail.definition().color_code, "ff0000ff");
        assert_eq!(StyleKind::Pass.definition().color_code, "ff00ff00");
        assert_eq!(StyleKind::Slow.definition().color_code, "ff00ffff");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StyleKind::Pass.to_string(), "pass");
        assert_eq!(StyleKind::Slow.to_string(), "slow");
        assert_eq!(StyleKind::Fail.to_string(), "fail");
    }

    #[test]
    fn test_render_styles_counts() {
        let styles = render_styles();
        assert_eq!(styles.matches("<StyleMap id=").count(), 3);
        assert_eq!(styles.matches("<Style id=").count(), 3);
        assert_eq!(styles.matches("<Pair>").count(), 6);
        assert_eq!(styles.matches("<key>normal</key>").count(), 3);
        assert_eq!(styles.matches("<key>highlight</key>").count(), 3);
        assert_eq!(styles.matches("<scale>1.0</scale>").count(), 3);
        assert_eq!(styles.matches(ICON_URL).count(), 3);
    }

    #[test]
    fn test_render_styles_order() {
        let styles = render_styles();
        let red = styles.find("stylemap_red").expect("red style missing");
        let green = styles.find("stylemap_green").expect("green style missing");
        let yellow = styles.find("stylemap_yellow").expect("yellow style missing");
        assert!(red < green);
        assert!(green < yellow);
    }

    #[test]
    fn test_style_map_pairs_point_at_same_style() {
        let styles = render_styles();
        for definition in &STYLE_TABLE {
            let start = styles
                .find(&format!("<StyleMap id=\"stylemap_{}\">", definition.color_name))
                .expect("style map missing");
            let end = start + styles[start..].find("</StyleMap>").expect("unclosed style map");
            let block = &styles[start..end];
            let target = format!("<styleUrl>#style_{}</styleUrl>", definition.color_name);
            assert_eq!(block.matches(&target).count(), 2);
            assert_eq!(block.matches("<styleUrl>").count(), 2);
        }
    }

    #[test]
    fn test_style_tinted_by_color_code() {
        let styles = render_styles();
        let start = styles.find("<Style id=\"style_green\">").expect("green style missing");
        let block = &styles[start..];
        let end = block.find("</Style>").expect("unclosed style");
        assert!(block[..end].contains("<color>ff00ff00</color>"));
    }
}
