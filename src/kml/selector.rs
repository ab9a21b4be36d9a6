//! Picks a placemark style from the record's quality signal.

use super::escape::is_blank;
use super::placemark::Attributes;
use super::style::StyleKind;

/// Qualitative result of a [`ColorClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Green,
    Red,
    /// Neither good nor bad, or not enough data to tell.
    Other,
}

/// Policy mapping a record's raw attribute values to a verdict.
///
/// Implementations decide which attribute carries the quality signal (a
/// connection test result, a signal strength, ...). Closures taking
/// `&Attributes` implement it as well.
pub trait ColorClassifier {
    fn classify(&self, attributes: &Attributes) -> Verdict;
}

impl<F> ColorClassifier for F
where
    F: Fn(&Attributes) -> Verdict,
{
    fn classify(&self, attributes: &Attributes) -> Verdict {
        self(attributes)
    }
}

/// Selects the style for one record.
///
/// A record without a usable label is always yellow, whatever the
/// classifier would say about its attributes.
pub fn select_style(
    label: &str,
    attributes: &Attributes,
    classifier: &dyn ColorClassifier,
) -> StyleKind {
    if is_blank(label) {
        return StyleKind::Slow;
    }
    match classifier.classify(attributes) {
        Verdict::Green => StyleKind::Pass,
        Verdict::Red => StyleKind::Fail,
        Verdict::Other => StyleKind::Slow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(verdict: Verdict) -> impl Fn(&Attributes) -> Verdict {
        move |_: &Attributes| verdict
    }

    fn attrs() -> Attributes {
        Attributes::from(vec![("google_connection_test", "PASS")])
    }

    #[test]
    fn test_blank_label_is_always_yellow() {
        for verdict in [Verdict::Green, Verdict::Red, Verdict::Other] {
            for label in ["", " ", "\t\n"] {
                assert_eq!(
                    select_style(label, &attrs(), &always(verdict)),
                    StyleKind::Slow,
                    "label {:?} with verdict {:?}",
                    label,
                    verdict
                );
            }
        }
    }

    #[test]
    fn test_blank_label_skips_classifier() {
        let called = std::cell::Cell::new(false);
        let classifier = |_: &Attributes| {
            called.set(true);
            Verdict::Green
        };
        select_style("", &attrs(), &classifier);
        assert!(!called.get());
    }

    #[test]
    fn test_verdict_mapping() {
        assert_eq!(
            select_style("Home", &attrs(), &always(Verdict::Green)),
            StyleKind::Pass
        );
        assert_eq!(
            select_style("Home", &attrs(), &always(Verdict::Red)),
            StyleKind::Fail
        );
        assert_eq!(
            select_style("Home", &attrs(), &always(Verdict::Other)),
            StyleKind::Slow
        );
    }

    #[test]
    fn test_classifier_receives_attributes() {
        let classifier = |a: &Attributes| match a.get("google_connection_test") {
            Some("PASS") => Verdict::Green,
            _ => Verdict::Red,
        };
        assert_eq!(select_style("x", &attrs(), &classifier), StyleKind::Pass);
        assert_eq!(
            select_style("x", &Attributes::new(), &classifier),
            StyleKind::Fail
        );
    }
}
