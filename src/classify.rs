//! Built-in color classification policies.
//!
//! Each policy looks at one attribute of a record and turns its raw value
//! into a [`Verdict`]. Which policy (and which column) to use is chosen at
//! export time.

use strum_macros::{Display, EnumString, VariantNames};

use crate::config::{DEFAULT_CONNECTION_TEST_COLUMN, DEFAULT_SIGNAL_STRENGTH_COLUMN};
use crate::kml::{Attributes, ColorClassifier, Verdict};

/// Available classification policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ClassifierKind {
    /// PASS / FAIL connection test results
    ConnectionTest,
    /// Cell signal strength thresholds
    SignalStrength,
    /// Every record gets the neutral style
    Neutral,
}

impl ClassifierKind {
    /// Column read when none is given explicitly.
    pub fn default_column(self) -> Option<&'static str> {
        match self {
            ClassifierKind::ConnectionTest => Some(DEFAULT_CONNECTION_TEST_COLUMN),
            ClassifierKind::SignalStrength => Some(DEFAULT_SIGNAL_STRENGTH_COLUMN),
            ClassifierKind::Neutral => None,
        }
    }
}

/// Classifies by a connection test result column.
///
/// `PASS` is green and `FAIL` is red. `SLOW`, a missing value and anything
/// else are neutral. Matching ignores case and surrounding whitespace.
#[derive(Debug, Clone)]
pub struct ConnectionTestClassifier {
    pub column: String,
}

impl ColorClassifier for ConnectionTestClassifier {
    fn classify(&self, attributes: &Attributes) -> Verdict {
        match attributes.get(&self.column).map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("PASS") => Verdict::Green,
            Some(v) if v.eq_ignore_ascii_case("FAIL") => Verdict::Red,
            _ => Verdict::Other,
        }
    }
}

/// Classifies by a numeric signal strength column (dBm).
#[derive(Debug, Clone)]
pub struct SignalStrengthClassifier {
    pub column: String,
    pub green_at_or_above: f64,
    pub red_at_or_below: f64,
}

impl ColorClassifier for SignalStrengthClassifier {
    fn classify(&self, attributes: &Attributes) -> Verdict {
        let dbm = match attributes
            .get(&self.column)
            .and_then(|v| v.trim().parse::<f64>().ok())
        {
            Some(dbm) if dbm.is_finite() => dbm,
            _ => return Verdict::Other,
        };
        if dbm >= self.green_at_or_above {
            Verdict::Green
        } else if dbm <= self.red_at_or_below {
            Verdict::Red
        } else {
            Verdict::Other
        }
    }
}

/// Always neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralClassifier;

impl ColorClassifier for NeutralClassifier {
    fn classify(&self, _attributes: &Attributes) -> Verdict {
        Verdict::Other
    }
}

/// Builds the classifier for `kind`.
///
/// `column` overrides the kind's default column. The thresholds only apply to
/// [`ClassifierKind::SignalStrength`].
pub fn build_classifier(
    kind: ClassifierKind,
    column: Option<&str>,
    green_at_or_above: f64,
    red_at_or_below: f64,
) -> Box<dyn ColorClassifier> {
    let column = column
        .or(kind.default_column())
        .unwrap_or_default()
        .to_string();
    match kind {
        ClassifierKind::ConnectionTest => Box::new(ConnectionTestClassifier { column }),
        ClassifierKind::SignalStrength => Box::new(SignalStrengthClassifier {
            column,
            green_at_or_above,
            red_at_or_below,
        }),
        ClassifierKind::Neutral => Box::new(NeutralClassifier),
    }
}
