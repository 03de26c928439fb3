// Language variety descriptor: period plus region, with the phonological-law
// switches the rest of the crate consults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const PERIOD_NAMES: &str = "mycenaean epic attic koine medieval modern";

/// Historical period, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Mycenaean,
    Epic,
    Attic,
    Koine,
    Medieval,
    Modern,
}

impl Period {
    pub fn name(self) -> &'static str {
        match self {
            Period::Mycenaean => "mycenaean",
            Period::Epic => "epic",
            Period::Attic => "attic",
            Period::Koine => "koine",
            Period::Medieval => "medieval",
            Period::Modern => "modern",
        }
    }
}

/// Pre-Koine regional grouping. Koine was supra-regional, so the region only
/// matters for earlier periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Ionic-Attic side of the dialect map; false for Doric and Achaean.
    pub eastern: bool,
    pub attic: bool,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            eastern: true,
            attic: false,
        }
    }
}

/// A particular variety of Greek, e.g. Homeric epic.
///
/// Built once from an identifier and passed by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dialect {
    pub period: Period,
    #[serde(default)]
    pub region: Region,
}

impl Dialect {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            region: Region::default(),
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Homeric epic, the variety the rule tables were calibrated on.
    pub fn epic() -> Self {
        Self::new(Period::Epic)
    }

    pub fn is_epic(&self) -> bool {
        self.period == Period::Epic
    }

    /// Whether a long penult before a light ultima takes a circumflex
    /// (σωτῆρα, not σωτήρα). Holds for Attic, Ionic and Koine; Doric lacks it
    /// in the early periods, and it is no longer productive after Koine.
    pub fn has_sotera_rule(&self) -> bool {
        if self.period > Period::Koine {
            return false;
        }
        if !self.region.eastern && self.period < Period::Attic {
            return false;
        }
        true
    }

    /// Homer omits the augment freely; later prose does not.
    pub fn has_optional_augment(&self) -> bool {
        self.period <= Period::Epic
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::epic()
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let period = match name.trim().to_lowercase().as_str() {
            "mycenaean" => Period::Mycenaean,
            "epic" | "homeric" => Period::Epic,
            "attic" => Period::Attic,
            "koine" => Period::Koine,
            "medieval" => Period::Medieval,
            "modern" | "νεα_ελληνικα" => Period::Modern,
            _ => {
                return Err(Error::UnknownDialect {
                    name: name.to_string(),
                    allowed: PERIOD_NAMES,
                })
            }
        };
        let region = Region {
            eastern: true,
            attic: period == Period::Attic,
        };
        Ok(Self { period, region })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang=grc, script=greek, period={}", self.period.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_periods() {
        assert_eq!("epic".parse::<Dialect>().unwrap().period, Period::Epic);
        assert_eq!("Attic".parse::<Dialect>().unwrap().period, Period::Attic);
        assert!("attic".parse::<Dialect>().unwrap().region.attic);
        assert_eq!("koine".parse::<Dialect>().unwrap().period, Period::Koine);
    }

    #[test]
    fn test_unknown_period_is_an_error() {
        let err = "doric".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, Error::UnknownDialect { ref name, .. } if name == "doric"));
        assert!(err.to_string().contains("epic"));
    }

    #[test]
    fn test_sotera_rule_by_period_and_region() {
        assert!(Dialect::epic().has_sotera_rule());
        assert!(Dialect::new(Period::Koine).has_sotera_rule());
        assert!(!Dialect::new(Period::Medieval).has_sotera_rule());
        let western = Region {
            eastern: false,
            attic: false,
        };
        assert!(!Dialect::epic().with_region(western).has_sotera_rule());
        assert!(Dialect::new(Period::Attic).with_region(western).has_sotera_rule());
    }

    #[test]
    fn test_serde_lowercase_period() {
        let json = serde_json::to_string(&Dialect::epic()).unwrap();
        assert!(json.contains("\"period\":\"epic\""));
        let back: Dialect = serde_json::from_str(r#"{"period":"koine"}"#).unwrap();
        assert_eq!(back, Dialect::new(Period::Koine));
    }
}
