use crate::model::Category;

/// Item-number prefixes that identify instruments. Everything else is
/// treated as an implant.
const INSTRUMENT_PREFIXES: [&str; 2] = ["1509", "1505"];

/// Maps item numbers to product categories via a prefix rule table.
///
/// The rule set is held as data rather than baked into record construction so
/// additional prefixes (or a lookup table sourced elsewhere) can be added
/// without touching the builder.
#[derive(Debug, Clone)]
pub struct Classifier {
    instrument_prefixes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            instrument_prefixes: INSTRUMENT_PREFIXES
                .iter()
                .map(|prefix| (*prefix).to_string())
                .collect(),
        }
    }
}

impl Classifier {
    /// Classifies an item number. Items matching no instrument prefix fall
    /// through to [`Category::Implant`]; there is currently no unclassified
    /// outcome.
    pub fn classify(&self, item: &str) -> Category {
        let matches_prefix = self
            .instrument_prefixes
            .iter()
            .any(|prefix| item.starts_with(prefix.as_str()));
        if matches_prefix {
            Category::Instrument
        } else {
            Category::Implant
        }
    }
}
