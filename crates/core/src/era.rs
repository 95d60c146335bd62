//! Named time-period buckets used for thematic styling of content items.
//!
//! Every item resolves to exactly one era: explicit era tags win, then the
//! record's start year is matched against the table's inclusive ranges, and
//! anything else falls back to the most recent era.

use std::sync::OnceLock;

/// One named time period with an inclusive year range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Era {
    pub id: &'static str,
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EraTableError {
    #[error("era table is empty")]
    Empty,

    #[error("era {0} has an inverted year range")]
    InvertedRange(&'static str),

    #[error("eras {0} and {1} have overlapping year ranges")]
    Overlap(&'static str, &'static str),
}

/// Validated, ordered collection of eras.
///
/// The constructor rejects malformed configurations so that classification is
/// never ambiguous: ranges must be well-formed and pairwise disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    pub fn new(mut eras: Vec<Era>) -> Result<Self, EraTableError> {
        if eras.is_empty() {
            return Err(EraTableError::Empty);
        }

        for era in &eras {
            if era.start > era.end {
                return Err(EraTableError::InvertedRange(era.id));
            }
        }

        eras.sort_by_key(|era| era.start);
        for pair in eras.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(EraTableError::Overlap(pair[0].id, pair[1].id));
            }
        }

        Ok(Self { eras })
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// The era whose range contains the year, if any.
    pub fn era_for_year(&self, year: u32) -> Option<&Era> {
        self.eras
            .iter()
            .find(|era| era.start <= year && year <= era.end)
    }

    /// The most recent era in the table.
    pub fn latest(&self) -> &Era {
        // Non-empty by construction.
        self.eras.last().expect("validated era table is non-empty")
    }

    /// Resolve the era id for a record.
    ///
    /// Priority: first explicit era tag, then the start-year range match,
    /// then the most recent era.
    pub fn classify<'a>(&'a self, explicit: &'a [String], start_year: Option<u32>) -> &'a str {
        if let Some(tag) = explicit.first() {
            return tag;
        }

        if let Some(era) = start_year.and_then(|year| self.era_for_year(year)) {
            return era.id;
        }

        self.latest().id
    }
}

/// The era table observed in production content.
pub fn default_table() -> &'static EraTable {
    static TABLE: OnceLock<EraTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        EraTable::new(vec![
            Era {
                id: "2004-2007",
                name: "Dynamic Media & Music",
                start: 2004,
                end: 2007,
            },
            Era {
                id: "2008-2011",
                name: "Premium Cable & Comedy",
                start: 2008,
                end: 2011,
            },
            Era {
                id: "2012-2015",
                name: "Prestige Drama & Social",
                start: 2012,
                end: 2015,
            },
            Era {
                id: "2016-2019",
                name: "Afrofuturism & Nostalgia",
                start: 2016,
                end: 2019,
            },
            Era {
                id: "2020-2022",
                name: "Pandemic Intimacy",
                start: 2020,
                end: 2022,
            },
            Era {
                id: "2023-2025",
                name: "Psychological Complexity",
                start: 2023,
                end: 2025,
            },
        ])
        .expect("default era table is valid")
    })
}
