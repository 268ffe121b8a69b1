use super::result_set::RecordSet;
use crate::error::AppError;
use std::collections::HashMap;

pub const TEAM_ID: &str = "TEAM_ID";
pub const ABBREVIATION: &str = "ABBREVIATION";

/// Maps team abbreviations (e.g. "DEN") to the provider's numeric team id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    ids: HashMap<String, i64>,
}

impl TeamDirectory {
    /// Builds the directory from the team-years record set. Franchises that no
    /// longer exist have a null abbreviation and are skipped.
    pub fn from_record_set(set: &RecordSet) -> Result<Self, AppError> {
        let id_col = set.column(TEAM_ID)?;
        let abbr_col = set.column(ABBREVIATION)?;

        let mut ids = HashMap::with_capacity(set.len());
        for row in set.rows() {
            let Some(abbreviation) = row.optional_string(abbr_col)? else {
                continue;
            };
            ids.insert(abbreviation, row.integer(id_col)?);
        }

        Ok(Self { ids })
    }

    pub fn team_id(&self, short_code: &str) -> Option<i64> {
        self.ids.get(short_code).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<(String, i64)> for TeamDirectory {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
