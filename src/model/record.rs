//! The relationship record submitted by students
//!
//! One record ties a luta to a brincadeira and lists the skills exercised,
//! grouped by skill group. Groups are a name -> set mapping rather than fixed
//! fields, so the same type covers revisions with three or four groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Validation failures surfaced to the submitting user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Informe a Luta e a Brincadeira.")]
    BlankIdentity,

    #[error("Selecione ao menos uma habilidade/tática.")]
    NoSkills,
}

/// One relationship entry: (luta, brincadeira) plus grouped skill sets.
///
/// Skill groups serialize flattened, so the JSON file keeps the original
/// field names (`hab_tecnicas_of`, `hab_taticas_def`, ...). `BTreeSet`
/// deduplicates and keeps each group sorted ascending on write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Record {
    pub luta: String,
    pub brincadeira: String,

    #[serde(flatten)]
    pub skills: IndexMap<String, BTreeSet<String>>,
}

impl Record {
    pub fn new(luta: impl Into<String>, brincadeira: impl Into<String>) -> Self {
        Record {
            luta: luta.into(),
            brincadeira: brincadeira.into(),
            skills: IndexMap::new(),
        }
    }

    /// Add skills to a group, trimming names and skipping blanks
    pub fn add_skills<I, S>(&mut self, group: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.skills.entry(group.to_string()).or_default();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                set.insert(name.to_string());
            }
        }
    }

    /// Natural key: case-insensitive, trim-normalized (luta, brincadeira)
    pub fn key(&self) -> (String, String) {
        (
            self.luta.trim().to_lowercase(),
            self.brincadeira.trim().to_lowercase(),
        )
    }

    /// Whether two records refer to the same (luta, brincadeira) pair
    pub fn same_pair(&self, other: &Record) -> bool {
        self.key() == other.key()
    }

    /// Union each skill group of `other` into this record
    pub fn merge(&mut self, other: &Record) {
        for (group, names) in &other.skills {
            let set = self.skills.entry(group.clone()).or_default();
            set.extend(names.iter().cloned());
        }
    }

    /// Total number of selected skills across all groups
    pub fn total_skills(&self) -> usize {
        self.skills.values().map(|set| set.len()).sum()
    }

    /// Trim identity fields and drop blank skill names
    pub fn normalize(&mut self) {
        self.luta = self.luta.trim().to_string();
        self.brincadeira = self.brincadeira.trim().to_string();
        for set in self.skills.values_mut() {
            *set = set
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    /// Validate a submission. `allow_empty_skills` relaxes the
    /// at-least-one-skill rule.
    pub fn validate(&self, allow_empty_skills: bool) -> Result<(), ValidationError> {
        if self.luta.trim().is_empty() || self.brincadeira.trim().is_empty() {
            return Err(ValidationError::BlankIdentity);
        }
        if !allow_empty_skills && self.total_skills() == 0 {
            return Err(ValidationError::NoSkills);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(luta: &str, brincadeira: &str, skills: &[&str]) -> Record {
        let mut r = Record::new(luta, brincadeira);
        r.add_skills("hab_tecnicas_of", skills.iter().copied());
        r
    }

    #[test]
    fn test_key_is_case_insensitive_and_trimmed() {
        let a = record("  Judô ", "Queda de braço", &[]);
        let b = record("judô", "QUEDA DE BRAÇO ", &[]);
        assert!(a.same_pair(&b));
    }

    #[test]
    fn test_add_skills_dedups_and_skips_blanks() {
        let r = record("Judô", "Queda", &["projetar", " projetar ", "  ", "chutar"]);
        let set = &r.skills["hab_tecnicas_of"];
        assert_eq!(set.len(), 2);
        assert!(set.contains("projetar"));
        assert!(set.contains("chutar"));
    }

    #[test]
    fn test_merge_unions_per_group() {
        let mut a = record("Judô", "Queda", &["projetar"]);
        a.add_skills("hab_taticas_def", ["marcação"]);
        let mut b = record("Judô", "Queda", &["chutar", "projetar"]);
        b.add_skills("hab_tecnicas_def", ["bloquear"]);

        a.merge(&b);
        let expected: BTreeSet<String> =
            ["chutar", "projetar"].iter().map(|s| s.to_string()).collect();
        assert_eq!(a.skills["hab_tecnicas_of"], expected);
        assert_eq!(a.skills["hab_tecnicas_def"].len(), 1);
        assert_eq!(a.skills["hab_taticas_def"].len(), 1);
    }

    #[test]
    fn test_validate_blank_identity() {
        let r = record("   ", "Queda", &["projetar"]);
        assert_eq!(r.validate(false), Err(ValidationError::BlankIdentity));
        let r = record("Judô", "", &["projetar"]);
        assert_eq!(r.validate(true), Err(ValidationError::BlankIdentity));
    }

    #[test]
    fn test_validate_empty_skills_is_configurable() {
        let r = record("Judô", "Queda", &[]);
        assert_eq!(r.validate(false), Err(ValidationError::NoSkills));
        assert_eq!(r.validate(true), Ok(()));
    }

    #[test]
    fn test_serialization_keeps_flat_field_names() {
        let r = record("Judô", "Queda de braço", &["projetar"]);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["luta"], "Judô");
        assert_eq!(json["hab_tecnicas_of"][0], "projetar");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
