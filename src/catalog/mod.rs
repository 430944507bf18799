//! Controlled vocabularies for skill selection
//!
//! One plain-text file per skill group (UTF-8, one skill per line, blank
//! lines ignored). A missing file falls back to the built-in default list
//! for that group. The catalog is a pure function of filesystem state, read
//! per call.

use crate::graph::types::{SubCat, SubTipo};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Static description of one skill group
#[derive(Debug, Clone, Copy)]
pub struct SkillGroupSpec {
    /// Record field name (e.g. `hab_tecnicas_of`)
    pub name: &'static str,
    /// Display label for the form
    pub label: &'static str,
    pub sub_tipo: SubTipo,
    pub sub_cat: Option<SubCat>,
    /// Catalog file name inside the data directory
    pub file: &'static str,
    fallback: &'static [&'static str],
}

/// The four skill groups of the current schema
pub const GROUPS: [SkillGroupSpec; 4] = [
    SkillGroupSpec {
        name: "hab_tecnicas_of",
        label: "Técnicas Ofensivas",
        sub_tipo: SubTipo::Tecnica,
        sub_cat: Some(SubCat::Ofensiva),
        file: "habilidades_tecnicas_ofensivas.txt",
        fallback: &["projetar", "chutar", "golpear", "derrubar"],
    },
    SkillGroupSpec {
        name: "hab_tecnicas_def",
        label: "Técnicas Defensivas",
        sub_tipo: SubTipo::Tecnica,
        sub_cat: Some(SubCat::Defensiva),
        file: "habilidades_tecnicas_defensivas.txt",
        fallback: &["bloquear", "imobilizar", "defender", "segurar"],
    },
    SkillGroupSpec {
        name: "hab_taticas_of",
        label: "Tática Ofensiva",
        sub_tipo: SubTipo::Tatica,
        sub_cat: Some(SubCat::Ofensiva),
        file: "habilidades_taticas_ofensivas.txt",
        fallback: &["feintar", "atacar ângulo", "combinação", "pressão ofensiva"],
    },
    SkillGroupSpec {
        name: "hab_taticas_def",
        label: "Tática Defensiva",
        sub_tipo: SubTipo::Tatica,
        sub_cat: Some(SubCat::Defensiva),
        file: "habilidades_taticas_defensivas.txt",
        fallback: &["marcação", "cobertura", "controle de distância", "contra-golpe"],
    },
];

/// Look up a group by its record field name
pub fn group_spec(name: &str) -> Option<&'static SkillGroupSpec> {
    GROUPS.iter().find(|g| g.name == name)
}

/// One loaded skill group, ready for the data-entry form
#[derive(Debug, Clone, Serialize)]
pub struct CatalogGroup {
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
}

/// The loaded catalog, groups in schema order
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub groups: Vec<CatalogGroup>,
}

impl Catalog {
    pub fn options_for(&self, name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.options.as_slice())
    }
}

/// Read one catalog file: trimmed non-blank lines, or the fallback list
fn read_list(path: &Path, fallback: &[&str]) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => {
            debug!(path = %path.display(), "catalog file missing, using fallback");
            fallback.iter().map(|s| s.to_string()).collect()
        }
    }
}

/// Load every skill group from `dir`
pub fn load_catalog(dir: &Path) -> Catalog {
    let groups = GROUPS
        .iter()
        .map(|spec| CatalogGroup {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            options: read_list(&dir.join(spec.file), spec.fallback),
        })
        .collect();
    Catalog { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_use_fallbacks() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(dir.path());

        assert_eq!(catalog.groups.len(), 4);
        assert_eq!(
            catalog.options_for("hab_tecnicas_of").unwrap(),
            ["projetar", "chutar", "golpear", "derrubar"]
        );
    }

    #[test]
    fn test_file_overrides_fallback_and_skips_blanks() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("habilidades_taticas_defensivas.txt"),
            "  marcação alta \n\n contra-ataque\n   \n",
        )
        .unwrap();

        let catalog = load_catalog(dir.path());
        assert_eq!(
            catalog.options_for("hab_taticas_def").unwrap(),
            ["marcação alta", "contra-ataque"]
        );
        // other groups untouched
        assert_eq!(catalog.options_for("hab_taticas_of").unwrap().len(), 4);
    }

    #[test]
    fn test_group_spec_lookup() {
        let spec = group_spec("hab_tecnicas_def").unwrap();
        assert_eq!(spec.sub_tipo, SubTipo::Tecnica);
        assert_eq!(spec.sub_cat, Some(SubCat::Defensiva));
        assert!(group_spec("hab_desconhecida").is_none());
    }
}
