// src/validation.rs

use crate::model::LevelCatalog;
use std::collections::HashSet;
use std::fmt;

/// Problemas de calidad de datos en un catálogo de niveles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Una entrada del requisito no es un entero; ese nivel nunca se alcanza.
    MalformedRequirement {
        category: String,
        level: u32,
        entry: String,
    },
    /// El nivel no trae lista de alternativas; nunca se alcanza.
    MissingRequirement { category: String, level: u32 },
    /// Dos definiciones con la misma categoría y el mismo nivel.
    DuplicateLevel { category: String, level: u32 },
    /// Nivel 0: se confunde con "ningún nivel alcanzado".
    ZeroLevel { category: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MalformedRequirement { category, level, entry } => write!(
                f,
                "{category} nivel {level}: alternativa no numérica {entry:?}, nivel inalcanzable"
            ),
            CatalogIssue::MissingRequirement { category, level } => {
                write!(f, "{category} nivel {level}: sin lista de alternativas, nivel inalcanzable")
            }
            CatalogIssue::DuplicateLevel { category, level } => {
                write!(f, "{category}: nivel {level} definido más de una vez")
            }
            CatalogIssue::ZeroLevel { category } => {
                write!(f, "{category}: nivel 0 definido")
            }
        }
    }
}

/// Revisa el catálogo antes de resolver. No modifica nada ni falla.
pub fn validate_catalog(catalog: &LevelCatalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<(&str, u32)> = HashSet::new();

    for def in catalog {
        if def.level == 0 {
            issues.push(CatalogIssue::ZeroLevel {
                category: def.category.clone(),
            });
        }
        if !seen.insert((def.category.as_str(), def.level)) {
            issues.push(CatalogIssue::DuplicateLevel {
                category: def.category.clone(),
                level: def.level,
            });
        }
        if def.required.is_missing() {
            issues.push(CatalogIssue::MissingRequirement {
                category: def.category.clone(),
                level: def.level,
            });
        }
        for entry in def.required.malformed() {
            issues.push(CatalogIssue::MalformedRequirement {
                category: def.category.clone(),
                level: def.level,
                entry: entry.clone(),
            });
        }
    }

    issues
}
