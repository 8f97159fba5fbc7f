// src/data.rs

use crate::model::{GroupedAnswers, LevelCatalog, LevelDefinition, OptionId, RequirementSet};
use crate::requirements::parse_requirement_set;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo leer la encuesta: {0}")]
    Io(#[from] std::io::Error),

    #[error("encuesta YAML/JSON inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Requisito tal como llega: un entero, texto "1,2,3" o lista de enteros.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub(crate) enum RawRequirement {
    Single(i64),
    Text(String),
    List(Vec<i64>),
}

/// Nivel tal como lo envía el backend (acepta también sus claves en español).
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct RawLevel {
    #[serde(alias = "nombre_categoria")]
    category: String,
    #[serde(alias = "nivel")]
    level: u32,
    #[serde(alias = "ids_alternativas", default)]
    required_option_ids: Option<RawRequirement>,
}

impl From<RawLevel> for LevelDefinition {
    fn from(raw: RawLevel) -> Self {
        let required = match raw.required_option_ids {
            Some(RawRequirement::Single(id)) => RequirementSet::from_ids([OptionId(id)]),
            Some(RawRequirement::Text(text)) => parse_requirement_set(&text),
            Some(RawRequirement::List(ids)) => {
                RequirementSet::from_ids(ids.into_iter().map(OptionId))
            }
            None => RequirementSet::missing(),
        };
        LevelDefinition::new(raw.category, raw.level, required)
    }
}

/// Documento con las respuestas de un encuestado y el catálogo de niveles.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SurveyData {
    #[serde(default, alias = "respuestas")]
    pub answers: GroupedAnswers,
    #[serde(default, alias = "niveles")]
    pub levels: LevelCatalog,
}

pub fn read_survey_from_str(content: &str) -> Result<SurveyData, DataError> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn read_survey_from_path(path: impl AsRef<Path>) -> Result<SurveyData, DataError> {
    let content = std::fs::read_to_string(path)?;
    read_survey_from_str(&content)
}

/// Carga la encuesta de ejemplo embebida
pub fn read_survey_embedded() -> Result<SurveyData, DataError> {
    read_survey_from_str(include_str!("data/sample_survey.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_backend_field_names() {
        let yaml = r#"
respuestas:
  q1: [1, 2]
  q2: [3]
niveles:
  - nombre_categoria: Liderazgo
    nivel: 1
    ids_alternativas: "1,2"
  - nombre_categoria: Liderazgo
    nivel: 2
    ids_alternativas: "1, 2, 4"
"#;
        let survey = read_survey_from_str(yaml).expect("yaml ok");
        assert_eq!(survey.answers.len(), 2);
        assert_eq!(survey.levels.len(), 2);
        let second = &survey.levels.entries()[1];
        assert_eq!(second.category, "Liderazgo");
        assert_eq!(second.level, 2);
        assert_eq!(second.required.len(), 3);
    }

    #[test]
    fn reads_json_with_list_requirements() {
        let json = r#"{
            "answers": {"q1": [5]},
            "levels": [
                {"category": "A", "level": 1, "required_option_ids": [5, 6]},
                {"category": "A", "level": 2}
            ]
        }"#;
        let survey = read_survey_from_str(json).expect("json ok");
        let entries = survey.levels.entries();
        assert_eq!(entries[0].required.ids().collect::<Vec<_>>(), vec![OptionId(5), OptionId(6)]);
        assert!(entries[1].required.is_missing());
    }

    #[test]
    fn level_without_requirement_is_never_granted() {
        let yaml = r#"
niveles:
  - { nombre_categoria: A, nivel: 3, ids_alternativas: null }
  - { nombre_categoria: B, nivel: 2 }
  - { nombre_categoria: B, nivel: 1, ids_alternativas: "" }
"#;
        let survey = read_survey_from_str(yaml).expect("yaml ok");
        let levels = crate::resolve::compute_category_levels(&survey.answers, &survey.levels);
        assert_eq!(levels.iter().collect::<Vec<_>>(), vec![("A", 0), ("B", 1)]);

        let issues = crate::validation::validate_catalog(&survey.levels);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn malformed_text_is_kept_as_unsatisfiable() {
        let yaml = "levels:\n  - {category: A, level: 1, required_option_ids: \"1,x\"}\n";
        let survey = read_survey_from_str(yaml).expect("yaml ok");
        assert!(survey.levels.entries()[0].required.is_unsatisfiable());
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(matches!(
            read_survey_from_str("levels: 3"),
            Err(DataError::Yaml(_))
        ));
        assert!(matches!(
            read_survey_from_path("no/existe.yaml"),
            Err(DataError::Io(_))
        ));
    }

    #[test]
    fn embedded_sample_loads() {
        let survey = read_survey_embedded().expect("sample ok");
        assert!(!survey.levels.is_empty());
        assert!(!survey.answers.is_empty());
    }
}
