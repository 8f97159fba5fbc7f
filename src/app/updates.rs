use super::*;
use crate::data::{DataError, read_survey_from_path};
use crate::model::OptionId;

impl SurveyApp {
    pub fn set_answers(&mut self, answers: GroupedAnswers) {
        self.answers = answers;
        self.recompute();
    }

    pub fn set_catalog(&mut self, catalog: LevelCatalog) {
        self.catalog = catalog;
        self.recompute();
    }

    /// Sustituye ambas entradas con un solo recálculo
    pub fn set_survey(&mut self, survey: SurveyData) {
        self.answers = survey.answers;
        self.catalog = survey.levels;
        self.recompute();
    }

    /// Cambia las alternativas elegidas en una pregunta
    pub fn answer_question(&mut self, question: impl Into<String>, options: Vec<OptionId>) {
        self.answers.insert(question.into(), options);
        self.recompute();
    }

    pub fn clear_answers(&mut self) {
        self.answers.clear();
        self.recompute();
    }

    /// Vuelve a leer la encuesta desde `source`, si la hay.
    /// Si la lectura falla, el estado anterior se conserva.
    pub fn reload(&mut self) -> Result<(), DataError> {
        let Some(path) = self.source.clone() else {
            return Ok(());
        };
        let survey = read_survey_from_path(&path)?;
        self.set_survey(survey);
        self.message = format!("Encuesta recargada desde {}", path.display());
        Ok(())
    }
}
