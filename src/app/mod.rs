use crate::aggregate::aggregate;
use crate::data::SurveyData;
use crate::model::{CategoryLevels, GroupedAnswers, LevelCatalog, SelectionSet};
use crate::resolve::resolve;
use crate::validation::{CatalogIssue, validate_catalog};
use crate::view_models::ChartFeed;
use log::debug;
use std::path::PathBuf;

// Submódulos
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::CategoryRow;

/// Estado de la pantalla de resumen: las dos entradas y todo lo que se
/// deriva de ellas. Lo derivado solo cambia dentro de `recompute`.
pub struct SurveyApp {
    answers: GroupedAnswers,
    catalog: LevelCatalog,
    selection: SelectionSet,
    levels: CategoryLevels,
    feed: ChartFeed,
    issues: Vec<CatalogIssue>,
    revision: u64,
    pub source: Option<PathBuf>, // fichero del que se cargó la encuesta
    pub message: String,
}

impl SurveyApp {
    pub fn new(answers: GroupedAnswers, catalog: LevelCatalog) -> Self {
        let mut app = Self {
            answers,
            catalog,
            selection: SelectionSet::new(),
            levels: CategoryLevels::new(),
            feed: ChartFeed::from_levels(&CategoryLevels::new()),
            issues: Vec::new(),
            revision: 0,
            source: None,
            message: String::new(),
        };
        app.recompute();
        app
    }

    pub fn from_survey(survey: SurveyData) -> Self {
        Self::new(survey.answers, survey.levels)
    }

    /// Recalcula selección -> niveles -> gráfico, en ese orden y completo.
    fn recompute(&mut self) {
        let selection = aggregate(&self.answers);
        let levels = resolve(&selection, &self.catalog);
        let feed = ChartFeed::from_levels(&levels);
        let issues = validate_catalog(&self.catalog);

        self.selection = selection;
        self.levels = levels;
        self.feed = feed;
        self.issues = issues;
        self.revision += 1;
        debug!(
            "revisión {}: {} alternativas, {} categorías",
            self.revision,
            self.selection.len(),
            self.levels.len()
        );
    }

    pub fn answers(&self) -> &GroupedAnswers {
        &self.answers
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn levels(&self) -> &CategoryLevels {
        &self.levels
    }

    pub fn chart_feed(&self) -> &ChartFeed {
        &self.feed
    }

    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    /// Aumenta cada vez que cambia alguna entrada.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for SurveyApp {
    fn default() -> Self {
        Self::new(GroupedAnswers::new(), LevelCatalog::default())
    }
}
