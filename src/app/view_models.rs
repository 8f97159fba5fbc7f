use super::*;

impl SurveyApp {
    /// Filas para la tabla de resumen, en el orden de las categorías.
    pub fn summary_rows(&self) -> Vec<CategoryRow> {
        self.levels
            .iter()
            .map(|(category, level)| CategoryRow {
                category: category.to_owned(),
                level,
                max_level: self.catalog.max_level(category),
            })
            .collect()
    }
}
