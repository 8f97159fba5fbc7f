// src/resolve.rs

use crate::aggregate::aggregate;
use crate::model::{CategoryLevels, GroupedAnswers, LevelCatalog, SelectionSet};
use log::warn;

/// Calcula, por categoría, el nivel más alto cuyo requisito está cubierto
/// por la selección. Las categorías salen en orden de primera aparición en
/// el catálogo; una categoría sin nivel cumplido vale 0.
pub fn resolve(selection: &SelectionSet, catalog: &LevelCatalog) -> CategoryLevels {
    let mut result = CategoryLevels::new();

    for (category, mut levels) in catalog.grouped() {
        // Orden estable: a igual nivel gana el primero del catálogo
        levels.sort_by(|a, b| b.level.cmp(&a.level));

        for pair in levels.windows(2) {
            if pair[0].level == pair[1].level {
                warn!(
                    "nivel {} repetido en la categoría {:?}; se usa el primero del catálogo",
                    pair[0].level, category
                );
            }
        }

        let reached = levels
            .iter()
            .find(|def| def.required.is_satisfied_by(selection))
            .map(|def| def.level)
            .unwrap_or(0);
        result.insert(category, reached);
    }

    result
}

/// Punto de entrada: respuestas agrupadas + catálogo -> niveles por categoría.
pub fn compute_category_levels(answers: &GroupedAnswers, catalog: &LevelCatalog) -> CategoryLevels {
    resolve(&aggregate(answers), catalog)
}
