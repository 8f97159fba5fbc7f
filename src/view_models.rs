// src/view_models.rs

use crate::model::CategoryLevels;
use serde::Serialize;

pub const CHART_LABEL: &str = "Nivel alcanzado";

/// Lo que necesita el gráfico radar: etiquetas y valores alineados por
/// índice, más los límites sugeridos del eje.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartFeed {
    pub label: String,
    pub categories: Vec<String>,
    pub values: Vec<u32>,
    pub suggested_min: u32,
    pub suggested_max: u32,
}

impl ChartFeed {
    pub fn from_levels(levels: &CategoryLevels) -> Self {
        let categories: Vec<String> = levels.categories().map(str::to_owned).collect();
        let values: Vec<u32> = levels.values().collect();
        // Sin valores el eje sería [0, 0]
        let suggested_max = values.iter().max().map(|m| m.saturating_add(1)).unwrap_or(1);
        Self {
            label: CHART_LABEL.to_owned(),
            categories,
            values,
            suggested_min: 0,
            suggested_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub level: u32,
    pub max_level: u32, // nivel más alto definido en el catálogo
}

impl CategoryRow {
    pub fn label(&self) -> String {
        if self.level == 0 {
            format!("{} ❌ sin nivel", self.category)
        } else if self.level >= self.max_level {
            format!("{} ✅ nivel {}", self.category, self.level)
        } else {
            format!("{} 🔓 nivel {} de {}", self.category, self.level, self.max_level)
        }
    }
}
