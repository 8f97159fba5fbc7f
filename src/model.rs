use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identificador de una alternativa de respuesta.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct OptionId(pub i64);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OptionId {
    fn from(value: i64) -> Self {
        OptionId(value)
    }
}

/// Respuestas enviadas: pregunta -> alternativas elegidas en esa pregunta.
pub type GroupedAnswers = IndexMap<String, Vec<OptionId>>;

/// Todas las alternativas elegidas, sin duplicados.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet(BTreeSet<OptionId>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: OptionId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_subset(&self, other: &SelectionSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<OptionId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = OptionId>>(iter: I) -> Self {
        SelectionSet(iter.into_iter().collect())
    }
}

impl Extend<OptionId> for SelectionSet {
    fn extend<I: IntoIterator<Item = OptionId>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Un elemento de un requisito de nivel.
///
/// `Unsatisfiable` ocupa el lugar de una entrada que no es un entero:
/// no es un `OptionId`, así que ninguna selección puede contenerlo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum RequiredOption {
    Id(OptionId),
    Unsatisfiable,
}

/// Conjunto de alternativas que hay que haber marcado para alcanzar un nivel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequirementSet {
    options: BTreeSet<RequiredOption>,
    malformed: Vec<String>,
    missing: bool,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = OptionId>>(ids: I) -> Self {
        Self {
            options: ids.into_iter().map(RequiredOption::Id).collect(),
            malformed: Vec::new(),
            missing: false,
        }
    }

    /// Requisito que no vino en los datos: nunca se cumple.
    pub fn missing() -> Self {
        Self {
            options: BTreeSet::from([RequiredOption::Unsatisfiable]),
            malformed: Vec::new(),
            missing: true,
        }
    }

    pub fn push_id(&mut self, id: OptionId) {
        self.options.insert(RequiredOption::Id(id));
    }

    /// Registra una entrada mal formada; el requisito queda insatisfacible.
    pub fn push_malformed(&mut self, raw: impl Into<String>) {
        self.options.insert(RequiredOption::Unsatisfiable);
        self.malformed.push(raw.into());
    }

    pub fn options(&self) -> impl Iterator<Item = &RequiredOption> {
        self.options.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.options.iter().filter_map(|o| match o {
            RequiredOption::Id(id) => Some(*id),
            RequiredOption::Unsatisfiable => None,
        })
    }

    /// Texto tal cual de las entradas que no eran enteros.
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.options.contains(&RequiredOption::Unsatisfiable)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Cierto si cada alternativa requerida está en la selección.
    /// Un requisito vacío se cumple siempre, incluso con selección vacía.
    pub fn is_satisfied_by(&self, selection: &SelectionSet) -> bool {
        self.options.iter().all(|o| match o {
            RequiredOption::Id(id) => selection.contains(*id),
            RequiredOption::Unsatisfiable => false,
        })
    }
}

/// Un nivel de una categoría y las alternativas que lo desbloquean.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "crate::data::RawLevel")]
pub struct LevelDefinition {
    pub category: String,
    pub level: u32,
    pub required: RequirementSet,
}

impl LevelDefinition {
    pub fn new(category: impl Into<String>, level: u32, required: RequirementSet) -> Self {
        Self {
            category: category.into(),
            level,
            required,
        }
    }
}

/// Catálogo de niveles, en el orden en que llega.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LevelCatalog(Vec<LevelDefinition>);

impl LevelCatalog {
    pub fn new(levels: Vec<LevelDefinition>) -> Self {
        LevelCatalog(levels)
    }

    pub fn entries(&self) -> &[LevelDefinition] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LevelDefinition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Categorías distintas en orden de primera aparición.
    pub fn categories(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|d| d.category.as_str())
            .collect::<IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    /// Definiciones agrupadas por categoría, en una sola pasada.
    pub fn grouped(&self) -> IndexMap<&str, Vec<&LevelDefinition>> {
        let mut groups: IndexMap<&str, Vec<&LevelDefinition>> = IndexMap::new();
        for def in &self.0 {
            groups.entry(def.category.as_str()).or_default().push(def);
        }
        groups
    }

    pub fn levels_for<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LevelDefinition> {
        self.0.iter().filter(move |d| d.category == category)
    }

    /// Nivel más alto definido para la categoría (0 si no hay ninguno).
    pub fn max_level(&self, category: &str) -> u32 {
        self.levels_for(category).map(|d| d.level).max().unwrap_or(0)
    }
}

impl FromIterator<LevelDefinition> for LevelCatalog {
    fn from_iter<I: IntoIterator<Item = LevelDefinition>>(iter: I) -> Self {
        LevelCatalog(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LevelCatalog {
    type Item = &'a LevelDefinition;
    type IntoIter = std::slice::Iter<'a, LevelDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Nivel alcanzado por categoría. 0 = ningún requisito cumplido.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryLevels(IndexMap<String, u32>);

impl CategoryLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, level: u32) {
        self.0.insert(category.into(), level);
    }

    pub fn get(&self, category: &str) -> Option<u32> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(ids: &[i64]) -> SelectionSet {
        ids.iter().copied().map(OptionId).collect()
    }

    #[test]
    fn empty_requirement_is_satisfied_by_empty_selection() {
        assert!(RequirementSet::new().is_satisfied_by(&SelectionSet::new()));
    }

    #[test]
    fn unsatisfiable_entry_blocks_every_selection() {
        let mut req = RequirementSet::from_ids([OptionId(1)]);
        req.push_malformed("x");
        assert!(req.is_unsatisfiable());
        assert!(!req.is_satisfied_by(&sel(&[1, 2, 3])));
        assert_eq!(req.ids().collect::<Vec<_>>(), vec![OptionId(1)]);
        assert_eq!(req.malformed(), ["x".to_string()]);
    }

    #[test]
    fn missing_requirement_is_never_satisfied() {
        let req = RequirementSet::missing();
        assert!(req.is_missing());
        assert!(req.is_unsatisfiable());
        assert!(!req.is_satisfied_by(&SelectionSet::new()));
        assert!(!req.is_satisfied_by(&sel(&[1, 2, 3])));
        assert!(!RequirementSet::new().is_missing());
    }

    #[test]
    fn category_levels_serialize_in_catalog_order() {
        let mut levels = CategoryLevels::new();
        levels.insert("Z", 2);
        levels.insert("A", 0);
        let yaml = serde_yaml::to_string(&levels).expect("yaml ok");
        assert_eq!(yaml, "Z: 2\nA: 0\n");
    }

    #[test]
    fn catalog_categories_keep_first_seen_order() {
        let catalog: LevelCatalog = vec![
            LevelDefinition::new("B", 1, RequirementSet::new()),
            LevelDefinition::new("A", 1, RequirementSet::new()),
            LevelDefinition::new("B", 3, RequirementSet::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.categories(), vec!["B", "A"]);
        let grouped = catalog.grouped();
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(
            grouped["B"].iter().map(|d| d.level).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(catalog.max_level("B"), 3);
        assert_eq!(catalog.max_level("Z"), 0);
    }
}
