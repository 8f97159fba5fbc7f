use crate::model::{GroupedAnswers, SelectionSet};

/// Aplana las respuestas de todas las preguntas en un único conjunto.
pub fn aggregate(answers: &GroupedAnswers) -> SelectionSet {
    answers.values().flatten().copied().collect()
}
