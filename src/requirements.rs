// src/requirements.rs

use crate::model::{OptionId, RequirementSet};
use log::warn;

/// Convierte el texto "3,7,12" en un conjunto de requisitos.
///
/// Los espacios alrededor de cada entrada se ignoran. Una entrada que no es
/// un entero decimal (también una vacía entre comas) deja el requisito
/// insatisfacible en lugar de fallar. Un texto vacío no exige nada.
pub fn parse_requirement_set(text: &str) -> RequirementSet {
    let mut required = RequirementSet::new();
    if text.trim().is_empty() {
        return required;
    }

    for entry in text.split(',') {
        let trimmed = entry.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => required.push_id(OptionId(id)),
            Err(_) => {
                warn!("entrada de requisito no numérica: {entry:?} en {text:?}");
                required.push_malformed(trimmed);
            }
        }
    }
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequiredOption;

    #[test]
    fn parses_plain_list() {
        let req = parse_requirement_set("3,7,12");
        assert_eq!(
            req.ids().collect::<Vec<_>>(),
            vec![OptionId(3), OptionId(7), OptionId(12)]
        );
        assert!(!req.is_unsatisfiable());
    }

    #[test]
    fn tolerates_whitespace_and_duplicates() {
        let req = parse_requirement_set(" 1 , 2,2 ,\t3 ");
        assert_eq!(req.len(), 3);
        assert!(req.malformed().is_empty());
    }

    #[test]
    fn malformed_entry_becomes_sentinel() {
        let req = parse_requirement_set("1,x,3");
        let opts: Vec<_> = req.options().copied().collect();
        assert!(opts.contains(&RequiredOption::Id(OptionId(1))));
        assert!(opts.contains(&RequiredOption::Id(OptionId(3))));
        assert!(opts.contains(&RequiredOption::Unsatisfiable));
        assert_eq!(req.malformed(), ["x".to_string()]);
    }

    #[test]
    fn empty_entry_between_commas_is_malformed() {
        assert!(parse_requirement_set("1,,3").is_unsatisfiable());
        assert!(parse_requirement_set("1.5").is_unsatisfiable());
    }

    #[test]
    fn blank_text_requires_nothing() {
        assert!(parse_requirement_set("").is_empty());
        assert!(parse_requirement_set("   ").is_empty());
    }

    #[test]
    fn accepts_signed_integers() {
        let req = parse_requirement_set("-4,+5");
        assert_eq!(req.ids().collect::<Vec<_>>(), vec![OptionId(-4), OptionId(5)]);
    }
}
