use super::common::*;
use crate::admissions::domain::Candidate;
use crate::admissions::minority::{is_minority, normalize_ethnicity, MinorityPolicy};

fn with_ethnicity(ethnicity: &str) -> Candidate {
    Candidate::new("Ana", "Rojas", 400, 50, 50).with_ethnicity(ethnicity)
}

#[test]
fn accent_and_case_do_not_affect_matching() {
    assert!(is_minority(&with_ethnicity("Indígena")));
    assert!(is_minority(&with_ethnicity("indigena")));
    assert!(is_minority(&with_ethnicity("  INDÍGENA  ")));
    assert!(is_minority(&with_ethnicity("Judío")));
}

#[test]
fn decomposed_accents_are_folded() {
    assert!(is_minority(&with_ethnicity("Indi\u{301}gena")));
    assert_eq!(normalize_ethnicity("Afrocolombiano\u{301}"), "afrocolombiano");
}

#[test]
fn general_population_is_not_minority() {
    assert!(!is_minority(&with_ethnicity("mestizo")));
    assert!(!is_minority(&with_ethnicity("")));
    assert!(!is_minority(&with_ethnicity("   ")));
    assert!(!is_minority(&ardila()));
}

#[test]
fn keywords_match_as_substrings() {
    assert!(is_minority(&with_ethnicity("Comunidad Raizal de San Andrés")));
    assert!(is_minority(&with_ethnicity("Pueblo Rom")));
    assert!(is_minority(&with_ethnicity("Palenquero")));
}

#[test]
fn custom_policy_replaces_standard_table() {
    let policy = MinorityPolicy::from_keywords(["Wayuu", " ", "wayúu"]);

    assert_eq!(policy.keywords(), &["wayuu".to_string()]);
    assert!(policy.is_minority(&with_ethnicity("Wayúu")));
    assert!(!policy.is_minority(&with_ethnicity("indigena")));
}

#[test]
fn empty_policy_matches_nothing() {
    let policy = MinorityPolicy::from_keywords(Vec::<String>::new());

    assert!(policy.is_empty());
    assert!(!policy.matches(Some("indigena")));
    assert!(!policy.matches(None));
}
