use boolir_core::tokenizer::{is_stopword, normalize};

#[test]
fn it_lowercases_and_strips_punctuation() {
    let words = normalize("Prove that SQRT(2) is irrational!");
    assert_eq!(words, vec!["prove", "sqrt2", "irrational"]);
}

#[test]
fn it_filters_stopwords() {
    let words = normalize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn contraction_fragments_are_stopwords() {
    for w in ["don", "ll", "ve", "s", "t", "wouldn"] {
        assert!(is_stopword(w), "{w}");
    }
    assert!(!is_stopword("dont"));
}
