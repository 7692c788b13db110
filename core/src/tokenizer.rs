use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves",
            "you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself",
            "it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while",
            "of","at","by","for","with","about","against","between","into","through","during","before","after",
            "above","below","to","from","up","down","in","out","on","off","over","under",
            "again","further","then","once","here","there","when","where","why","how",
            "all","any","both","each","few","more","most","other","some","such",
            "no","nor","not","only","own","same","so","than","too","very",
            "s","t","can","will","just","don","don't","should","should've","now",
            "d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't",
            "didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't",
            "isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't",
            "shan","shan't","shouldn","shouldn't","wasn","wasn't","weren","weren't",
            "won","won't","wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
    // Fused forms a Treebank word tokenizer splits in two. Apostrophe forms
    // like "d'ye" can't occur once punctuation is stripped.
    static ref CONTRACTIONS: HashMap<&'static str, [&'static str; 2]> = [
        ("cannot", ["can", "not"]),
        ("gimme", ["gim", "me"]),
        ("gonna", ["gon", "na"]),
        ("gotta", ["got", "ta"]),
        ("lemme", ["lem", "me"]),
        ("wanna", ["wan", "na"]),
    ]
    .into_iter()
    .collect();
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Normalize text into terms: lowercase, drop ASCII punctuation, split into
/// word tokens, remove stopwords. No stemming. Terms come out in text order
/// and may repeat.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let mut terms = Vec::new();
    for m in TOKEN_RE.find_iter(&stripped) {
        let token = m.as_str();
        let parts: &[&str] = match CONTRACTIONS.get(token) {
            Some(split) => split,
            None => std::slice::from_ref(&token),
        };
        terms.extend(parts.iter().filter(|t| !is_stopword(t)).map(|t| t.to_string()));
    }
    terms
}
