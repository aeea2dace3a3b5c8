//! Suffix-stripping stemmers
//!
//! [`PorterStemmer`] implements the five steps of Porter (1980) and backs the
//! linguistic tokenizer. [`light_stem`] is the small rule set used by the
//! regex tokenizer: plurals, `-ing` and `-ed` only.
//!
//! Porter, M.F. (1980). "An algorithm for suffix stripping."
//! Program, 14(3), 130-137.

/// Porter stemmer for lowercase ASCII words.
///
/// Words containing anything other than ASCII letters are returned lowercased
/// but otherwise untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

// Longest suffix first where suffixes overlap.
const STEP4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ism", "ate", "iti", "ous",
    "ive", "ize", "ion", "al", "er", "ic", "ou",
];

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a single word
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.len() <= 2 || !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return lower;
        }

        let mut w = lower.into_bytes();
        step1a(&mut w);
        step1b(&mut w);
        step1c(&mut w);
        apply_rules(&mut w, STEP2_RULES);
        apply_rules(&mut w, STEP3_RULES);
        step4(&mut w);
        step5(&mut w);

        w.into_iter().map(char::from).collect()
    }
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` of `[C](VC){m}[V]`
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    let mut m = 0;

    while i < n && is_consonant(w, i) {
        i += 1;
    }
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
    }
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending, where the last consonant is not w, x or y
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn replace_suffix(w: &mut Vec<u8>, suffix_len: usize, replacement: &str) {
    w.truncate(w.len() - suffix_len);
    w.extend_from_slice(replacement.as_bytes());
}

fn step1a(w: &mut Vec<u8>) {
    if w.ends_with(b"sses") || w.ends_with(b"ies") {
        w.truncate(w.len() - 2);
    } else if w.ends_with(b"s") && !w.ends_with(b"ss") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<u8>) {
    if w.ends_with(b"eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.pop();
        }
        return;
    }

    let suffix_len = if w.ends_with(b"ed") && has_vowel(&w[..w.len() - 2]) {
        2
    } else if w.ends_with(b"ing") && has_vowel(&w[..w.len() - 3]) {
        3
    } else {
        return;
    };
    w.truncate(w.len() - suffix_len);

    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut [u8]) {
    let n = w.len();
    if w.ends_with(b"y") && has_vowel(&w[..n - 1]) {
        w[n - 1] = b'i';
    }
}

/// First matching suffix decides; it is replaced only when the stem has `m > 0`
fn apply_rules(w: &mut Vec<u8>, rules: &[(&str, &str)]) {
    if let Some((suffix, replacement)) = rules
        .iter()
        .find(|(suffix, _)| w.ends_with(suffix.as_bytes()))
    {
        if measure(&w[..w.len() - suffix.len()]) > 0 {
            replace_suffix(w, suffix.len(), replacement);
        }
    }
}

fn step4(w: &mut Vec<u8>) {
    let Some(suffix) = STEP4_SUFFIXES
        .iter()
        .find(|suffix| w.ends_with(suffix.as_bytes()))
    else {
        return;
    };

    let stem_len = w.len() - suffix.len();
    let stem = &w[..stem_len];
    if *suffix == "ion" && !matches!(stem.last(), Some(b's') | Some(b't')) {
        return;
    }
    if measure(stem) > 1 {
        w.truncate(stem_len);
    }
}

fn step5(w: &mut Vec<u8>) {
    if w.ends_with(b"e") {
        let stem = &w[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            w.pop();
        }
    }

    if w.ends_with(b"ll") && measure(w) > 1 {
        w.pop();
    }
}

/// Light stemming for the regex tokenizer
///
/// Handles plural `-s`/`-es`/`-ies`, `-ing` and `-ed` with consonant
/// undoubling. The input is expected to be lowercase.
pub fn light_stem(lower: &str) -> String {
    if !lower.is_ascii() {
        return lower.to_string();
    }

    if lower.ends_with("ies") && lower.len() > 4 {
        return format!("{}y", &lower[..lower.len() - 3]);
    }
    if lower.ends_with("es") && lower.len() > 3 {
        let stem = &lower[..lower.len() - 2];
        if stem.ends_with("ss")
            || stem.ends_with("sh")
            || stem.ends_with("ch")
            || stem.ends_with('x')
        {
            return stem.to_string();
        }
    }
    if lower.ends_with('s') && lower.len() > 3 && !lower.ends_with("ss") {
        return lower[..lower.len() - 1].to_string();
    }
    if lower.ends_with("ing") && lower.len() > 5 {
        return undouble(&lower[..lower.len() - 3]);
    }
    if lower.ends_with("ied") && lower.len() > 4 {
        return format!("{}y", &lower[..lower.len() - 3]);
    }
    if lower.ends_with("ed") && lower.len() > 4 {
        return undouble(&lower[..lower.len() - 2]);
    }

    lower.to_string()
}

fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && !matches!(bytes[n - 1], b'l' | b's' | b'z') {
        stem[..n - 1].to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_plurals() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("caress"), "caress");
    }

    #[test]
    fn test_porter_step1b() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("hopeful"), "hope");
    }

    #[test]
    fn test_porter_conflates_variants() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("connection"), "connect");
        assert_eq!(stemmer.stem("connected"), "connect");
        assert_eq!(stemmer.stem("connecting"), "connect");
        assert_eq!(stemmer.stem("Connections"), "connect");
    }

    #[test]
    fn test_porter_longer_suffixes() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("generalization"), "gener");
        assert_eq!(stemmer.stem("happy"), "happi");
    }

    #[test]
    fn test_porter_leaves_non_ascii() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("résumés"), "résumés");
        assert_eq!(stemmer.stem("is"), "is");
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure(b"tree"), 0);
        assert_eq!(measure(b"trouble"), 1);
        assert_eq!(measure(b"oaten"), 2);
    }

    #[test]
    fn test_light_stem() {
        assert_eq!(light_stem("running"), "run");
        assert_eq!(light_stem("cats"), "cat");
        assert_eq!(light_stem("studies"), "study");
        assert_eq!(light_stem("boxes"), "box");
        assert_eq!(light_stem("carried"), "carry");
        assert_eq!(light_stem("jumped"), "jump");
        assert_eq!(light_stem("class"), "class");
    }
}
