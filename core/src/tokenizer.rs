use crate::Term;
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Contractions that read as ordinary words once the apostrophe is gone.
const STRIPPED_COLLISIONS: &[&str] = &["cant", "hell", "id", "ill", "shed", "shell", "wed", "well", "wont"];

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    // Apostrophes are stripped before lookup, so contractions are stored without them,
    // except where the stripped spelling is itself a content word.
    static ref STOPWORDS: HashSet<String> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words
            .iter()
            .filter(|w| !(w.contains('\'') && STRIPPED_COLLISIONS.contains(&w.replace('\'', "").as_str())))
            .map(|w| w.replace('\'', ""))
            .collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Optional tokenizer stages. All disabled by default, which yields plain
/// strip-lowercase-split tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Drop common English function words after splitting.
    pub remove_stopwords: bool,
    /// Reduce tokens to their English Snowball stem.
    pub stem: bool,
    /// Apply NFKC normalization before stripping punctuation.
    pub normalize_unicode: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self { Self { config } }

    /// Strip every non-word, non-space character, lowercase, and split on
    /// whitespace runs. Word characters include Unicode letters, digits and `_`.
    pub fn tokenize(&self, text: &str) -> Vec<Term> {
        let source: Cow<'_, str> = if self.config.normalize_unicode {
            Cow::Owned(text.nfkc().collect())
        } else {
            Cow::Borrowed(text)
        };
        let lowered = NON_WORD.replace_all(&source, "").to_lowercase();
        lowered
            .split_whitespace()
            .filter(|token| !(self.config.remove_stopwords && is_stopword(token)))
            .map(|token| {
                if self.config.stem {
                    STEMMER.stem(token).into_owned()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }
}

/// Tokenize with the default configuration.
pub fn tokenize(text: &str) -> Vec<Term> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World! It's 2024."), vec!["hello", "world", "its", "2024"]);
    }

    #[test]
    fn keeps_underscores_and_unicode_letters() {
        assert_eq!(tokenize("snake_case Café ÜBER"), vec!["snake_case", "café", "über"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("?!... --").is_empty());
    }

    #[test]
    fn hyphenated_words_are_joined() {
        assert_eq!(tokenize("well-being"), vec!["wellbeing"]);
    }

    #[test]
    fn stopword_contractions_match_after_stripping() {
        let t = Tokenizer::new(TokenizerConfig { remove_stopwords: true, ..Default::default() });
        assert_eq!(t.tokenize("Don't stop the music"), vec!["stop", "music"]);
    }

    #[test]
    fn stopwords_keep_words_spelled_like_stripped_contractions() {
        let t = Tokenizer::new(TokenizerConfig { remove_stopwords: true, ..Default::default() });
        assert_eq!(
            t.tokenize("shell scripting works well when you feel ill in hell, I'm told"),
            vec!["shell", "scripting", "works", "well", "feel", "ill", "hell", "told"]
        );
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        let t = Tokenizer::new(TokenizerConfig { normalize_unicode: true, ..Default::default() });
        assert_eq!(t.tokenize("ｆｕｌｌ width"), vec!["full", "width"]);
    }
}
