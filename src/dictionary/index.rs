use serde::Serialize;

use crate::utility::str::normalize_new_lines;

static ATTRIBUTION: &str = include_str!("../../resources/attribution.txt");

#[derive(Debug, Serialize)]
pub struct DictionaryIndex {
    pub title: &'static str,
    pub format: u32,
    pub revision: &'static str,
    pub sequenced: bool,
    pub author: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub attribution: String,
}

pub fn build_dictionary_index() -> DictionaryIndex {
    DictionaryIndex {
        title: "Kanjium Pitch Accents",
        format: 3,
        revision: "pitch1",
        sequenced: false,
        author: "toasted-nutbread",
        url: "https://github.com/toasted-nutbread/yomichan-pitch-accent-dictionary",
        description: "This dictionary contains pitch accent information for a large variety of terms and expressions.",
        attribution: normalize_new_lines(ATTRIBUTION),
    }
}
