use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::pitch_accent::error::PitchAccentError;

#[derive(Debug, PartialEq, Eq)]
pub struct TagDefinition {
    pub code: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
}

// 品詞タグ（定義順に tag_bank に出力される）
static TAG_DEFINITIONS: [TagDefinition; 5] = [
    TagDefinition {
        code: "副",
        abbreviation: "adv",
        description: "adverb",
    },
    TagDefinition {
        code: "名",
        abbreviation: "n",
        description: "noun",
    },
    TagDefinition {
        code: "代",
        abbreviation: "pn",
        description: "pronoun",
    },
    TagDefinition {
        code: "形動",
        abbreviation: "adj-na",
        description: "adjectival nouns or quasi-adjectives",
    },
    TagDefinition {
        code: "感",
        abbreviation: "int",
        description: "interjection",
    },
];

static TAG_TABLE: Lazy<HashMap<&'static str, &'static TagDefinition>> = Lazy::new(|| {
    TAG_DEFINITIONS
        .iter()
        .map(|definition| (definition.code, definition))
        .collect()
});

pub fn tag_definitions() -> &'static [TagDefinition] {
    &TAG_DEFINITIONS
}

pub fn resolve_tag(code: &str) -> Result<&'static TagDefinition, PitchAccentError> {
    TAG_TABLE
        .get(code)
        .copied()
        .ok_or_else(|| PitchAccentError::UndefinedTag {
            code: code.to_owned(),
        })
}

// "形動;名" => ["adj-na", "n"]（空の要素も未定義のタグ）
pub fn resolve_tags(group: &str) -> Result<Vec<String>, PitchAccentError> {
    group
        .split(';')
        .map(|code| resolve_tag(code).map(|definition| definition.abbreviation.to_owned()))
        .collect()
}
