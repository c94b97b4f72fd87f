use serde::Serialize;

use crate::pitch_accent::tag::tag_definitions;

static TAG_CATEGORY: &str = "partOfSpeech";

// [name, category, order, notes, score]
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TagBankRow(
    pub &'static str,
    pub &'static str,
    pub i32,
    pub &'static str,
    pub i32,
);

pub fn build_tag_bank() -> Vec<TagBankRow> {
    tag_definitions()
        .iter()
        .map(|definition| {
            TagBankRow(
                definition.abbreviation,
                TAG_CATEGORY,
                0,
                definition.description,
                0,
            )
        })
        .collect()
}
