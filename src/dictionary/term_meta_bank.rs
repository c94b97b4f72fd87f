use serde::Serialize;

use crate::pitch_accent::{notation_parser::PitchRecord, record_loader::PitchAccentEntry};

pub const TERM_META_BANK_CHUNK_SIZE: usize = 10000;

static TERM_META_MODE: &str = "pitch";

// [expression, "pitch", { reading, pitches }]
#[derive(Debug, Serialize)]
pub struct TermMeta<'a>(pub &'a str, pub &'static str, pub &'a PitchRecord);

impl<'a> TermMeta<'a> {
    pub fn of(entry: &'a PitchAccentEntry) -> Self {
        TermMeta(&entry.expression, TERM_META_MODE, &entry.record)
    }
}

// term_meta_bank_1.json, term_meta_bank_2.json, ... の中身
pub fn build_term_meta_banks(entries: &[PitchAccentEntry]) -> Vec<Vec<TermMeta<'_>>> {
    entries
        .chunks(TERM_META_BANK_CHUNK_SIZE)
        .map(|chunk| chunk.iter().map(TermMeta::of).collect())
        .collect()
}
