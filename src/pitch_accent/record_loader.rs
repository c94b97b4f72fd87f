use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::{
    pitch_accent::{
        error::PitchAccentError,
        notation_parser::{parse_pitch_notation, PitchRecord},
    },
    utility::str::trim,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchAccentEntry {
    pub line_index: usize,
    pub expression: String,
    pub normalized_expression: String, // NFC
    pub record: PitchRecord,
}

// 表記<TAB>読み<TAB>アクセント
pub fn parse_pitch_accent_line(
    line_index: usize,
    line: &str,
) -> Result<PitchAccentEntry, PitchAccentError> {
    static REGEX_NOTATION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\([^)\s]+\))?[0-9]+(,(\([^)\s]+\))?[0-9]+)*$").unwrap()
    });

    let fields: Vec<&str> = trim(line).split('\t').map(trim).collect();
    let [expression, reading, notation] = fields[..] else {
        return Err(PitchAccentError::MalformedLine {
            line_number: line_index + 1,
            field_count: fields.len(),
        });
    };

    // 元データに ")1" のような書式の崩れがあるので 1 文字だけ取り除く
    let notation = notation.strip_prefix(')').unwrap_or(notation);

    if !REGEX_NOTATION.is_match(notation) || reading.contains(':') || notation.contains(':') {
        return Err(PitchAccentError::MalformedNotation {
            notation: notation.to_owned(),
        });
    }

    let reading = if reading.is_empty() {
        expression
    } else {
        reading
    };
    let record = parse_pitch_notation(notation, reading)?;

    Ok(PitchAccentEntry {
        line_index,
        expression: expression.to_owned(),
        normalized_expression: expression.nfc().collect(),
        record,
    })
}

pub fn load_pitch_accent_entries<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> Result<Vec<PitchAccentEntry>> {
    let mut entries = Vec::new();
    for (i, line) in lines.enumerate() {
        let entry = parse_pitch_accent_line(i, line)
            .with_context(|| format!("Invalid format on line {}: {:?}", i + 1, line))?;
        entries.push(entry);
    }
    Ok(entries)
}
