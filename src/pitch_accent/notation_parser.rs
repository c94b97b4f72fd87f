use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::pitch_accent::{error::PitchAccentError, tag::resolve_tags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchEntry {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchRecord {
    pub reading: String,
    pub pitches: Vec<PitchEntry>,
}

// "(形動)0,1" => [{ position: 0, tags: ["adj-na"] }, { position: 1, tags: ["adj-na"] }]
//
// タグを省略した位置は直前の位置のタグを引き継ぐ（複製する）
pub fn parse_pitch_notation(notation: &str, reading: &str) -> Result<PitchRecord, PitchAccentError> {
    // 必ずカーソル位置から一致させる
    static REGEX_PITCH: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:\(([^)]+)\))?([0-9]+)").unwrap());

    let malformed = || PitchAccentError::MalformedNotation {
        notation: notation.to_owned(),
    };

    let mut pitches: Vec<PitchEntry> = Vec::new();
    let mut cursor = 0;

    loop {
        let captures = REGEX_PITCH
            .captures(&notation[cursor..])
            .ok_or_else(malformed)?;

        let position = captures[2].parse().map_err(|_| malformed())?;

        let tags = match captures.get(1) {
            Some(group) => Some(resolve_tags(group.as_str())?),
            None => pitches.last().and_then(|previous| previous.tags.clone()),
        };

        pitches.push(PitchEntry { position, tags });

        cursor += captures[0].len();
        if cursor >= notation.len() {
            break;
        }

        if !notation[cursor..].starts_with(',') {
            return Err(malformed());
        }
        cursor += 1;
    }

    if cursor != notation.len() {
        return Err(malformed());
    }

    Ok(PitchRecord {
        reading: reading.to_owned(),
        pitches,
    })
}
