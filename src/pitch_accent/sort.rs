use crate::{pitch_accent::record_loader::PitchAccentEntry, utility::str::cmp_utf16};

// 正規化した表記 => 元の表記 => 入力順
pub fn sort_pitch_accent_entries(entries: &mut [PitchAccentEntry]) {
    entries.sort_by(|a, b| {
        cmp_utf16(&a.normalized_expression, &b.normalized_expression)
            .then_with(|| cmp_utf16(&a.expression, &b.expression))
            .then_with(|| a.line_index.cmp(&b.line_index))
    });
}
