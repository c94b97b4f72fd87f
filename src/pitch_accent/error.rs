use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchAccentError {
    // 品詞タグの表にないコード
    #[error("Undefined part {code:?}")]
    UndefinedTag { code: String },

    #[error("Invalid pitch accent notation: {notation:?}")]
    MalformedNotation { notation: String },

    // 表記・読み・アクセントの 3 列になっていない行
    #[error("expected 3 fields, found {field_count}")]
    MalformedLine {
        line_number: usize,
        field_count: usize,
    },
}
