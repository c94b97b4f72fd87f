use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

// 前後の空白を除いて行に分ける（空行も 1 行として数える）
pub fn split_lines(content: &str) -> Vec<&str> {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

    REGEX_NEW_LINE.split(trim(content)).collect()
}

// BOM (U+FEFF) も空白として扱う
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn normalize_new_lines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

// UTF-16 のコード単位で比較する
// BMP 外の文字と U+E000..=U+FFFF の順序だけが str::cmp と異なる
pub fn cmp_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
