// Yomichan 辞書（format 3）の出力

pub mod index;
pub mod tag_bank;
pub mod term_meta_bank;
pub mod writer;
