// 高低アクセント表記の解析
//
// 入力は 1 行 1 語の TSV: 表記<TAB>読み<TAB>アクセント
// アクセントは "(形動)0,1" のように，コンマ区切りのアクセント核の位置に
// 品詞タグ（省略すると直前のものを引き継ぐ）を前置したもの

pub mod error;
pub mod notation_parser;
pub mod record_loader;
pub mod sort;
pub mod tag;
