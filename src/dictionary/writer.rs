use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    dictionary::{
        index::build_dictionary_index, tag_bank::build_tag_bank,
        term_meta_bank::build_term_meta_banks,
    },
    pitch_accent::record_loader::PitchAccentEntry,
};

pub struct DictionaryOut {
    root: PathBuf,
}

impl DictionaryOut {
    // 既存のディレクトリはそのまま使う（同名のファイルだけ上書きする）
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create output directory: {}", root.display()))?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ソート済みであること．書き出したファイル数を返す
    pub fn save_term_meta_banks(&self, entries: &[PitchAccentEntry]) -> Result<usize> {
        let banks = build_term_meta_banks(entries);
        for (i, bank) in banks.iter().enumerate() {
            self.save_json(&format!("term_meta_bank_{}.json", i + 1), bank)?;
        }

        Ok(banks.len())
    }

    pub fn save_tag_bank(&self) -> Result<()> {
        self.save_json("tag_bank_1.json", &build_tag_bank())
    }

    pub fn save_index(&self) -> Result<()> {
        self.save_json("index.json", &build_dictionary_index())
    }

    fn save_json<T: serde::Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        let path = self.root.join(file_name);
        fs::write(&path, serde_json::to_string(value)?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
