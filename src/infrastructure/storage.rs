// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// 搜索结果文件
///
/// 每个搜索词对应结果目录中的一个 `Results_{搜索词}.txt` 文件，
/// 重复搜索同一个词时追加写入
#[derive(Debug, Clone)]
pub struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    /// 在结果目录中定位搜索词对应的结果文件，目录不存在时创建
    pub async fn for_term(results_dir: impl AsRef<Path>, file_term: &str) -> Result<Self, StorageError> {
        let dir = results_dir.as_ref();
        fs::create_dir_all(dir)
            .await
            .map_err(|e| StorageError::io(dir, e))?;

        Ok(Self {
            path: dir.join(file_name(file_term)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加写入文本
    pub async fn append(&self, text: &str) -> Result<(), StorageError> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        file.write_all(text.as_bytes())
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| StorageError::io(&self.path, e))
    }

    /// 删除结果文件，文件不存在时视为成功
    pub async fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}

/// `Results_{term}.txt`, with characters that are unsafe in file names replaced by `_`.
pub fn file_name(file_term: &str) -> String {
    let safe: String = file_term
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("Results_{}.txt", safe)
}
