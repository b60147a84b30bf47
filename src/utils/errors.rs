// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::SearchError;
use crate::domain::search::query::QueryError;
use crate::infrastructure::storage::StorageError;
use thiserror::Error;

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("搜索词错误: {0}")]
    Query(#[from] QueryError),

    #[error("搜索引擎错误: {0}")]
    Search(#[from] SearchError),

    #[error("结果文件错误: {0}")]
    Storage(#[from] StorageError),

    #[error("终端输出错误: {0}")]
    Console(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error; query mistakes are usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Query(_) => 2,
            _ => 1,
        }
    }
}
