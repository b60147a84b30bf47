// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单条搜索结果
///
/// `engine` 保存产生该结果的搜索引擎标签（如 `DDG`、`Moj`）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub engine: String,
}

impl SearchResult {
    pub fn new(url: String, title: String, description: Option<String>, engine: String) -> Self {
        Self {
            url,
            title,
            description,
            engine,
        }
    }

    /// Title prefixed with the engine tag, e.g. `(DDG) Rust Programming Language`.
    pub fn tagged_title(&self) -> String {
        format!("({}) {}", self.engine, self.title)
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
