// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};

/// 参与聚合的搜索引擎及其翻页与结果数量限制
#[derive(Clone)]
pub struct EngineRun {
    pub engine: Arc<dyn SearchEngine>,
    /// 抓取的结果页数
    pub pages: u32,
    /// 保留的最大结果数
    pub max_results: Option<usize>,
}

/// 单个搜索引擎的聚合结果统计
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome {
    pub name: &'static str,
    pub tag: &'static str,
    /// 保留下来参与合并的结果数
    pub kept: usize,
    /// 去重后仍归属该引擎的结果数
    pub unique: usize,
    pub error: Option<SearchError>,
}

/// 一次聚合搜索的结果
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutcome {
    /// 按引擎顺序排列的统计
    pub engines: Vec<EngineOutcome>,
    /// 合并后（去重前）的结果总数
    pub combined: usize,
    pub unique_results: Vec<SearchResult>,
}

/// 搜索结果聚合器
///
/// 并发查询所有搜索引擎，按引擎顺序合并结果并按URL去重
pub struct SearchAggregator {
    engines: Vec<EngineRun>,
    timeout: Duration,
}

impl SearchAggregator {
    pub fn new(engines: Vec<EngineRun>, timeout: Duration) -> Self {
        Self { engines, timeout }
    }

    pub fn engines(&self) -> impl Iterator<Item = &Arc<dyn SearchEngine>> {
        self.engines.iter().map(|run| &run.engine)
    }

    pub async fn search(&self, query: &str) -> AggregateOutcome {
        let futures = self.engines.iter().map(|run| async move {
            let engine_name = run.engine.name();
            let result =
                tokio::time::timeout(self.timeout, run.engine.search(query, run.pages)).await;

            match result {
                Ok(Ok(mut results)) => {
                    info!("Engine {} returned {} results", engine_name, results.len());
                    if let Some(max) = run.max_results {
                        results.truncate(max);
                    }
                    (results, None)
                }
                Ok(Err(e)) => {
                    warn!("Engine {} failed: {}", engine_name, e);
                    (Vec::new(), Some(e))
                }
                Err(_) => {
                    warn!("Engine {} timed out", engine_name);
                    (Vec::new(), Some(SearchError::Timeout))
                }
            }
        });

        // join_all keeps engine order, which decides which duplicate survives
        let per_engine = join_all(futures).await;

        let mut engines = Vec::with_capacity(self.engines.len());
        let mut combined = Vec::new();
        for (run, (results, error)) in self.engines.iter().zip(per_engine) {
            engines.push(EngineOutcome {
                name: run.engine.name(),
                tag: run.engine.tag(),
                kept: results.len(),
                unique: 0,
                error,
            });
            combined.extend(results);
        }

        let combined_count = combined.len();
        let unique_results = deduplicate_keep_last(combined);
        for outcome in &mut engines {
            outcome.unique = unique_results
                .iter()
                .filter(|r| r.engine == outcome.tag)
                .count();
        }

        AggregateOutcome {
            engines,
            combined: combined_count,
            unique_results,
        }
    }
}

/// Removes results with repeated URLs.
///
/// A URL keeps the position of its first occurrence but the record of its
/// last occurrence, so later engines in the combined order win duplicates.
pub fn deduplicate_keep_last(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<SearchResult> = Vec::new();

    for result in results {
        match positions.get(&result.url) {
            Some(&position) => unique[position] = result,
            None => {
                positions.insert(result.url.clone(), unique.len());
                unique.push(result);
            }
        }
    }

    unique
}
