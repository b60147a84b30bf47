// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod agents;
pub mod aggregator;
pub mod common;
/// 搜索服务模块
///
/// 提供 DuckDuckGo、MetaGer、Startpage、Mojeek 等注重隐私的搜索引擎的
/// HTML 抓取实现，以及按URL去重的搜索结果聚合器
pub mod duckduckgo;
pub mod factory;
pub mod metager;
pub mod mojeek;
pub mod startpage;

pub use aggregator::{AggregateOutcome, EngineOutcome, EngineRun, SearchAggregator};
pub use factory::{create_aggregator, SearchEngineType};
