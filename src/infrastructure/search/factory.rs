// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{EngineSettings, Settings};
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::agents::{
    random_agent, AgentFamily, DUCKDUCKGO_FAMILIES, METAGER_FAMILIES, MOJEEK_FAMILIES,
    STARTPAGE_FAMILIES,
};
use crate::infrastructure::search::aggregator::{EngineRun, SearchAggregator};
use crate::infrastructure::search::duckduckgo::DuckDuckGoSearchEngine;
use crate::infrastructure::search::metager::MetaGerSearchEngine;
use crate::infrastructure::search::mojeek::MojeekSearchEngine;
use crate::infrastructure::search::startpage::StartpageSearchEngine;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 搜索引擎类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEngineType {
    DuckDuckGo,
    MetaGer,
    Startpage,
    Mojeek,
}

impl SearchEngineType {
    /// 合并顺序；重复的URL保留最后出现的记录
    pub const ALL: [SearchEngineType; 4] = [
        Self::DuckDuckGo,
        Self::MetaGer,
        Self::Startpage,
        Self::Mojeek,
    ];

    /// 获取引擎名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => DuckDuckGoSearchEngine::NAME,
            Self::MetaGer => MetaGerSearchEngine::NAME,
            Self::Startpage => StartpageSearchEngine::NAME,
            Self::Mojeek => MojeekSearchEngine::NAME,
        }
    }

    /// 允许使用的 User-Agent 类别
    pub fn agent_families(&self) -> &'static [AgentFamily] {
        match self {
            Self::DuckDuckGo => DUCKDUCKGO_FAMILIES,
            Self::MetaGer => METAGER_FAMILIES,
            Self::Startpage => STARTPAGE_FAMILIES,
            Self::Mojeek => MOJEEK_FAMILIES,
        }
    }

    pub fn settings<'a>(&self, settings: &'a Settings) -> &'a EngineSettings {
        match self {
            Self::DuckDuckGo => &settings.duckduckgo,
            Self::MetaGer => &settings.metager,
            Self::Startpage => &settings.startpage,
            Self::Mojeek => &settings.mojeek,
        }
    }

    /// 创建搜索引擎实例
    pub fn create(
        &self,
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> Result<Arc<dyn SearchEngine>, SearchError> {
        Ok(match self {
            Self::DuckDuckGo => Arc::new(DuckDuckGoSearchEngine::new(
                base_url, user_agent, timeout, proxy,
            )?),
            Self::MetaGer => Arc::new(MetaGerSearchEngine::new(
                base_url, user_agent, timeout, proxy,
            )?),
            Self::Startpage => Arc::new(StartpageSearchEngine::new(
                base_url, user_agent, timeout, proxy,
            )?),
            Self::Mojeek => Arc::new(MojeekSearchEngine::new(
                base_url, user_agent, timeout, proxy,
            )?),
        })
    }
}

/// 根据配置创建聚合器
///
/// 每个启用的引擎在本次运行中随机选定一个 User-Agent
pub fn create_aggregator(settings: &Settings) -> Result<SearchAggregator, SearchError> {
    let search = &settings.search;
    let mut runs = Vec::new();

    for engine_type in SearchEngineType::ALL {
        let engine_settings = engine_type.settings(settings);
        if !engine_settings.enabled {
            info!("{} disabled by configuration", engine_type.name());
            continue;
        }

        let user_agent = random_agent(engine_type.agent_families());
        let engine = engine_type.create(
            &engine_settings.base_url,
            user_agent,
            search.request_timeout(),
            search.proxy.as_deref(),
        )?;
        runs.push(EngineRun {
            engine,
            pages: engine_settings.pages,
            max_results: engine_settings.result_limit(),
        });
    }

    Ok(SearchAggregator::new(runs, search.engine_timeout()))
}
