// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_RESULTS_DIR: &str = "results";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PAUSE_SECS: u64 = 2;

const DUCKDUCKGO_URL: &str = "https://html.duckduckgo.com";
const METAGER_URL: &str = "https://metager.org";
const STARTPAGE_URL: &str = "https://www.startpage.com";
const MOJEEK_URL: &str = "https://www.mojeek.com";

/// 应用程序配置设置
///
/// 包含通用搜索配置以及每个搜索引擎的配置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// 通用搜索配置
    pub search: SearchSettings,
    pub duckduckgo: EngineSettings,
    pub metager: EngineSettings,
    pub startpage: EngineSettings,
    pub mojeek: EngineSettings,
}

/// 通用搜索配置设置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchSettings {
    /// 结果文件所在目录
    pub results_dir: String,
    /// 单个HTTP请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 单个搜索引擎完成所有翻页的超时时间（秒）
    pub engine_timeout_secs: u64,
    /// HTTP 或 SOCKS 代理地址
    pub proxy: Option<String>,
    /// 输出结果列表前的停顿时间（秒）
    pub pause_secs: u64,
    /// 终端输出是否着色
    pub color: bool,
}

/// 单个搜索引擎配置设置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EngineSettings {
    /// 是否启用
    pub enabled: bool,
    /// 搜索引擎基础地址
    pub base_url: String,
    /// 抓取的结果页数
    pub pages: u32,
    /// 保留的最大结果数，为空或为 0 时全部保留
    pub max_results: Option<usize>,
}

impl SearchSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn engine_timeout(&self) -> Duration {
        Duration::from_secs(self.engine_timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }
}

impl EngineSettings {
    /// Cap applied to this engine's results; `0` lifts a default cap.
    pub fn result_limit(&self) -> Option<usize> {
        self.max_results.filter(|&max| max > 0)
    }

    fn new(base_url: &str, pages: u32, max_results: Option<usize>) -> Self {
        Self {
            enabled: true,
            base_url: base_url.to_string(),
            pages,
            max_results,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchSettings {
                results_dir: DEFAULT_RESULTS_DIR.to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                engine_timeout_secs: DEFAULT_ENGINE_TIMEOUT_SECS,
                proxy: None,
                pause_secs: DEFAULT_PAUSE_SECS,
                color: true,
            },
            // DuckDuckGo and MetaGer: 20-60 results per page; Startpage and Mojeek: 10
            duckduckgo: EngineSettings::new(DUCKDUCKGO_URL, 1, Some(30)),
            metager: EngineSettings::new(METAGER_URL, 1, Some(30)),
            startpage: EngineSettings::new(STARTPAGE_URL, 2, None),
            mojeek: EngineSettings::new(MOJEEK_URL, 2, None),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default` 文件、`config_file`（如提供）
    /// 以及 `AGGSEARCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("AGGSEARCH").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        let mut builder = builder
            .set_default("search.results_dir", defaults.search.results_dir)?
            .set_default(
                "search.request_timeout_secs",
                defaults.search.request_timeout_secs as i64,
            )?
            .set_default(
                "search.engine_timeout_secs",
                defaults.search.engine_timeout_secs as i64,
            )?
            .set_default("search.pause_secs", defaults.search.pause_secs as i64)?
            .set_default("search.color", defaults.search.color)?;

        for (key, engine) in [
            ("duckduckgo", defaults.duckduckgo),
            ("metager", defaults.metager),
            ("startpage", defaults.startpage),
            ("mojeek", defaults.mojeek),
        ] {
            builder = builder
                .set_default(format!("{}.enabled", key), engine.enabled)?
                .set_default(format!("{}.base_url", key), engine.base_url)?
                .set_default(format!("{}.pages", key), i64::from(engine.pages))?;
            if let Some(max) = engine.max_results {
                builder = builder.set_default(format!("{}.max_results", key), max as i64)?;
            }
        }

        Ok(builder)
    }
}
