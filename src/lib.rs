// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 聚合搜索用例以及结果报告
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 搜索结果实体、搜索词语法和搜索引擎接口
pub mod domain;

/// 基础设施模块
///
/// HTTP 会话、各搜索引擎的抓取实现以及结果文件存储
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数与交互式输入
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
