// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - HTTP 客户端（http_client）：带 Cookie 和 Referer 的抓取会话
/// - 搜索（search）：各搜索引擎的实现与聚合器
/// - 存储（storage）：结果文件的追加写入
pub mod http_client;
pub mod search;
pub mod storage;
