// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：搜索结果实体
/// - 搜索（search）：搜索词语法与搜索引擎抽象接口
///
/// 领域层不依赖于任何具体的抓取或存储实现。
pub mod models;
pub mod search;
