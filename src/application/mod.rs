// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含聚合搜索用例以及终端与结果文件的报告输出
pub mod reporting;
pub mod use_cases;
