// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本清理
//!
//! 搜索结果页中的标题和摘要常带有换行、缩进以及高亮标签

use scraper::ElementRef;

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cleaned text content of an element and all its descendants.
///
/// Entities are already decoded by the HTML parser.
pub fn element_text(element: &ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}
