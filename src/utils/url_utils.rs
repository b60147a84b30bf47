// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 解开搜索引擎的跳转链接
///
/// DuckDuckGo 等引擎把目标地址放在跳转链接的查询参数中
/// （如 `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`），
/// 找到 `param` 参数时返回解码后的目标地址，否则返回解析后的原链接
pub fn unwrap_redirect(base_url: &Url, href: &str, param: &str) -> Result<Url, ParseError> {
    let url = resolve_url(base_url, href)?;
    let target = url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned());

    match target {
        Some(target) => Url::parse(&target),
        None => Ok(url),
    }
}
