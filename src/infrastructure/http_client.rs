// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::SearchError;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::RequestBuilder;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-GB,en;q=0.5";

/// Empty query string / form body.
pub const NO_PARAMS: &[(&str, &str)] = &[];

/// HTTP响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// 状态码
    pub status: u16,
    /// 响应正文
    pub body: String,
    /// 跳转后的最终地址
    pub url: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 搜索引擎HTTP会话
///
/// 每个搜索引擎持有一个独立的会话：固定的 User-Agent、独立的 Cookie 存储，
/// 并在每次请求后把 `Referer` 更新为上一次请求的页面
pub struct HttpClient {
    client: reqwest::Client,
    referer: Mutex<Option<String>>,
}

impl HttpClient {
    /// 创建HTTP会话
    ///
    /// # 参数
    ///
    /// * `user_agent` - 本次运行使用的 User-Agent
    /// * `timeout` - 单个请求的超时时间
    /// * `proxy` - 可选的 HTTP/SOCKS 代理地址
    ///
    /// # 返回值
    ///
    /// * `Ok(HttpClient)` - HTTP会话
    /// * `Err(SearchError::InvalidProxy)` - 代理地址不是有效的URL
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .cookie_store(true);

        if let Some(proxy_url) = proxy {
            builder = builder.proxy(parse_proxy(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            referer: Mutex::new(None),
        })
    }

    /// 发送GET请求
    pub async fn get<T: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &T,
    ) -> Result<HttpResponse, SearchError> {
        self.send(self.client.get(url).query(query)).await
    }

    /// 发送表单POST请求
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<HttpResponse, SearchError> {
        self.send(self.client.post(url).form(form)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<HttpResponse, SearchError> {
        let referer = self.referer.lock().clone();
        let request = match referer {
            Some(referer) => request.header(REFERER, referer),
            None => request,
        };

        let request = request.build()?;
        let requested = request.url().to_string();

        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        debug!("{} -> {} ({})", requested, status, url);

        *self.referer.lock() = Some(requested);
        let body = response.text().await?;

        Ok(HttpResponse { status, body, url })
    }
}

fn parse_proxy(proxy_url: &str) -> Result<reqwest::Proxy, SearchError> {
    let parsed =
        Url::parse(proxy_url).map_err(|_| SearchError::InvalidProxy(proxy_url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https" | "socks5" | "socks5h") || !parsed.has_host() {
        return Err(SearchError::InvalidProxy(proxy_url.to_string()));
    }
    reqwest::Proxy::all(parsed.as_str()).map_err(|e| SearchError::InvalidProxy(e.to_string()))
}
