// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 模拟搜索引擎返回的 HTML 页面

/// DuckDuckGo HTML page; `next_offset` adds the "Next" form.
pub fn duckduckgo_page(urls: &[&str], next_offset: Option<u32>) -> String {
    let mut html = String::from("<html><body><div class=\"results\">");
    for url in urls {
        html.push_str(&format!(
            r#"<div class="result results_links web-result">
                 <h2 class="result__title"><a class="result__a" href="//duckduckgo.com/l/?uddg={}&amp;rut=x">Title of {}</a></h2>
                 <a class="result__snippet" href="{}">Snippet for {}</a>
               </div>"#,
            url.replace(':', "%3A").replace('/', "%2F"),
            url,
            url,
            url
        ));
    }
    html.push_str("</div>");
    if let Some(offset) = next_offset {
        html.push_str(&format!(
            r#"<div class="nav-link"><form action="/html/" method="post">
                 <input type="submit" class="btn btn--alt" value="Next" />
                 <input type="hidden" name="q" value="rust" />
                 <input type="hidden" name="s" value="{}" />
                 <input type="hidden" name="dc" value="{}" />
               </form></div>"#,
            offset,
            offset + 1
        ));
    }
    html.push_str("</body></html>");
    html
}

/// MetaGer result page; `next_href` adds the next-search link.
pub fn metager_page(urls: &[&str], next_href: Option<&str>) -> String {
    let mut html = String::from("<html><body><div id=\"results\">");
    for url in urls {
        html.push_str(&format!(
            r#"<div class="result">
                 <h2 class="result-title"><a href="{}">Title of {}</a></h2>
                 <div class="result-description">Snippet for {}</div>
               </div>"#,
            url, url, url
        ));
    }
    html.push_str("</div>");
    if let Some(href) = next_href {
        html.push_str(&format!(r#"<a id="next-search-link" href="{}">Next</a>"#, href));
    }
    html.push_str("</body></html>");
    html
}

pub fn startpage_home(token: &str) -> String {
    format!(
        r#"<html><body><form action="/sp/search" method="post">
             <input type="text" name="query" />
             <input type="hidden" name="sc" value="{}" />
           </form></body></html>"#,
        token
    )
}

pub fn startpage_page(urls: &[&str]) -> String {
    let mut html = String::from("<html><body><section class=\"w-gl\">");
    for url in urls {
        html.push_str(&format!(
            r#"<div class="w-gl__result">
                 <a class="w-gl__result-title result-link" href="{}"><h3>Title of {}</h3></a>
                 <p class="w-gl__description">Snippet for {}</p>
               </div>"#,
            url, url, url
        ));
    }
    html.push_str("</section></body></html>");
    html
}

pub fn mojeek_page(urls: &[String]) -> String {
    let mut html = String::from("<html><body><ul class=\"results-standard\">");
    for url in urls {
        html.push_str(&format!(
            r#"<li>
                 <a class="ob" href="{}"></a>
                 <h2><a class="title" href="{}">Title of {}</a></h2>
                 <p class="s">Snippet for {}</p>
               </li>"#,
            url, url, url, url
        ));
    }
    html.push_str("</ul></body></html>");
    html
}

pub const CAPTCHA_PAGE: &str = r#"<html><body>
<div class="anomaly-modal__title">Unfortunately, bots use DuckDuckGo too.</div>
</body></html>"#;
