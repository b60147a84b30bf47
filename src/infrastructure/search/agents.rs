// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! User-Agent 随机化
//!
//! 每个搜索引擎限定可选的 UA 类别（Startpage 封禁爬虫 UA，Mojeek 可能拦截 Tor 浏览器）。
//! 每次运行先随机选择类别，再随机选择该类别中的 UA

const BOT_AGENTS: &[&str] = &[
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
    "DuckDuckBot/1.1; (+http://duckduckgo.com/duckduckbot.html)",
    "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
];

const FIREFOX_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.2; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0",
];

const CHROME_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
];

const EDGE_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 Edg/119.0.2151.97",
];

const SAFARI_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
];

const TOR_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; rv:115.0) Gecko/20100101 Firefox/115.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
];

/// User-Agent 类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentFamily {
    Bot,
    Firefox,
    Chrome,
    Edge,
    Safari,
    Tor,
}

impl AgentFamily {
    pub fn agents(&self) -> &'static [&'static str] {
        match self {
            Self::Bot => BOT_AGENTS,
            Self::Firefox => FIREFOX_AGENTS,
            Self::Chrome => CHROME_AGENTS,
            Self::Edge => EDGE_AGENTS,
            Self::Safari => SAFARI_AGENTS,
            Self::Tor => TOR_AGENTS,
        }
    }
}

pub const DUCKDUCKGO_FAMILIES: &[AgentFamily] = &[
    AgentFamily::Bot,
    AgentFamily::Firefox,
    AgentFamily::Tor,
    AgentFamily::Edge,
];

pub const METAGER_FAMILIES: &[AgentFamily] = &[
    AgentFamily::Bot,
    AgentFamily::Firefox,
    AgentFamily::Tor,
    AgentFamily::Edge,
    AgentFamily::Chrome,
];

/// Startpage bans bots.
pub const STARTPAGE_FAMILIES: &[AgentFamily] = &[AgentFamily::Firefox, AgentFamily::Safari];

/// Mojeek may block the Tor browser.
pub const MOJEEK_FAMILIES: &[AgentFamily] = &[
    AgentFamily::Bot,
    AgentFamily::Firefox,
    AgentFamily::Edge,
    AgentFamily::Chrome,
];

/// Picks a random family from `families`, then a random agent of that family.
///
/// An empty `families` slice falls back to Firefox.
pub fn random_agent(families: &[AgentFamily]) -> &'static str {
    let family = if families.is_empty() {
        AgentFamily::Firefox
    } else {
        families[rand::random_range(0..families.len())]
    };
    let agents = family.agents();
    agents[rand::random_range(0..agents.len())]
}
