// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 搜索词语法
//!
//! 搜索词会原样转交给各搜索引擎，由引擎自行解释语法。
//! 这里只做分词和校验，尽早拒绝引擎无法理解的输入（未闭合的引号、
//! 悬空的 `AND`/`OR` 等），并生成用于文件命名的搜索词。

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// 搜索词语法说明，由 `--use` 输出
pub const USE_SYNTAX: &str = r#"Search term syntax
==================
Most of the syntax below is honored by all engines; results may vary.

  rust async runtime      Pages containing all of the words, in any order.
  "async runtime"         Quote words for an exact match of the phrase.
  tokio AND actix         Both terms must appear (AND must be upper case).
  tokio OR actix          Either term may appear (OR must be upper case).
  program*                Wildcard: * stands in for unspecified characters
                            or words, e.g. "the * of rust".
  rust -game              Exclude results containing the word after -.
  rust -"video game"      Exclude results containing the quoted phrase.
  site:.gov               Restrict results to a domain or domain suffix,
                            e.g. site:.edu, site:rust-lang.org.

Operators and modifiers can be combined:
  "memory safety" site:.gov -blog

Results are printed to the Terminal and written (or appended) to a
text file named for the search term in the results folder.
Enter -h, -help or --help at the search prompt to see this text again.
"#;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("The search term is empty")]
    Empty,
    #[error("Missing closing quotation mark")]
    UnterminatedQuote,
    #[error("site: needs a domain, e.g. site:.gov")]
    EmptySite,
    #[error("- must be followed by the word or \"phrase\" to exclude")]
    EmptyExclusion,
    #[error("{0} must be placed between two search terms")]
    DanglingOperator(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Word(String),
    /// Exact match; stored without the surrounding quotes
    Phrase(String),
    Wildcard(String),
    /// Excluded word or quoted phrase; stored without the leading `-`
    Exclude(String),
    Site(String),
    And,
    Or,
}

impl QueryToken {
    fn is_operator(&self) -> bool {
        matches!(self, QueryToken::And | QueryToken::Or)
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::Word(w) | QueryToken::Wildcard(w) => write!(f, "{}", w),
            QueryToken::Phrase(p) => write!(f, "\"{}\"", p),
            QueryToken::Exclude(t) => write!(f, "-{}", t),
            QueryToken::Site(d) => write!(f, "site:{}", d),
            QueryToken::And => write!(f, "AND"),
            QueryToken::Or => write!(f, "OR"),
        }
    }
}

/// 已校验的搜索词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<QueryToken>,
    normalized: String,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let mut tokens = Vec::new();
        let mut chars = raw.chars().peekable();

        loop {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            match chars.peek() {
                None => break,
                Some('"') => {
                    chars.next();
                    let phrase = collapse_whitespace(&read_quoted(&mut chars)?);
                    if !phrase.is_empty() {
                        tokens.push(QueryToken::Phrase(phrase));
                    }
                }
                Some(_) => {
                    let word = read_word(&mut chars)?;
                    tokens.push(classify(word)?);
                }
            }
        }

        if tokens.is_empty() {
            return Err(QueryError::Empty);
        }
        check_operators(&tokens)?;

        let normalized = tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self { tokens, normalized })
    }

    pub fn tokens(&self) -> &[QueryToken] {
        &self.tokens
    }

    /// Normalized term submitted to the engines.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Term with spaces replaced by `+`; `+` does not change what engines return.
    pub fn file_term(&self) -> String {
        self.normalized.replace(' ', "+")
    }

    pub fn site_filters(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            QueryToken::Site(d) => Some(d.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Input at the search prompt that asks for usage instead of a search.
pub fn is_help_request(input: &str) -> bool {
    matches!(input.trim(), "" | "-h" | "-help" | "--help")
}

/// Reads up to and including the closing quote; the opening quote is already consumed.
fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> Result<String, QueryError> {
    let mut text = String::new();
    for c in chars.by_ref() {
        if c == '"' {
            return Ok(text);
        }
        text.push(c);
    }
    Err(QueryError::UnterminatedQuote)
}

fn read_word(chars: &mut Peekable<Chars<'_>>) -> Result<String, QueryError> {
    let mut word = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            break;
        }
        chars.next();
        if c == '"' {
            // -"a phrase" and site:"x" keep their quotes
            let quoted = collapse_whitespace(&read_quoted(chars)?);
            word.push('"');
            word.push_str(&quoted);
            word.push('"');
        } else {
            word.push(c);
        }
    }
    Ok(word)
}

fn classify(word: String) -> Result<QueryToken, QueryError> {
    match word.as_str() {
        "AND" => return Ok(QueryToken::And),
        "OR" => return Ok(QueryToken::Or),
        _ => {}
    }

    if let Some(rest) = word.strip_prefix('-') {
        if rest.is_empty() || rest == "\"\"" {
            return Err(QueryError::EmptyExclusion);
        }
        return Ok(QueryToken::Exclude(rest.to_string()));
    }

    if word
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("site:"))
    {
        let domain = word[5..].trim_matches('"');
        if domain.is_empty() {
            return Err(QueryError::EmptySite);
        }
        return Ok(QueryToken::Site(domain.to_string()));
    }

    if word.contains('*') {
        return Ok(QueryToken::Wildcard(word));
    }

    Ok(QueryToken::Word(word))
}

fn check_operators(tokens: &[QueryToken]) -> Result<(), QueryError> {
    let dangling = |t: &QueryToken| Err(QueryError::DanglingOperator(t.to_string()));

    if let Some(first) = tokens.first().filter(|t| t.is_operator()) {
        return dangling(first);
    }
    if let Some(last) = tokens.last().filter(|t| t.is_operator()) {
        return dangling(last);
    }
    for pair in tokens.windows(2) {
        if pair[0].is_operator() && pair[1].is_operator() {
            return dangling(&pair[1]);
        }
    }
    Ok(())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
