// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 搜索报告
//!
//! 每条消息同时输出到终端并追加写入结果文件；颜色控制码只写入终端

use crate::domain::models::search_result::SearchResult;
use crate::infrastructure::search::aggregator::{AggregateOutcome, EngineOutcome};
use crate::infrastructure::storage::ResultsFile;
use crate::utils::errors::AppError;
use chrono::{DateTime, Local};
use std::io::Write;

pub const BLUE: &str = "\x1b[1;34m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const NC: &str = "\x1b[0m";

pub struct Reporter<W: Write> {
    console: W,
    file: ResultsFile,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(console: W, file: ResultsFile, color: bool) -> Self {
        Self {
            console,
            file,
            color,
        }
    }

    pub fn file(&self) -> &ResultsFile {
        &self.file
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    /// Print `message` and append it, plus a newline, to the results file.
    pub async fn report(&mut self, message: &str) -> Result<(), AppError> {
        self.print(message)?;
        self.file.append(&format!("{}\n", message)).await?;
        Ok(())
    }

    pub fn print(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.console, "{}", message)?;
        self.console.flush()?;
        Ok(())
    }

    pub async fn write_file(&mut self, text: &str) -> Result<(), AppError> {
        self.file.append(text).await?;
        Ok(())
    }

    /// URL, tagged title and description of one result; colored on the console only.
    pub async fn report_result(&mut self, result: &SearchResult) -> Result<(), AppError> {
        let plain = format!(
            "\n{}\n{}\n{}",
            result.url,
            result.tagged_title(),
            result.description_or_empty()
        );
        if self.color {
            let colored = format!(
                "\n{}{}\n{}{}{}\n{}",
                BLUE,
                result.url,
                YELLOW,
                result.tagged_title(),
                NC,
                result.description_or_empty()
            );
            self.print(&colored)?;
        } else {
            self.print(&plain)?;
        }
        self.file.append(&format!("{}\n", plain)).await?;
        Ok(())
    }
}

pub fn file_header(file_term: &str, time: DateTime<Local>) -> String {
    format!("SEARCH TERM: {}    TIME: {}", file_term, time.format("%x %X"))
}

pub fn agents_message<'a>(agents: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut message = String::from("\nUser agent for each engine of this search:");
    for (name, agent) in agents {
        message.push_str(&format!("\n{:<12}{}", format!("{}:", name), agent));
    }
    message
}

pub fn kept_message(engine: &EngineOutcome) -> String {
    format!("Keeping the first {} results from {}", engine.kept, engine.name)
}

pub fn failure_message(engine: &EngineOutcome) -> Option<String> {
    engine
        .error
        .as_ref()
        .map(|e| format!("{} returned no results: {}", engine.name, e))
}

pub fn summary_message(outcome: &AggregateOutcome) -> String {
    format!(
        "Kept {} total results.\n\nThere are {} unique results.",
        outcome.combined,
        outcome.unique_results.len()
    )
}

pub fn unique_message(engine: &EngineOutcome) -> String {
    format!(
        "{} unique results retained from {} ({})",
        engine.unique, engine.name, engine.tag
    )
}

pub fn ending_message(unique: usize) -> String {
    let rule = "=".repeat(26);
    format!("\n{} END of {} results {}\n", rule, unique, rule)
}
