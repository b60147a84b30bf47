// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::reporting::{
    agents_message, ending_message, failure_message, file_header, kept_message, summary_message,
    unique_message, Reporter,
};
use crate::domain::search::query::Query;
use crate::infrastructure::search::aggregator::{AggregateOutcome, SearchAggregator};
use crate::utils::errors::AppError;
use chrono::Local;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// 聚合搜索用例
///
/// 记录各引擎使用的 User-Agent，执行聚合搜索，然后将统计信息和去重后的结果
/// 输出到终端并追加写入结果文件
pub struct AggregateSearch<W: Write> {
    aggregator: SearchAggregator,
    reporter: Reporter<W>,
    pause: Duration,
}

impl<W: Write> AggregateSearch<W> {
    pub fn new(aggregator: SearchAggregator, reporter: Reporter<W>, pause: Duration) -> Self {
        Self {
            aggregator,
            reporter,
            pause,
        }
    }

    pub fn reporter(&self) -> &Reporter<W> {
        &self.reporter
    }

    pub async fn run(&mut self, query: &Query) -> Result<AggregateOutcome, AppError> {
        let file_term = query.file_term();
        info!("Searching for '{}'", query);

        self.reporter
            .write_file(&format!("{}\n\n", file_header(&file_term, Local::now())))
            .await?;

        let agents = agents_message(
            self.aggregator
                .engines()
                .map(|engine| (engine.name(), engine.user_agent())),
        );
        self.reporter.report(&agents).await?;

        let outcome = self.aggregator.search(query.as_str()).await;

        for engine in &outcome.engines {
            self.reporter.report(&kept_message(engine)).await?;
            if let Some(message) = failure_message(engine) {
                self.reporter.report(&message).await?;
            }
        }

        self.reporter.report(&summary_message(&outcome)).await?;
        for engine in &outcome.engines {
            self.reporter.report(&unique_message(engine)).await?;
        }

        if !self.pause.is_zero() {
            debug!("Pausing {:?} before listing results", self.pause);
            tokio::time::sleep(self.pause).await;
        }

        for result in &outcome.unique_results {
            self.reporter.report_result(result).await?;
        }

        let written_to = format!(
            "\nResults were written or appended to {}",
            self.reporter.file().path().display()
        );
        self.reporter.print(&written_to)?;
        self.reporter
            .report(&ending_message(outcome.unique_results.len()))
            .await?;

        Ok(outcome)
    }
}
