// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use aggsearch::application::reporting::Reporter;
use aggsearch::application::use_cases::aggregate_search::AggregateSearch;
use aggsearch::config::settings::Settings;
use aggsearch::domain::search::query::{is_help_request, Query};
use aggsearch::infrastructure::search::create_aggregator;
use aggsearch::infrastructure::storage::ResultsFile;
use aggsearch::presentation::cli::{
    about_text, read_term, run_until_interrupted, usage_text, Cli, QUIT_MESSAGE,
};
use aggsearch::utils::errors::AppError;
use aggsearch::utils::telemetry;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::{debug, error, info};

/// 主函数
///
/// 读取搜索词，创建各搜索引擎并运行聚合搜索
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(cli.verbose);
    debug!("CLI arguments: {:?}", cli);

    if cli.about {
        println!("{}", about_text());
        return Ok(());
    }
    if cli.usage {
        println!("{}", usage_text());
        return Ok(());
    }

    // 2. Load configuration
    let mut settings = Settings::new(cli.config.as_deref())?;
    if let Some(dir) = &cli.results_dir {
        settings.search.results_dir = dir.display().to_string();
    }
    let color = settings.search.color
        && !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal();
    info!("Configuration loaded");

    // 3. Obtain the search term
    let term = match cli.term() {
        Some(term) => term,
        None => match prompt_for_term().await? {
            Some(term) => term,
            None => {
                println!("{}", QUIT_MESSAGE);
                // stdin reader may still be blocked
                std::process::exit(0);
            }
        },
    };

    if is_help_request(&term) {
        println!("{}", usage_text());
        return Ok(());
    }

    let query = match Query::parse(&term) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    // 4. Run the search
    let results_file = ResultsFile::for_term(&settings.search.results_dir, &query.file_term()).await?;
    let aggregator = create_aggregator(&settings)?;
    let reporter = Reporter::new(io::stdout(), results_file, color);
    let mut use_case = AggregateSearch::new(aggregator, reporter, settings.search.pause());

    match run_until_interrupted(use_case.run(&query), tokio::signal::ctrl_c()).await {
        Some(Ok(outcome)) => {
            info!("{} unique results", outcome.unique_results.len());
        }
        Some(Err(e)) => {
            error!("Search failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
        None => println!("\n{}", QUIT_MESSAGE),
    }

    Ok(())
}

/// 从标准输入读取搜索词；EOF 或 Ctrl-C 时返回 `None`
async fn prompt_for_term() -> anyhow::Result<Option<String>> {
    let reader =
        tokio::task::spawn_blocking(|| read_term(&mut io::stdin().lock(), &mut io::stdout()));

    match run_until_interrupted(reader, tokio::signal::ctrl_c()).await {
        Some(line) => Ok(line??),
        None => Ok(None),
    }
}
