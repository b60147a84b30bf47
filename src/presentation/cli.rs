// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::query::USE_SYNTAX;
use clap::Parser;
use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "\nEnter search term: ";
pub const QUIT_MESSAGE: &str = " *** Keyboard interrupt: User has quit the program ***\n";

/// 命令行参数
#[derive(Debug, Clone, Parser)]
#[command(name = "aggsearch", version)]
#[command(about = "Aggregate web search results from privacy-focused search engines")]
pub struct Cli {
    /// Provides description, version and license
    #[arg(long)]
    pub about: bool,

    /// Usage and search term syntax examples
    #[arg(long = "use")]
    pub usage: bool,

    /// Configuration file layered over the defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Folder that receives the results files
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,

    /// Search term; prompted for when omitted
    #[arg(value_name = "TERM", trailing_var_arg = true, allow_hyphen_values = true)]
    pub term: Vec<String>,
}

impl Cli {
    /// Search term given on the command line, if any
    pub fn term(&self) -> Option<String> {
        let term = self.term.join(" ");
        if term.trim().is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

pub fn about_text() -> String {
    let fields = [
        ("Author:", env!("CARGO_PKG_AUTHORS")),
        ("License:", env!("CARGO_PKG_LICENSE")),
        ("Program:", env!("CARGO_PKG_NAME")),
        ("URL:", env!("CARGO_PKG_REPOSITORY")),
        ("Version:", env!("CARGO_PKG_VERSION")),
        ("Status:", "Development Status :: 3 - Alpha"),
    ];

    let mut text = format!("{}\n\n", env!("CARGO_PKG_DESCRIPTION"));
    for (label, value) in fields {
        text.push_str(&format!("{:<10} {}\n", label, value));
    }
    text
}

pub fn usage_text() -> String {
    format!(
        "USAGE: Run {} without arguments, then enter your search term at the prompt.\n\n{}",
        env!("CARGO_PKG_NAME"),
        USE_SYNTAX
    )
}

/// 提示输入搜索词
///
/// 读到 EOF 时返回 `None`；去掉行尾换行和开头空白
pub fn read_term<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    writeln!(output)?;
    Ok(Some(line.trim_end_matches(['\r', '\n']).trim_start().to_string()))
}

/// 运行 `work` 直到完成，或直到 `interrupt` 先完成（此时返回 `None`）
pub async fn run_until_interrupted<T>(
    work: impl Future<Output = T>,
    interrupt: impl Future,
) -> Option<T> {
    tokio::select! {
        output = work => Some(output),
        _ = interrupt => None,
    }
}
