//! CLI `browse` command — pick a knowledge source folder interactively.

use std::io::Write;

use anyhow::Result;
use koto_console::api::{ApiClient, ApiError, DirectoryService};
use koto_console::browser::render::render_browser;
use koto_console::browser::{BrowserAction, FolderBrowser, FolderRef};
use koto_console::editor::{BrowseInput, BrowseResult};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{report_save, with_spinner, Console};

/// Walk the directory tree; the picked folder is appended to the knowledge
/// sources and the document saved. Cancelling saves nothing.
pub async fn browse(console: &Console) -> Result<()> {
    let directory = Spinning(console.client());
    let mut input = Terminal {
        lines: BufReader::new(tokio::io::stdin()).lines(),
    };

    match console
        .editor
        .browse(&directory, &console.config.browser, &mut input)
        .await?
    {
        BrowseResult::Added(source, saved) => {
            println!("Added knowledge source: {} (ID: {})", source.name, source.id);
            report_save(&saved);
        }
        BrowseResult::Cancelled => println!("Cancelled. Configuration unchanged."),
    }
    Ok(())
}

/// Directory listings with a spinner while the request is out.
struct Spinning<'a>(&'a ApiClient);

impl DirectoryService for Spinning<'_> {
    async fn list_folders(&self, parent_id: &str) -> Result<Vec<FolderRef>, ApiError> {
        with_spinner("Loading folders...", self.0.list_folders(parent_id)).await
    }
}

/// Renders the browser and reads commands from stdin without blocking the runtime.
struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl BrowseInput for Terminal {
    async fn next_action(&mut self, browser: &FolderBrowser) -> Result<Option<BrowserAction>> {
        loop {
            println!();
            println!("{}", render_browser(browser));
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            match parse_command(line.trim()) {
                Some(action) => return Ok(Some(action)),
                None => println!("Unknown command: {}", line.trim()),
            }
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Map one input line to a browser action. Folder numbers are 1-based.
fn parse_command(line: &str) -> Option<BrowserAction> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let action = match first {
        "b" | "back" | ".." => BrowserAction::Back,
        "r" | "reload" => BrowserAction::Refresh,
        "q" | "quit" | "cancel" => BrowserAction::Cancel,
        "a" | "add" => BrowserAction::Select(parse_position(words.next()?)?),
        n => BrowserAction::Descend(parse_position(n)?),
    };
    if words.next().is_some() {
        return None;
    }
    Some(action)
}

fn parse_position(word: &str) -> Option<usize> {
    word.parse::<usize>().ok()?.checked_sub(1)
}
