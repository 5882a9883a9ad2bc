pub mod browse;
pub mod folders;
pub mod notion;
pub mod profile;
pub mod reminders;
pub mod show;
pub mod sources;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use koto_console::api::ApiClient;
use koto_console::config::ConsoleConfig;
use koto_console::document::ConfigDocument;
use koto_console::editor::{ConfigEditor, SaveOutcome};

/// Shared state for one CLI invocation.
pub struct Console {
    pub config: ConsoleConfig,
    pub editor: ConfigEditor,
}

impl Console {
    pub fn new(config: ConsoleConfig, dry_run: bool) -> Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to create API client")?;
        tracing::debug!(base = %client.base_url(), dry_run, "console ready");
        Ok(Self {
            config,
            editor: ConfigEditor::new(client, dry_run),
        })
    }

    pub fn client(&self) -> &ApiClient {
        self.editor.client()
    }

    pub async fn load(&self) -> Result<ConfigDocument> {
        with_spinner("Loading configuration...", self.editor.load()).await
    }

    /// Load, apply `edit`, save, then report. Nothing is saved if `edit` fails.
    pub async fn edit<T>(&self, edit: impl FnOnce(&mut ConfigDocument) -> Result<T>) -> Result<T> {
        let (out, saved) = with_spinner("Updating configuration...", self.editor.edit(edit)).await?;
        report_save(&saved);
        Ok(out)
    }
}

pub fn report_save(outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Saved => println!("Configuration saved."),
        SaveOutcome::DryRun(body) => {
            println!("{body}");
            println!("(dry run, nothing saved)");
        }
    }
}

/// Run `fut` with a spinner on stderr.
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Convert a 1-based index from the command line.
pub fn zero_based(index: usize) -> Result<usize> {
    index
        .checked_sub(1)
        .context("positions start at 1")
}
