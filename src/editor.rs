//! Load, edit and save the configuration document as one unit.
//!
//! The backend only accepts whole documents, so every change is a fetch,
//! an in-memory edit, and a full `POST`. [`ConfigEditor`] owns that cycle and
//! the `--dry-run` switch; nothing here touches the terminal.

use std::future::Future;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::{ApiClient, DirectoryService};
use crate::browser::{fetch_pending, BrowserAction, BrowserOutcome, FetchTicket, FolderBrowser};
use crate::config::BrowserConfig;
use crate::document::{ConfigDocument, EditError, KnowledgeSource};

/// What [`ConfigEditor::save`] did with the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Dry run: the pretty-printed document that would have been posted.
    DryRun(String),
}

/// Source of browser actions for [`ConfigEditor::browse`].
pub trait BrowseInput {
    /// Next action for the browser as it stands. `Ok(None)` means input ended,
    /// which cancels the session.
    fn next_action(
        &mut self,
        browser: &FolderBrowser,
    ) -> impl Future<Output = Result<Option<BrowserAction>>>;

    /// A message for the user that does not end the session.
    fn notice(&mut self, message: &str);
}

/// How a browse session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseResult {
    Added(KnowledgeSource, SaveOutcome),
    Cancelled,
}

/// What the owner of a browse session does after one browser outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseStep {
    Fetch(FetchTicket),
    Continue,
    /// The pick was refused; the session stays open and the document is unchanged.
    Refused(EditError),
    Added(KnowledgeSource),
    Cancelled,
}

/// Apply one browser outcome to `doc`. Only `Selected` mutates it.
pub fn apply_outcome(doc: &mut ConfigDocument, outcome: BrowserOutcome) -> BrowseStep {
    match outcome {
        BrowserOutcome::Fetch(ticket) => BrowseStep::Fetch(ticket),
        BrowserOutcome::Cached | BrowserOutcome::Ignored => BrowseStep::Continue,
        BrowserOutcome::Selected(folder) => match doc.add_knowledge_source(folder) {
            Ok(source) => BrowseStep::Added(source.clone()),
            Err(e) => BrowseStep::Refused(e),
        },
        BrowserOutcome::Cancelled => BrowseStep::Cancelled,
    }
}

pub struct ConfigEditor {
    client: ApiClient,
    dry_run: bool,
}

impl ConfigEditor {
    pub fn new(client: ApiClient, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn load(&self) -> Result<ConfigDocument> {
        self.client
            .fetch_config()
            .await
            .context("failed to load configuration")
    }

    /// Post the whole document, or render it without posting under dry run.
    pub async fn save(&self, doc: &ConfigDocument) -> Result<SaveOutcome> {
        if self.dry_run {
            info!("dry run, configuration not saved");
            return Ok(SaveOutcome::DryRun(serde_json::to_string_pretty(doc)?));
        }
        self.client
            .save_config(doc)
            .await
            .context("failed to save configuration")?;
        Ok(SaveOutcome::Saved)
    }

    /// Load, apply `edit`, then save. Nothing is saved if `edit` fails.
    pub async fn edit<T>(
        &self,
        edit: impl FnOnce(&mut ConfigDocument) -> Result<T>,
    ) -> Result<(T, SaveOutcome)> {
        let mut doc = self.load().await?;
        let out = edit(&mut doc)?;
        let saved = self.save(&doc).await?;
        Ok((out, saved))
    }

    /// Walk `directory` with actions from `input` until a folder is added or
    /// the session is cancelled. The document is saved once, after a
    /// successful add; refused picks and cancellation save nothing.
    pub async fn browse<S, I>(
        &self,
        directory: &S,
        settings: &BrowserConfig,
        input: &mut I,
    ) -> Result<BrowseResult>
    where
        S: DirectoryService,
        I: BrowseInput,
    {
        let mut doc = self.load().await?;
        let (mut browser, ticket) =
            FolderBrowser::open(settings.root_label.clone(), settings.cache_listings);
        let mut pending = Some(ticket);

        loop {
            if let Some(ticket) = pending.take() {
                fetch_pending(&mut browser, directory, ticket).await;
            }

            let action = input
                .next_action(&browser)
                .await?
                .unwrap_or(BrowserAction::Cancel);

            match apply_outcome(&mut doc, browser.handle(action)) {
                BrowseStep::Fetch(ticket) => pending = Some(ticket),
                BrowseStep::Continue => {}
                BrowseStep::Refused(e) => {
                    debug!(error = %e, "pick refused");
                    input.notice(&e.to_string());
                }
                BrowseStep::Added(source) => {
                    let saved = self.save(&doc).await?;
                    return Ok(BrowseResult::Added(source, saved));
                }
                BrowseStep::Cancelled => return Ok(BrowseResult::Cancelled),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::FolderRef;

    #[test]
    fn selection_adds_a_source() {
        let mut doc = ConfigDocument::default();
        let step = apply_outcome(&mut doc, BrowserOutcome::Selected(FolderRef::new("A", "Docs")));
        assert!(matches!(step, BrowseStep::Added(ref s) if s.id == "A"));
        assert_eq!(doc.knowledge_sources.len(), 1);
    }

    #[test]
    fn duplicate_selection_is_refused_without_change() {
        let mut doc = ConfigDocument::default();
        doc.add_knowledge_source(FolderRef::new("A", "Docs")).unwrap();
        let before = doc.clone();

        let step = apply_outcome(&mut doc, BrowserOutcome::Selected(FolderRef::new("A", "Docs")));

        assert!(matches!(step, BrowseStep::Refused(EditError::DuplicateSource { .. })));
        assert_eq!(doc, before);
    }

    #[test]
    fn cancel_and_navigation_leave_the_document_alone() {
        let mut doc = ConfigDocument::default();
        assert_eq!(apply_outcome(&mut doc, BrowserOutcome::Cancelled), BrowseStep::Cancelled);
        assert_eq!(apply_outcome(&mut doc, BrowserOutcome::Ignored), BrowseStep::Continue);
        assert_eq!(apply_outcome(&mut doc, BrowserOutcome::Cached), BrowseStep::Continue);
        assert_eq!(doc, ConfigDocument::default());
    }
}
