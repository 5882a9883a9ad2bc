//! Browser session state machine.

use std::collections::HashMap;
use std::fmt::Display;

use tracing::{debug, warn};

use super::{FolderRef, NavigationPath};
use crate::api::DirectoryService;

/// Key for one outstanding children fetch.
///
/// A result is only applied if its ticket still matches the folder on screen,
/// so responses that arrive after the user has moved on are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    folder_id: String,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Folder whose children were requested. Empty for the drive root.
    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }
}

/// What the browser shows for the current folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// A fetch is outstanding; the previous listing is hidden.
    Loading,
    /// The folder has no child folders.
    Empty,
    /// Immediate child folders, in service order. Never empty.
    Folders(Vec<FolderRef>),
    /// The fetch failed. Holds the error message for display.
    Failed(String),
}

impl Listing {
    fn from_children(children: Vec<FolderRef>) -> Self {
        if children.is_empty() {
            Listing::Empty
        } else {
            Listing::Folders(children)
        }
    }

    /// Children that can be descended into or selected. Empty unless populated.
    pub fn entries(&self) -> &[FolderRef] {
        match self {
            Listing::Folders(children) => children,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Listing::Loading)
    }
}

/// User intent inside the browser. Indices refer to [`Listing::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Open the child folder; the session continues one level deeper.
    Descend(usize),
    /// Pick the child folder as a knowledge source; ends the session.
    Select(usize),
    /// Go up one level. Ignored at the root.
    Back,
    /// Fetch the current folder again.
    Refresh,
    /// End the session without picking anything.
    Cancel,
}

/// Result of [`FolderBrowser::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    /// The current folder changed (or was refreshed); run this fetch.
    Fetch(FetchTicket),
    /// The current folder changed and its listing came from the session cache.
    Cached,
    /// The session is over; the owner should record this folder.
    Selected(FolderRef),
    /// The session is over with no selection.
    Cancelled,
    /// Nothing happened.
    Ignored,
}

/// One browsing session over the remote directory tree.
#[derive(Debug)]
pub struct FolderBrowser {
    path: NavigationPath,
    listing: Listing,
    /// Sequence number of the most recently issued ticket.
    issued: u64,
    /// Sequence number of the ticket whose result is on screen.
    applied: u64,
    cache: Option<HashMap<String, Vec<FolderRef>>>,
}

impl FolderBrowser {
    /// Open a session at the drive root. Returns the mount fetch.
    ///
    /// With `cache_listings`, successful listings are kept per folder id for
    /// the lifetime of the session and revisits skip the fetch.
    pub fn open(root_label: impl Into<String>, cache_listings: bool) -> (Self, FetchTicket) {
        let mut browser = Self {
            path: NavigationPath::new(root_label),
            listing: Listing::Loading,
            issued: 0,
            applied: 0,
            cache: cache_listings.then(HashMap::new),
        };
        let ticket = browser.issue_fetch();
        (browser, ticket)
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn current(&self) -> &FolderRef {
        self.path.current()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn is_loading(&self) -> bool {
        self.listing.is_loading()
    }

    /// Apply a user action.
    pub fn handle(&mut self, action: BrowserAction) -> BrowserOutcome {
        match action {
            BrowserAction::Descend(index) => match self.listing.entries().get(index) {
                Some(child) => {
                    let child = child.clone();
                    debug!(folder_id = %child.id, depth = self.path.depth() + 1, "descending");
                    self.path.push(child);
                    self.navigated()
                }
                None => BrowserOutcome::Ignored,
            },
            BrowserAction::Select(index) => match self.listing.entries().get(index) {
                Some(child) => BrowserOutcome::Selected(child.clone()),
                None => BrowserOutcome::Ignored,
            },
            BrowserAction::Back => {
                if self.path.pop() {
                    self.navigated()
                } else {
                    BrowserOutcome::Ignored
                }
            }
            BrowserAction::Refresh => BrowserOutcome::Fetch(self.issue_fetch()),
            BrowserAction::Cancel => BrowserOutcome::Cancelled,
        }
    }

    /// Hand back the result of a fetch. Returns `true` if it was applied.
    ///
    /// Results for a folder other than the current one, or older than the
    /// listing already shown, are discarded. A failure clears the loading
    /// state and leaves no entries; it is never returned to the caller.
    pub fn complete<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FolderRef>, E>,
    ) -> bool {
        if ticket.folder_id != self.path.current().id || ticket.seq <= self.applied {
            debug!(
                folder_id = %ticket.folder_id,
                seq = ticket.seq,
                current = %self.path.current().id,
                "discarding stale folder listing"
            );
            return false;
        }
        self.applied = ticket.seq;

        self.listing = match result {
            Ok(children) => {
                debug!(folder_id = %ticket.folder_id, count = children.len(), "folder listing loaded");
                if let Some(cache) = self.cache.as_mut() {
                    cache.insert(ticket.folder_id, children.clone());
                }
                Listing::from_children(children)
            }
            Err(e) => {
                warn!(folder_id = %ticket.folder_id, error = %e, "failed to fetch folders");
                Listing::Failed(e.to_string())
            }
        };
        true
    }

    fn navigated(&mut self) -> BrowserOutcome {
        let cached = self
            .cache
            .as_ref()
            .and_then(|cache| cache.get(&self.path.current().id))
            .cloned();
        match cached {
            Some(children) => {
                // Anything still in flight is older than what we are about to show.
                self.applied = self.issued;
                self.listing = Listing::from_children(children);
                BrowserOutcome::Cached
            }
            None => BrowserOutcome::Fetch(self.issue_fetch()),
        }
    }

    fn issue_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.listing = Listing::Loading;
        FetchTicket {
            seq: self.issued,
            folder_id: self.path.current().id.clone(),
        }
    }
}

/// Run `ticket` against `service` and feed the result back into `browser`.
pub async fn fetch_pending<S: DirectoryService>(
    browser: &mut FolderBrowser,
    service: &S,
    ticket: FetchTicket,
) -> bool {
    let result = service.list_folders(ticket.folder_id()).await;
    browser.complete(ticket, result)
}
