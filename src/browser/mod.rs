//! Remote folder browser.
//!
//! A [`FolderBrowser`] session walks the directory service one level at a
//! time. It owns a [`NavigationPath`] from the drive root to the folder on
//! screen and the [`Listing`] for that folder. The session never performs I/O
//! itself: every navigation returns a [`FetchTicket`] that the owner runs
//! against a [`DirectoryService`](crate::api::DirectoryService) and hands back
//! through [`FolderBrowser::complete`]. Selection and cancellation are
//! returned as [`BrowserOutcome`] values so the owner performs the resulting
//! state change.

pub mod navigation;
pub mod render;
pub mod session;

use serde::{Deserialize, Serialize};

pub use navigation::NavigationPath;
pub use session::{fetch_pending, BrowserAction, BrowserOutcome, FetchTicket, FolderBrowser, Listing};

/// A node in the remote directory tree.
///
/// Two refs are equal when their ids are equal; the name is display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: String,
    pub name: String,
}

impl FolderRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The root sentinel. An empty id asks the directory service for the drive root.
    pub fn root(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    pub fn is_root(&self) -> bool {
        self.id.is_empty()
    }
}

impl PartialEq for FolderRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FolderRef {}
