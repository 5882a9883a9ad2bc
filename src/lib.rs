//! Configuration console for the KOTO assistant backend.
//!
//! KOTO reads its behaviour from one JSON configuration document: the user's
//! profile, a master prompt, daily reminders, linked knowledge-source folders
//! and linked Notion databases. This crate loads that document over the
//! backend REST API, edits it locally, and saves it back whole.
//!
//! Knowledge sources are picked with an interactive folder browser that walks
//! the backend's directory service one level at a time.
//!
//! # Modules
//!
//! - [`config`] — Console settings from TOML and environment variables
//! - [`api`] — REST client and the [`DirectoryService`](api::DirectoryService) seam
//! - [`browser`] — Navigation stack, browser session state machine, text rendering
//! - [`document`] — Configuration document types, load-time migration, and edits
//! - [`editor`] — Load/edit/save cycle, dry run, and the browse session owner

pub mod api;
pub mod browser;
pub mod config;
pub mod document;
pub mod editor;
