//! CLI `folders` command — list one level of the directory service.

use anyhow::{Context, Result};
use koto_console::api::DirectoryService;

use super::{with_spinner, Console};

pub async fn folders(console: &Console, parent_id: &str) -> Result<()> {
    let children = with_spinner("Loading folders...", console.client().list_folders(parent_id))
        .await
        .with_context(|| format!("failed to list folders under {parent_id:?}"))?;

    if children.is_empty() {
        println!("No folders");
        return Ok(());
    }
    for folder in &children {
        println!("{:<40} {}", folder.id, folder.name);
    }
    Ok(())
}
