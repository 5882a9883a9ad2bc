//! CLI `source` commands — edit knowledge sources directly.

use anyhow::Result;
use koto_console::browser::FolderRef;

use super::Console;

pub async fn add(console: &Console, id: String, name: String) -> Result<()> {
    let source = console
        .edit(|doc| Ok(doc.add_knowledge_source(FolderRef::new(id, name))?.clone()))
        .await?;
    println!("Added knowledge source: {} (ID: {})", source.name, source.id);
    Ok(())
}

pub async fn remove(console: &Console, id: &str) -> Result<()> {
    let removed = console
        .edit(|doc| Ok(doc.remove_knowledge_source(id)?))
        .await?;
    println!("Removed knowledge source: {}", removed.name);
    Ok(())
}

pub async fn instruct(console: &Console, id: &str, instruction: String) -> Result<()> {
    console
        .edit(|doc| Ok(doc.set_instruction(id, instruction)?))
        .await
}
