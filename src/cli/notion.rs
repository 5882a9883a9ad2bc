//! CLI `notion` commands.

use anyhow::Result;

use super::Console;

pub async fn add(console: &Console, id: &str, name: &str) -> Result<()> {
    let db = console
        .edit(|doc| Ok(doc.add_notion_database(id, name)?.clone()))
        .await?;
    println!("Linked Notion database: {}", db.name);
    Ok(())
}

pub async fn remove(console: &Console, id: &str) -> Result<()> {
    console
        .edit(|doc| {
            doc.remove_notion_database(id)?;
            Ok(())
        })
        .await
}

pub async fn describe(console: &Console, id: &str, description: String) -> Result<()> {
    console
        .edit(|doc| Ok(doc.describe_notion_database(id, description)?))
        .await
}
