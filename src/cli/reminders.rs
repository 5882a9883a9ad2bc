//! CLI `reminder` commands.

use anyhow::Result;
use koto_console::document::ReminderPatch;

use super::{zero_based, Console};

pub async fn add(console: &Console) -> Result<()> {
    let (index, r) = console
        .edit(|doc| {
            let index = doc.add_reminder()?;
            Ok((index, doc.reminders[index].clone()))
        })
        .await?;
    println!("Added reminder {}: {} at {}", index + 1, r.name, r.time);
    Ok(())
}

pub async fn remove(console: &Console, index: usize) -> Result<()> {
    let index = zero_based(index)?;
    let removed = console.edit(|doc| Ok(doc.remove_reminder(index)?)).await?;
    println!("Removed reminder: {}", removed.name);
    Ok(())
}

pub async fn set(console: &Console, index: usize, patch: ReminderPatch) -> Result<()> {
    let index = zero_based(index)?;
    let r = console
        .edit(|doc| Ok(doc.update_reminder(index, patch)?.clone()))
        .await?;
    let state = if r.enabled { "on" } else { "off" };
    println!("Reminder {}: {} at {} [{state}]", index + 1, r.name, r.time);
    Ok(())
}
