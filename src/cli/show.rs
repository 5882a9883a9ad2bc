//! CLI `show` command — print the current configuration.

use anyhow::Result;

use super::Console;

pub async fn show(console: &Console, json: bool) -> Result<()> {
    let doc = console.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("KOTO Configuration ({})", console.client().base_url());
    println!("{}", "=".repeat(50));
    println!("  Name:           {}", doc.user_name);
    println!("  Personality:    {}", doc.personality);
    println!();

    println!("Master prompt:");
    if doc.master_prompt.is_empty() {
        println!("  (none)");
    } else {
        for line in doc.master_prompt.lines() {
            println!("  {line}");
        }
    }
    println!();

    println!("Reminders:");
    if doc.reminders.is_empty() {
        println!("  (none)");
    }
    for (i, r) in doc.reminders.iter().enumerate() {
        let state = if r.enabled { "on " } else { "off" };
        println!("  {}. [{state}] {} {}", i + 1, r.time, r.name);
        if !r.prompt.is_empty() {
            println!("         {}", r.prompt);
        }
    }
    println!();

    println!("Knowledge sources:");
    if doc.knowledge_sources.is_empty() {
        println!("  (none)");
    }
    for k in &doc.knowledge_sources {
        println!("  {} (ID: {})", k.name, k.id);
        println!("      {}", k.instruction);
    }
    println!();

    println!("Notion databases:");
    if doc.notion_databases.is_empty() {
        println!("  (none)");
    }
    for db in &doc.notion_databases {
        let short: String = db.id.chars().take(8).collect();
        println!("  {} (ID: {short}...)", db.name);
        if !db.description.is_empty() {
            println!("      {}", db.description);
        }
    }

    Ok(())
}
