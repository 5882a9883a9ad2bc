//! CLI `profile` command.

use anyhow::{bail, Result};
use koto_console::document::ProfilePatch;

use super::Console;

pub async fn profile(console: &Console, patch: ProfilePatch) -> Result<()> {
    if patch.is_empty() {
        bail!("nothing to change; pass --name, --personality, or --master-prompt");
    }
    console
        .edit(|doc| {
            doc.update_profile(patch);
            Ok(())
        })
        .await
}
