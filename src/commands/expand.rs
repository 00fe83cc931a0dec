//! `agrc expand` handler

use anyhow::{Context, Result};

use agrc::try_expand_user_path;

/// Print the expanded path, failing when the `~` prefix cannot be resolved.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &str) -> Result<()> {
    let expanded =
        try_expand_user_path(path).with_context(|| format!("Cannot expand '{}'", path))?;
    println!("{}", expanded);
    Ok(())
}
