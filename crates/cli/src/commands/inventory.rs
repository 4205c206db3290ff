//! Inventory command implementation.
//!
//! Shows the parsed inventory. Needs no credentials and makes no requests.

use anyhow::Result;

use crate::commands::{CommandContext, load_inventory};

pub fn run(ctx: CommandContext) -> Result<()> {
    let inventory = load_inventory(&ctx)?;
    let output = ctx.formatter().format_inventory(&inventory)?;
    ctx.emit(&output)
}
