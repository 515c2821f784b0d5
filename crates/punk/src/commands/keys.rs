//! Keys command implementation.
//!
//! Lists every query key the beer filters can produce.

use owo_colors::OwoColorize;
use punk_api_rs::beers::QUERY_KEYS;

use super::{CommandContext, Result};

/// Executes the keys command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&QUERY_KEYS)?);
        return Ok(());
    }

    if !ctx.quiet {
        let header = "Query keys";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }
    }

    for key in QUERY_KEYS {
        println!("{key}");
    }

    Ok(())
}
