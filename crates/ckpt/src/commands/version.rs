//! `ckpt version` -- print version and platform information.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Version string, set at compile time from the workspace version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute the `ckpt version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    if ctx.json {
        output_json(&serde_json::json!({
            "version": VERSION,
            "os": os,
            "arch": arch,
        }));
    } else {
        println!("ckpt version {} {}/{}", VERSION, os, arch);
    }

    Ok(())
}
