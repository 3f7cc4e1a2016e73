use std::env;
use std::io;

use dotenvy::dotenv;
use log::{info, warn};
use serde_json::json;

use pow_chain::Blockchain;

fn main() -> io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let blocks: usize = env::var("BLOCKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    println!("⛓️ Mining {blocks} blocks on a local chain");

    let mut local = Blockchain::new();
    for i in 1..=blocks {
        local.add_block(json!({ "message": format!("local block #{i}") }));
    }

    // A peer that has mined one block more than us should win.
    let mut peer = Blockchain::new();
    for i in 1..=blocks + 1 {
        peer.add_block(json!({ "message": format!("peer block #{i}") }));
    }

    match local.replace_chain(peer.chain().to_vec()) {
        Ok(()) => info!("adopted peer chain, height={}", local.len() - 1),
        Err(e) => warn!("kept local chain: {e}"),
    }

    // Our old, shorter history must be refused now.
    let mut stale = Blockchain::new();
    stale.add_block(json!({ "message": "stale block" }));
    if let Err(e) = local.replace_chain(stale.chain().to_vec()) {
        info!("refused stale chain: {e}");
    }

    serde_json::to_writer_pretty(io::stdout().lock(), local.chain()).map_err(io::Error::other)?;
    println!();
    Ok(())
}
