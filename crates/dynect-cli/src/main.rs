//! pnz - print the zones, and optionally the nodes, of a DynECT account.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dynect_cli::run().await
}
