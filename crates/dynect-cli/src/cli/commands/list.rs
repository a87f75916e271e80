//! `pnz -z/-n` - the listing flow: login, list, write, log out.

use anyhow::Result;
use dynect_client::Session;
use dynect_core::{Credentials, DynectError};
use std::io::Write;

use super::Context;
use crate::output::{self, Listing};

pub async fn execute(ctx: &Context, credentials: &Credentials) -> Result<()> {
    let client = ctx.client()?;

    // A failed login is terminal: no listing calls, no logout.
    let session = client.login(credentials).await?;

    let mut listing = Listing::new(output::destination(ctx.file.as_deref())?);

    // The listing result is held until the session is torn down: logout runs
    // exactly once per obtained token, also when listing fails part-way.
    let result = write_listing(&session, ctx, &mut listing).await;
    let flushed = listing.finish();

    if let Err(err) = session.logout().await {
        report_logout_failure(&err);
    }

    result?;
    flushed?;
    Ok(())
}

/// Walk the zones in server order, emitting each zone line and, when
/// requested, the zone's node lines before the next zone.
async fn write_listing<W: Write>(
    session: &Session,
    ctx: &Context,
    out: &mut Listing<W>,
) -> Result<()> {
    let zones = session.list_zones().await?;

    for zone in &zones {
        out.zone(zone)?;

        if ctx.nodes {
            for node in session.list_nodes(zone).await? {
                out.node(&node)?;
            }
        }
    }

    Ok(())
}

/// A logout failure is reported but never changes the exit status.
fn report_logout_failure(err: &DynectError) {
    if err.is_api_failure() {
        for msg in err.messages() {
            eprintln!("{msg}");
        }
    } else {
        eprintln!("logout failed: {err}");
    }
}
