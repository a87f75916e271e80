//! Listing output: line rendering and destination handling.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use dynect_core::Zone;

/// Open the listing destination: the file given with `-f`, or stdout.
///
/// With a file, listing content goes only to the file and stdout stays
/// silent; the file receives exactly the bytes stdout would have.
pub fn destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("unable to open {} for writing", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Renders the listing: one `ZONE:` line per zone, each immediately
/// followed by its indented `NODE:` lines when nodes were requested.
pub struct Listing<W: Write> {
    out: W,
}

impl<W: Write> Listing<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit a zone line
    pub fn zone(&mut self, zone: &Zone) -> io::Result<()> {
        writeln!(self.out, "ZONE: {zone}")
    }

    /// Emit a node line, indented under the current zone
    pub fn node(&mut self, node: &str) -> io::Result<()> {
        writeln!(self.out, "\tNODE: {node}")
    }

    /// Flush buffered output to the destination
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
