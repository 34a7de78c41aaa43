//! Interaction feedback cue (terminal bell)

use std::io::Write;

use lore_core::prelude::*;

const BEL: &[u8] = b"\x07";

/// Write the bell character to `out`
pub fn ring<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(BEL)
        .and_then(|_| out.flush())
        .map_err(|e| Error::cue(e.to_string()))
}
