//! Text sinks for sample rows.
//!
//! The simulation core emits [`Sample`] values and knows nothing about
//! files; these helpers serialize a sample sequence into the two supported
//! on-disk shapes. Both take any [`std::io::Write`] so callers can target a
//! file, a buffer or a pipe.

use std::io::{self, Write};

use crate::trajectory::Sample;

/// Column header written as the first line of `.dat` output.
pub const DAT_HEADER: &str = "# t theta1 omega1 theta2 omega2 KE1 PE1 KE2 PE2 E_Total";

/// Writes samples as whitespace-separated decimal text with 8 digits after
/// the decimal point, one row per line, preceded by the one-line
/// [`DAT_HEADER`] naming the columns. Gnuplot-friendly.
pub fn write_dat<W, I>(out: &mut W, samples: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    writeln!(out, "{DAT_HEADER}")?;
    for s in samples {
        writeln!(
            out,
            "{:.8} {:.8} {:.8} {:.8} {:.8} {:.8} {:.8} {:.8} {:.8} {:.8}",
            s.t, s.theta1, s.omega1, s.theta2, s.omega2, s.ke1, s.pe1, s.ke2, s.pe2, s.e_total,
        )?;
    }
    Ok(())
}

/// Writes one JSON object per sample per line (JSON Lines).
pub fn write_jsonl<W, I>(out: &mut W, samples: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    for s in samples {
        serde_json::to_writer(&mut *out, &s)?;
        writeln!(out)?;
    }
    Ok(())
}
