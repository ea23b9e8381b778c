use std::io::{self, Write};

use crate::{minimizer::Minimizer, sequence::Sequence};

/// Writes one oracle block as paste-ready test fixture text.
///
/// The sequence, a blank line, then one `{value, position, strand},` line per
/// minimizer. The trailing comma lets the block drop straight into an
/// initializer list.
pub fn render<W: Write>(out: &mut W, seq: &Sequence, minimizers: &[Minimizer]) -> io::Result<()> {
    writeln!(out, "{seq}")?;
    writeln!(out)?;
    for m in minimizers {
        writeln!(out, "{m},")?;
    }
    Ok(())
}

/// Renders several blocks, separated by a blank line.
pub fn render_all<'a, W, I>(out: &mut W, blocks: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a Sequence, &'a [Minimizer])>,
{
    for (i, (seq, minimizers)) in blocks.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render(out, seq, minimizers)?;
    }
    out.flush()
}
