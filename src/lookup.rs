use std::char;
use std::io::{self, Write};

use bidi_mirror::{mirror_of, MirroredCharTable};

use crate::args::ArgMatches;
use crate::error::Result;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let chars = args.chars();
    let mut stdout = io::stdout();
    for cp in args.codepoints()? {
        let label = codepoint_label(cp, chars);
        match mirror_of(cp) {
            Some(mirror) => writeln!(
                stdout,
                "{} -> {}",
                label,
                codepoint_label(mirror, chars)
            )?,
            None => writeln!(stdout, "{} -> (not mirrored)", label)?,
        }
    }
    Ok(())
}

pub fn command_list(args: ArgMatches<'_>) -> Result<()> {
    let chars = args.chars();
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    for entry in MirroredCharTable::unicode() {
        writeln!(
            wtr,
            "{} -> {}",
            codepoint_label(entry.source, chars),
            codepoint_label(entry.mirror, chars)
        )?;
    }
    wtr.flush()?;
    Ok(())
}

fn codepoint_label(cp: u32, chars: bool) -> String {
    let label = format!("U+{:04X}", cp);
    match char::from_u32(cp) {
        Some(c) if chars => format!("{} {:?}", label, c),
        _ => label,
    }
}

#[cfg(test)]
mod tests {
    use super::codepoint_label;

    #[test]
    fn labels() {
        assert_eq!(codepoint_label(0x28, false), "U+0028");
        assert_eq!(codepoint_label(0x28, true), "U+0028 '('");
        assert_eq!(codepoint_label(0x1D6DB, false), "U+1D6DB");
        assert_eq!(codepoint_label(0xD800, true), "U+D800");
    }
}
