use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use bidi_mirror::validate::{self, UcdDiff, Violation};
use bidi_mirror::{MirrorEntry, MirroredCharTable, MIRRORED_CHARS_COUNT};
use ucd_parse::{self, BidiMirroring, UcdFile};

use crate::args::ArgMatches;
use crate::error::Result;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let table = MirroredCharTable::unicode();
    let mut stdout = io::stdout();

    let violations =
        validate::check_all(table.as_slice(), Some(MIRRORED_CHARS_COUNT));
    for violation in &violations {
        writeln!(stdout, "violation: {}", violation)?;
    }
    if violations.is_empty() {
        writeln!(stdout, "table: {} entries, OK", table.len())?;
    }
    let mut diff = None;
    if let Some(dir) = args.ucd_dir() {
        let dir = Path::new(dir);
        match ucd_parse::ucd_file_version::<_, BidiMirroring>(dir)? {
            Some((major, minor, patch)) => writeln!(
                stdout,
                "ucd: BidiMirroring.txt version {}.{}.{}",
                major, minor, patch
            )?,
            None => log::warn!(
                "could not find a version in the header of {}",
                BidiMirroring::file_path(dir).display()
            ),
        }
        let rows = ucd_parse::parse_by_codepoint::<_, BidiMirroring>(dir)?;
        log::debug!(
            "parsed {} mappings ({} best fit) from {}",
            rows.len(),
            rows.values().filter(|row| row.best_fit).count(),
            dir.display()
        );
        let ucd: BTreeMap<u32, u32> =
            rows.values().map(BidiMirroring::to_pair).collect();
        let ucd_diff = validate::compare_with_ucd(table.as_slice(), &ucd);
        report(&mut stdout, &ucd_diff)?;
        diff = Some(ucd_diff);
    }
    if failed(&violations, diff.as_ref(), args.is_present("strict")) {
        return err!("verification failed");
    }
    Ok(())
}

/// Decide whether `verify` fails. Changed or missing mappings always fail,
/// while additions only fail in strict mode.
fn failed(
    violations: &[Violation],
    diff: Option<&UcdDiff>,
    strict: bool,
) -> bool {
    if !violations.is_empty() {
        return true;
    }
    match diff {
        None => false,
        Some(diff) if !diff.is_compatible() => true,
        Some(diff) => {
            if strict && !diff.is_empty() {
                log::debug!("--strict: treating additions as errors");
            }
            strict && !diff.is_empty()
        }
    }
}

fn report<W: Write>(mut wtr: W, diff: &UcdDiff) -> io::Result<()> {
    for changed in &diff.changed {
        writeln!(
            wtr,
            "changed: U+{:04X} -> U+{:04X} in table, U+{:04X} in UCD",
            changed.source, changed.table_mirror, changed.ucd_mirror
        )?;
    }
    for &pair in &diff.missing {
        writeln!(wtr, "missing: {}", MirrorEntry::from(pair))?;
    }
    for &pair in &diff.added {
        writeln!(wtr, "added: {}", MirrorEntry::from(pair))?;
    }
    writeln!(
        wtr,
        "ucd: {} changed, {} missing, {} added",
        diff.changed.len(),
        diff.missing.len(),
        diff.added.len()
    )?;
    Ok(())
}
