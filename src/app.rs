use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const TEMPLATE_SUB_NO_ARGS: &'static str = "\
{before-help}
USAGE:
    {usage}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
bidi-mirror is a tool for checking and querying the compiled-in Unicode
Bidi_Mirroring_Glyph table.

The table maps each codepoint with the Bidi_Mirrored=Yes property to another
codepoint that typically has a glyph that is the mirror image of the original
codepoint's glyph. It is stored as a sorted sequence of pairs, which is
searched with a binary search.

Set RUST_LOG=debug to see more of what each command is doing.";

const ABOUT_VERIFY: &'static str = "\
verify checks that the compiled table is strictly ascending by codepoint,
that every mapping has a matching reverse mapping, that no codepoint maps to
itself, that every value is a Unicode scalar value and that the table has the
expected number of entries.

If a UCD directory is given, then its BidiMirroring.txt is parsed and compared
with the table. Mappings that differ, and mappings in the table that the UCD
lacks, are errors. Mappings that the UCD added since the table was generated
are reported, but are only errors when --strict is given.
";

const ABOUT_LOOKUP: &'static str = "\
lookup prints the mirror of each codepoint given. A codepoint may be written
as a hexadecimal number (0028, U+0028 or 0x28) or as a single literal
character.
";

const ABOUT_LIST: &'static str = "\
list prints every mapping in the table, one per line, in ascending order of
codepoint.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    let flag_chars = Arg::with_name("chars").long("chars").help(
        "Also print each codepoint as a character literal. Codepoints that \
         cannot be written as a character literal are printed as-is.",
    );

    // Subcommands.
    let cmd_verify = SubCommand::with_name("verify")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Check the integrity of the compiled table.")
        .before_help(ABOUT_VERIFY)
        .arg(Arg::with_name("ucd-dir").help(
            "Directory containing the Unicode character database files.",
        ))
        .arg(Arg::with_name("strict").long("strict").help(
            "Treat mappings that are in the UCD but not in the table as \
             errors.",
        ));
    let cmd_lookup = SubCommand::with_name("lookup")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Look up the mirror of one or more codepoints.")
        .before_help(ABOUT_LOOKUP)
        .arg(
            Arg::with_name("codepoint")
                .required(true)
                .multiple(true)
                .help("A codepoint to look up."),
        )
        .arg(flag_chars.clone());
    let cmd_list = SubCommand::with_name("list")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB_NO_ARGS)
        .about("Print every mapping in the table.")
        .before_help(ABOUT_LIST)
        .arg(flag_chars.clone());

    // The actual App.
    App::new("bidi-mirror")
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_verify)
        .subcommand(cmd_lookup)
        .subcommand(cmd_list)
}

#[cfg(test)]
mod tests {
    use super::app;

    fn help(subcommand: &str) -> String {
        let err = app()
            .get_matches_from_safe(vec!["bidi-mirror", subcommand, "--help"])
            .unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::HelpDisplayed);
        err.message
    }

    #[test]
    fn list_help_has_no_args_section() {
        let help = help("list");
        assert!(!help.contains("ARGS:"), "{}", help);
        assert!(help.contains("--chars"), "{}", help);
    }

    #[test]
    fn lookup_help_has_args_section() {
        let help = help("lookup");
        assert!(help.contains("ARGS:"), "{}", help);
        assert!(help.contains("<codepoint>..."), "{}", help);
    }
}
