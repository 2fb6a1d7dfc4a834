use cardpane::model::CardId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardpane", bin_name = "cardpane", version)]
#[command(about = "An ordered, filterable pane of source-and-output cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a cardpane.toml (defaults to the OS config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON-lines file of cards to ingest, one card per line
    #[arg(long, global = true, value_name = "PATH")]
    pub feed: Option<PathBuf>,

    /// Start without the sample card
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read commands interactively from stdin (the default)
    Shell,

    /// Run commands from a script file, one per line
    Run {
        /// Script path
        script: PathBuf,
    },
}

/// One line of input in the shell or a script.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Subcommand, Debug)]
pub enum LineCommand {
    /// List the visible cards
    #[command(alias = "ls")]
    List,

    /// Show one card with its outputs
    #[command(alias = "v")]
    Show { id: CardId },

    /// Set the search pattern (a case-insensitive regex); no pattern clears it.
    /// The rest of the line is taken verbatim, without shell-style quoting.
    Search,

    /// Toggle an output facet: text, rich or error
    Facet { name: String },

    /// Show facet state
    Facets,

    /// Sort by: Oldest, Newest, "Alphabetical: A-Z", "Alphabetical: Z-A", Custom
    Sort {
        #[arg(required = true, num_args = 1..)]
        mode: Vec<String>,
    },

    /// Move a card: move <up|down> <id>
    Move { direction: String, id: CardId },

    /// Move a card up one place
    Up { id: CardId },

    /// Move a card down one place
    Down { id: CardId },

    /// Toggle a card's selection
    Select { id: CardId },

    /// List selected cards
    Selected,

    /// Delete a card
    #[command(alias = "rm")]
    Delete { id: CardId },

    /// Ingest a card given as JSON
    Ingest { json: String },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// The raw pattern of a `search` line: everything after the command word,
/// leading whitespace trimmed. `None` when the line is some other command.
pub fn search_pattern(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("search")?;
    if rest.is_empty() {
        return Some("");
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> LineCommand {
        let words = shell_words::split(line).unwrap();
        Line::try_parse_from(words).unwrap().command
    }

    #[test]
    fn sort_label_words_are_collected() {
        match parse("sort Alphabetical: A-Z") {
            LineCommand::Sort { mode } => assert_eq!(mode.join(" "), "Alphabetical: A-Z"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn search_without_pattern_clears() {
        assert!(matches!(parse("search"), LineCommand::Search));
        assert_eq!(search_pattern("search"), Some(""));
        assert_eq!(search_pattern("  search   "), Some(""));
    }

    #[test]
    fn search_pattern_is_taken_verbatim() {
        assert_eq!(search_pattern(r"search ^x\d$"), Some(r"^x\d$"));
        assert_eq!(search_pattern("search #include"), Some("#include"));
        assert_eq!(search_pattern("search it's -x  two  spaces"), Some("it's -x  two  spaces"));
    }

    #[test]
    fn other_commands_have_no_search_pattern() {
        assert_eq!(search_pattern("list"), None);
        assert_eq!(search_pattern("searchy foo"), None);
        assert_eq!(search_pattern("select 1"), None);
    }

    #[test]
    fn ingest_takes_quoted_json() {
        match parse(r#"ingest '{"id":1,"title":"t","sourceCode":""}'"#) {
            LineCommand::Ingest { json } => assert!(json.starts_with('{')),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn aliases_work() {
        assert!(matches!(parse("ls"), LineCommand::List));
        assert!(matches!(parse("rm 3"), LineCommand::Delete { id: 3 }));
    }

    #[test]
    fn top_level_flags() {
        let cli = Cli::try_parse_from(["cardpane", "--no-seed", "run", "script.txt"]).unwrap();
        assert!(cli.no_seed);
        assert!(matches!(cli.command, Some(Commands::Run { .. })));
    }
}
