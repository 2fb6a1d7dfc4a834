//! # CLI Layer
//!
//! This module is **one possible UI client** for cardpane. It is the only
//! place that knows about stdin/stdout/stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: top-level flags via clap (`setup::Cli`)
//! 2. **Context Setup**: load config, install logging, build the `CardApi`,
//!    start the card feed
//! 3. **Line Loop**: split each input line with `shell-words`, parse it as a
//!    `setup::LineCommand`, dispatch to the API. A `search` line keeps its
//!    pattern verbatim so regex escapes survive
//! 4. **Output Formatting**: turn `CmdResult` into terminal output
//!
//! Pending feed cards are ingested before every line, so each command sees
//! every card delivered before it.
//!
//! An error on one line is printed and the loop continues. In script mode
//! the process exits non-zero at the end if any line failed.

mod render;
mod setup;

use cardpane::api::{CardApi, CmdResult};
use cardpane::config::CardpaneConfig;
use cardpane::error::{CardError, Result};
use cardpane::ingest::{spawn_json_lines, CardFeed};
use cardpane::logging;
use clap::Parser;
use render::{print_cards, print_facets, print_full_cards, print_messages, print_move};
use setup::{search_pattern, Cli, Commands, Line, LineCommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use std::thread::JoinHandle;

struct AppContext {
    api: CardApi,
    feed: Option<CardFeed>,
    producer: Option<JoinHandle<usize>>,
    line_width: usize,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CardpaneConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_filter, cli.verbose);
    if cli.no_seed {
        config.seed_sample_card = false;
    }

    let mut ctx = init_context(&cli, &config)?;

    match cli.command {
        Some(Commands::Run { script }) => run_script(&mut ctx, &script),
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run_lines(&mut ctx, stdin.lock(), interactive).map(|_| ())
        }
    }
}

fn init_context(cli: &Cli, config: &CardpaneConfig) -> Result<AppContext> {
    let api = CardApi::from_config(config)?;

    let (feed, producer) = match &cli.feed {
        Some(path) => {
            let file = File::open(path)?;
            let (feed, handle) = spawn_json_lines(BufReader::new(file));
            tracing::debug!(path = %path.display(), "card feed started");
            (Some(feed), Some(handle))
        }
        None => (None, None),
    };

    Ok(AppContext {
        api,
        feed,
        producer,
        line_width: config.line_width,
    })
}

/// Runs a script file. The feed file is read to the end first so the result
/// does not depend on thread timing.
fn run_script(ctx: &mut AppContext, script: &Path) -> Result<()> {
    if let Some(handle) = ctx.producer.take() {
        let delivered = handle
            .join()
            .map_err(|_| CardError::Api("card feed thread panicked".to_string()))?;
        tracing::debug!(delivered, "card feed read before script");
    }

    let file = File::open(script)?;
    let failures = run_lines(ctx, BufReader::new(file), false)?;
    if failures > 0 {
        return Err(CardError::Api(format!("{} command(s) failed", failures)));
    }
    Ok(())
}

/// Feeds each line to the dispatcher. Returns the number of failed lines.
fn run_lines<R: BufRead>(ctx: &mut AppContext, reader: R, prompt: bool) -> Result<usize> {
    let mut failures = 0;
    let mut lines = reader.lines();

    loop {
        drain_feed(ctx);
        if prompt {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match handle_line(ctx, trimmed) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    drain_feed(ctx);
    Ok(failures)
}

fn drain_feed(ctx: &mut AppContext) {
    let Some(feed) = &ctx.feed else {
        return;
    };
    match ctx.api.drain(feed) {
        Ok(result) if !result.affected_cards.is_empty() || !result.messages.is_empty() => {
            print_messages(&result.messages);
        }
        Ok(_) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let search = search_pattern(line);
    let words = match search {
        Some(_) => vec!["search".to_string()],
        None => shell_words::split(line)
            .map_err(|e| CardError::Api(format!("Could not parse line: {}", e)))?,
    };

    let parsed = match Line::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            print!("{}", e);
            return Ok(Flow::Continue);
        }
        Err(e) => return Err(CardError::Api(e.to_string().trim_end().to_string())),
    };

    match parsed.command {
        LineCommand::List => handle_list(ctx),
        LineCommand::Show { id } => handle_show(ctx, id),
        LineCommand::Search => handle_search(ctx, search.unwrap_or_default()),
        LineCommand::Facet { name } => handle_facet(ctx, &name),
        LineCommand::Facets => handle_facets(ctx),
        LineCommand::Sort { mode } => handle_sort(ctx, &mode.join(" ")),
        LineCommand::Move { direction, id } => handle_move(ctx, &direction, id),
        LineCommand::Up { id } => handle_move(ctx, "up", id),
        LineCommand::Down { id } => handle_move(ctx, "down", id),
        LineCommand::Select { id } => handle_select(ctx, id),
        LineCommand::Selected => handle_selected(ctx),
        LineCommand::Delete { id } => handle_delete(ctx, id),
        LineCommand::Ingest { json } => handle_ingest(ctx, &json),
        LineCommand::Quit => return Ok(Flow::Quit),
    }?;

    Ok(Flow::Continue)
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    print_cards(
        &result.listed_cards,
        &ctx.api.session().selection,
        ctx.line_width,
    );
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_listing(ctx, &result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.show(id)?;
    print_full_cards(&result.affected_cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, pattern: &str) -> Result<()> {
    let result = ctx.api.search(pattern)?;
    print_listing(ctx, &result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_facet(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.toggle_facet(name)?;
    print_messages(&result.messages);
    print_listing(ctx, &result);
    Ok(())
}

fn handle_facets(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    if let Some(facets) = &result.facets {
        print_facets(facets);
    }
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, label: &str) -> Result<()> {
    let result = ctx.api.sort(label)?;
    print_messages(&result.messages);
    print_listing(ctx, &result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, direction: &str, id: u64) -> Result<()> {
    let result = ctx.api.move_card(direction, id)?;
    print_messages(&result.messages);
    if let Some(outcome) = &result.moved {
        print_move(outcome);
    }
    Ok(())
}

fn handle_select(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.toggle_selection(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_selected(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.selected()?;
    let ids: Vec<String> = result.selected.iter().map(|id| id.to_string()).collect();
    if ids.is_empty() {
        println!("Nothing selected.");
    } else {
        println!("selected: {}", ids.join(" "));
    }
    print_listing(ctx, &result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_ingest(ctx: &mut AppContext, json: &str) -> Result<()> {
    let result = ctx.api.ingest_json(json)?;
    print_messages(&result.messages);
    Ok(())
}
