//! Interactive TaskLedger shell.
//!
//! # Responsibility
//! - Act as the presentation layer over `taskledger_core::TaskSession`.
//! - Turn stdin lines into intents and re-render the view after changes.

mod command;
mod render;

use clap::Parser;
use command::{parse_command, Command, HELP_TEXT};
use log::{info, warn};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use taskledger_core::{
    core_version, default_log_level, init_logging, IntentOutcome, StoreChange, StoreSnapshot,
    TaskSession,
};

#[derive(Parser, Debug)]
#[command(
    name = "taskledger",
    version,
    about = "Personal task tracker with added/deleted history",
    long_about = None
)]
struct Cli {
    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<String>,

    /// Print each rendered view as a JSON line.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok version={} json={}",
        core_version(),
        cli.json
    );

    match run(&cli, io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut session = TaskSession::new();
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    session.subscribe(move |_: &StoreChange, _: &StoreSnapshot<'_>| flag.set(true));

    if !cli.json {
        writeln!(out, "taskledger {} (type `help`)", core_version())?;
    }
    draw(cli, out, &session)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
            Ok(Command::Show) => draw(cli, out, &session)?,
            Ok(Command::Intent(intent)) => {
                let outcome = session.apply(intent);
                let view_changed = matches!(outcome, IntentOutcome::ViewSelected { .. });
                if dirty.replace(false) || view_changed {
                    draw(cli, out, &session)?;
                }
            }
            Err(err) => {
                warn!("event=command_parse module=cli status=error");
                eprintln!("{err}");
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn draw(cli: &Cli, out: &mut impl Write, session: &TaskSession) -> io::Result<()> {
    let projection = session.render();
    if cli.json {
        render::render_json(out, &projection)
    } else {
        render::render_text(out, &projection)
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli};
    use std::io::Cursor;

    fn run_script(json: bool, script: &str) -> String {
        let cli = Cli {
            log_level: None,
            log_dir: None,
            json,
        };
        let mut out = Vec::new();
        run(&cli, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn script_walks_full_lifecycle() {
        let output = run_script(false, "add Buy milk\ndelete 1\nview deleted\npurge 1\nquit\n");
        assert!(output.contains("#1 Buy milk  (delete 1)"));
        assert!(output.contains("#1 Buy milk  (purge 1)"));
        assert!(output.trim_end().ends_with("No items deleted yet"));
    }

    #[test]
    fn ignored_intents_do_not_redraw() {
        let output = run_script(true, "add   \ndelete 7\n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn json_mode_emits_one_line_per_render() {
        let output = run_script(true, "add a\nview added\nshow\n");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        let last: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(last["view"], "added");
    }
}
