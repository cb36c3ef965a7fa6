// ══════════════════════════════════════════════════════════════════════════════
// STATUSLINE CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Emits a single status line from the shell, e.g. for build scripts:
//
//   statusline --app deploy --caller migrate error "schema drift detected"
//
// Exit status is 1 when the line could not be written (closed pipe, full disk).
// There is nowhere left to report that failure, so nothing else is printed.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use statusline::{Clock, Paint, StatusKind, StatusReporter, Stream};

/// Timestamped status lines for scripts and tools
#[derive(Parser)]
#[command(name = "statusline")]
#[command(version)]
#[command(about = "Print a timestamped status line", long_about = None)]
struct Cli {
	/// Application name shown before the severity label
	#[arg(short, long, global = true)]
	app: Option<String>,

	/// Calling context, shown as `in 'CALLER'`
	#[arg(short, long, global = true)]
	caller: Option<String>,

	/// Colorize the timestamp and severity label when writing to a terminal
	#[arg(long, global = true)]
	color: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Report execution progress on stdout
	#[command(visible_aliases = ["exec", "info"])]
	Execution {
		/// Message body (may be empty)
		#[arg(allow_hyphen_values = true)]
		message: String,
	},

	/// Report a warning on stderr
	#[command(visible_alias = "warn")]
	Warning {
		#[arg(allow_hyphen_values = true)]
		message: String,
	},

	/// Report an error on stderr
	#[command(visible_alias = "err")]
	Error {
		#[arg(allow_hyphen_values = true)]
		message: String,
	},
}

impl Commands {
	fn split(&self) -> (StatusKind, &str) {
		match self {
			Commands::Execution { message } => (StatusKind::Execution, message),
			Commands::Warning { message } => (StatusKind::Warning, message),
			Commands::Error { message } => (StatusKind::Error, message),
		}
	}
}

/// Exit status for one report: 0 when the line was written, 1 otherwise.
fn run<O: Write, E: Write, C: Clock>(reporter: &mut StatusReporter<O, E, C>, cli: &Cli) -> u8 {
	let (kind, message) = cli.command.split();
	match reporter.report(kind, message, cli.caller.as_deref(), cli.app.as_deref()) {
		Ok(_) => 0,
		Err(_) => 1,
	}
}

/// `--color` only applies when the line's own stream is a terminal.
fn choose_paint(color: bool, on_terminal: bool) -> Paint {
	if color && on_terminal { Paint::Colored } else { Paint::Plain }
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	let on_terminal = match cli.command.split().0.stream() {
		Stream::Stdout => io::stdout().is_terminal(),
		Stream::Stderr => io::stderr().is_terminal(),
	};

	let mut reporter = StatusReporter::stdio().with_paint(choose_paint(cli.color, on_terminal));
	ExitCode::from(run(&mut reporter, &cli))
}
