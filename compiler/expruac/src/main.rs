//! `exprua`: lex and highlight ExprUA sources from the command line.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use exprua_highlight::{ColorMode, ThemeVariant};
use expruac::commands::{highlight_source, lex_source, load_tables, read_input, tables_json, LexFormat};
use expruac::logging::init_tracing;
use expruac::CliError;

#[derive(Parser)]
#[command(
    name = "exprua",
    about = "Unit-aware lexer and highlighter for ExprUA expressions",
    version
)]
struct Cli {
    /// JSON file with table overrides (keywords, builtins, units, ...)
    #[arg(long, global = true, value_name = "CONFIG")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream
    Lex {
        /// Source file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Emit a JSON array instead of one line per token
        #[arg(long)]
        json: bool,
    },
    /// Print the source with ANSI colors
    Highlight {
        /// Source file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
        /// `light` or `dark`
        #[arg(long, default_value_t = ThemeVariant::Light)]
        theme: ThemeVariant,
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },
    /// Print the effective lookup tables as JSON
    Tables,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let tables = load_tables(cli.tables.as_deref())?;
    let output = match cli.command {
        Command::Lex { input, json } => {
            let format = if json { LexFormat::Json } else { LexFormat::Text };
            lex_source(&read_input(&input)?, &tables, format)?
        }
        Command::Highlight {
            input,
            theme,
            color,
        } => {
            let colors = ColorMode::from(color).should_use_colors(std::io::stdout().is_terminal());
            highlight_source(&read_input(&input)?, &tables, theme.theme(), colors)
        }
        Command::Tables => tables_json(&tables)?,
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
