use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use givemeasong::{cli, config, logging, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a song link and show its links on every platform
    Resolve(ResolveOptions),

    /// Show a song by its id
    Song(SongOptions),

    /// Paste song links interactively
    Search,

    /// List known platforms and how they are displayed
    Platforms,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Song link from any supported platform
    pub url: String,

    /// Print the song record as JSON
    #[clap(long)]
    pub json: bool,

    /// Open the link for this platform in the browser (e.g. spotify)
    #[clap(long)]
    pub open: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SongOptions {
    /// Song id as returned by resolve
    pub id: String,

    /// Print the song record as JSON
    #[clap(long)]
    pub json: bool,

    /// Open the link for this platform in the browser (e.g. spotify)
    #[clap(long)]
    pub open: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env_loaded = config::load_env().await;
    logging::init_logging(cli.verbose);
    if let Err(e) = env_loaded {
        warning!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Resolve(opt) => cli::resolve(opt.url, opt.json, opt.open).await,
        Command::Song(opt) => cli::song(opt.id, opt.json, opt.open).await,
        Command::Search => cli::search().await,
        Command::Platforms => cli::platforms(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
