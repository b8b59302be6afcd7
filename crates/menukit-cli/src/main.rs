mod cmd;
mod output;
mod skinfile;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "menukit",
    about = "Skinnable menu shell — registry, layout, and rendering for fixed-height CLI menus",
    version,
    propagate_version = true
)]
struct Cli {
    /// Skin file(s) to load, in activation order (later files take priority)
    #[arg(long = "skin", global = true, value_name = "FILE")]
    skins: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a menu into the fixed frame
    Render {
        /// Menu id to resolve and render
        menu_id: String,

        /// Total frame height in rows
        #[arg(long)]
        height: Option<usize>,

        /// Rows reserved for the command prompt
        #[arg(long)]
        textbox_lines: Option<usize>,

        /// Minimum breathing room between content and prompt
        #[arg(long)]
        padding: Option<usize>,

        /// Don't clear the screen before painting
        #[arg(long)]
        no_clear: bool,

        /// Print the layout plan instead of rendering
        #[arg(long)]
        plan: bool,
    },

    /// List all available menu ids (core plus active skins)
    Menus,

    /// Show active skins in priority order
    Skins {
        /// Replace the activation order (comma-separated skin names)
        #[arg(long, value_delimiter = ',')]
        priority: Option<Vec<String>>,
    },

    /// Validate a menu or skin YAML file
    Validate { file: PathBuf },

    /// Interactive menu session on stdin
    Session {
        /// Menu to start from
        #[arg(long, default_value = "main")]
        start: String,

        /// Don't clear the screen between menus
        #[arg(long)]
        no_clear: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Session { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render {
            menu_id,
            height,
            textbox_lines,
            padding,
            no_clear,
            plan,
        } => cmd::render::run(
            &cli.skins,
            &menu_id,
            cmd::render::Options {
                height,
                textbox_lines,
                padding,
                no_clear,
                plan,
                json: cli.json,
            },
        ),
        Commands::Menus => cmd::menus::run(&cli.skins, cli.json),
        Commands::Skins { priority } => cmd::skins::run(&cli.skins, priority.as_deref(), cli.json),
        Commands::Validate { file } => cmd::validate::run(&file, cli.json),
        Commands::Session { start, no_clear } => cmd::session::run(&cli.skins, &start, no_clear),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
