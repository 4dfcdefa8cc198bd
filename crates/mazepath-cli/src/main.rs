mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mazepath_cli::output::OutputFormat;
use mazepath_cli::terminal::ColorPalette;

use commands::generate::handle_generate;
use commands::matrix::handle_matrix;
use commands::solve::{handle_solve, SolveOptions};
use commands::source::{GenerationArgs, GoalArgs, MazeSourceArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze generation, traversability matrices and A* solving")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a cell grid and print it as JSON or save it to a file.
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Write the grid to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the traversability matrix of a maze.
    Matrix {
        #[command(flatten)]
        source: MazeSourceArgs,

        #[command(flatten)]
        goal: GoalArgs,
    },
    /// Find the shortest path from start to goal and print its moves.
    Solve {
        #[command(flatten)]
        source: MazeSourceArgs,

        #[command(flatten)]
        goal: GoalArgs,

        /// Stop the search after expanding this many cells.
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Also print the matrix, with the path drawn over it.
        #[arg(long)]
        show_matrix: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::resolve(cli.no_color);

    match cli.command {
        Command::Generate { generation, output } => {
            handle_generate(&generation, output.as_ref(), cli.format)
        }
        Command::Matrix { source, goal } => handle_matrix(&source, &goal, cli.format, &palette),
        Command::Solve {
            source,
            goal,
            max_expansions,
            show_matrix,
        } => handle_solve(
            &source,
            &goal,
            SolveOptions {
                max_expansions,
                show_matrix,
            },
            cli.format,
            &palette,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
