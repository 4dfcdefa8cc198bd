//! Argument groups shared by `matrix` and `solve`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use mazepath_lib::{generator_for, CellGrid, GeneratorAlgorithm, GoalPolicy};

/// Generation strategy as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    PureRecursive,
    RecursiveTree,
    RandomTree,
    OldestTree,
    RecursiveDivision,
}

impl From<AlgorithmArg> for GeneratorAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::PureRecursive => GeneratorAlgorithm::PureRecursive,
            AlgorithmArg::RecursiveTree => GeneratorAlgorithm::RecursiveTree,
            AlgorithmArg::RandomTree => GeneratorAlgorithm::RandomTree,
            AlgorithmArg::OldestTree => GeneratorAlgorithm::OldestTree,
            AlgorithmArg::RecursiveDivision => GeneratorAlgorithm::RecursiveDivision,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GoalPolicyArg {
    /// First goal cell in row-major order.
    #[default]
    First,
    /// Goal cell closest to the start.
    Nearest,
    /// Fail when more than one cell is flagged as goal.
    Reject,
}

impl From<GoalPolicyArg> for GoalPolicy {
    fn from(value: GoalPolicyArg) -> Self {
        match value {
            GoalPolicyArg::First => GoalPolicy::First,
            GoalPolicyArg::Nearest => GoalPolicy::Nearest,
            GoalPolicyArg::Reject => GoalPolicy::Reject,
        }
    }
}

/// Generator settings, used by `generate` directly and as the fallback
/// source for `matrix` and `solve`.
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Number of cell rows.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Number of cell columns.
    #[arg(long, default_value_t = 10)]
    pub columns: usize,

    /// Seed for the generator's random number generator.
    #[arg(long, default_value_t = 12345)]
    pub seed: u64,

    /// Generation algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::PureRecursive)]
    pub algorithm: AlgorithmArg,
}

impl GenerationArgs {
    pub fn generate(&self) -> Result<CellGrid> {
        let algorithm = GeneratorAlgorithm::from(self.algorithm);
        generator_for(algorithm)
            .generate(self.rows, self.columns, self.seed)
            .with_context(|| {
                format!(
                    "failed to generate a {}x{} maze with {algorithm}",
                    self.rows, self.columns
                )
            })
    }
}

/// Where the cell grid comes from: a JSON file or the generator.
#[derive(Args, Debug, Clone)]
pub struct MazeSourceArgs {
    /// Load the cell grid from a JSON file instead of generating one.
    #[arg(long, conflicts_with_all = ["rows", "columns", "seed", "algorithm"])]
    pub grid: Option<PathBuf>,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

impl MazeSourceArgs {
    pub fn load(&self) -> Result<CellGrid> {
        match &self.grid {
            Some(path) => {
                debug!(path = %path.display(), "loading cell grid");
                CellGrid::load(path)
                    .with_context(|| format!("failed to load cell grid from {}", path.display()))
            }
            None => self.generation.generate(),
        }
    }
}

/// Goal selection flags.
#[derive(Args, Debug, Clone, Copy)]
pub struct GoalArgs {
    /// How to choose among several goal cells.
    #[arg(long, value_enum, default_value_t = GoalPolicyArg::First)]
    pub goal_policy: GoalPolicyArg,

    /// Do not stamp a goal into the matrix.
    #[arg(long)]
    pub no_goal_marker: bool,
}

impl GoalArgs {
    pub fn goal_marker(&self) -> bool {
        !self.no_goal_marker
    }

    pub fn policy(&self) -> GoalPolicy {
        self.goal_policy.into()
    }
}
