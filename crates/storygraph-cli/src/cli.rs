use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storygraph_domain::{EdgeDirection, Grouping};

#[derive(Parser)]
#[command(name = "storygraph")]
#[command(about = "Render story dependencies as a Graphviz DOT graph", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch stories from the tracker and render the graph
    Fetch(FetchArgs),
    /// Render the graph from already-fetched JSON files
    Render(RenderFileArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct FetchArgs {
    /// API token (or set CLUBHOUSE_API_TOKEN)
    #[arg(long, env = "CLUBHOUSE_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Comma-separated project names to include; all projects when omitted
    #[arg(long, value_delimiter = ',')]
    pub projects: Option<Vec<String>>,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args)]
pub struct RenderFileArgs {
    /// JSON file holding the fetched story collection
    #[arg(long, value_name = "FILE")]
    pub stories: PathBuf,

    /// JSON file holding the fetched project collection
    #[arg(long, value_name = "FILE")]
    pub projects: PathBuf,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args)]
pub struct GraphArgs {
    /// Display name for the graph
    #[arg(long, default_value = "All Projects")]
    pub name: String,

    /// Direction dependency edges are drawn in
    #[arg(long, value_enum, default_value_t = EdgeArg::Forward)]
    pub edges: EdgeArg,

    /// How nodes are grouped for rank alignment
    #[arg(long, value_enum, default_value_t = GroupingArg::FlatRank)]
    pub grouping: GroupingArg,

    /// Sink completed stories to one end of the rank axis
    #[arg(long)]
    pub sink_completed: bool,

    /// Write the DOT document to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EdgeArg {
    /// blocker -> { everything it blocks }
    Forward,
    /// one blocker -> blocked statement per edge
    Backward,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupingArg {
    /// Invisible rank=same cluster per rank
    FlatRank,
    /// Labeled project clusters with per-project rank groups
    ProjectRank,
}

impl From<EdgeArg> for EdgeDirection {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Forward => EdgeDirection::Forward,
            EdgeArg::Backward => EdgeDirection::Backward,
        }
    }
}

impl From<GroupingArg> for Grouping {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::FlatRank => Grouping::FlatRank,
            GroupingArg::ProjectRank => Grouping::ProjectRank,
        }
    }
}
