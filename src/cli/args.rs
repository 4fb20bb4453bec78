//! Argument groups shared by several subcommands

use clap::Args;

/// Origin and destination of a path query
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Node to start from
    pub from: String,

    /// Node to reach
    pub to: String,
}

/// Optional start node for single-source walks
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Node to start from (defaults to the alphabetically first node)
    #[arg(long, short)]
    pub start: Option<String>,
}
