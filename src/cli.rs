use clap::{Parser, Subcommand};
use ghx::RepositoryId;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a repository and add it to the dashboard.
    Search {
        /// Repository to search for, in `:owner/:name` format.
        query: String,
    },
    /// Print the dashboard, previously searched repositories.
    Ls {},
    /// Print details of a previously searched repository.
    Show {
        /// Repository identifier.
        repo: RepositoryId,
    },
}

pub fn cmd() -> Cli {
    Cli::parse()
}
