use clap::Parser;

/// Backdrop: pick hero background photos without immediate repeats.
#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. "debug", "backdrop_picker=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of selections: one initial load followed by refreshes.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Seed the random source for a reproducible query sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective config as JSON (API key redacted) and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
