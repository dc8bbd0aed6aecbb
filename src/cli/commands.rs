use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fingerprint and deduplicate the results of a SARIF file
    Dedup(DedupArgs),

    /// Show per-rule duplicate counts without modifying anything
    Stats(StatsArgs),
}

#[derive(clap::Args, Debug)]
pub struct DedupArgs {
    /// Input SARIF file ("-" for stdin)
    pub input: PathBuf,

    /// Output SARIF file ("-" for stdout). Defaults to stdout
    #[arg(conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite the input file instead of writing elsewhere
    #[arg(short, long)]
    pub in_place: bool,

    /// Emit compact JSON instead of pretty-printed (2-space indent)
    #[arg(long)]
    pub compact: bool,
}

impl DedupArgs {
    /// Resolve where the deduplicated document goes
    pub fn output_path(&self) -> PathBuf {
        if self.in_place {
            self.input.clone()
        } else {
            self.output.clone().unwrap_or_else(|| PathBuf::from("-"))
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Input SARIF file ("-" for stdin)
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_stdout() {
        let args = DedupArgs {
            input: PathBuf::from("in.sarif"),
            output: None,
            in_place: false,
            compact: false,
        };
        assert_eq!(args.output_path(), PathBuf::from("-"));
    }

    #[test]
    fn in_place_targets_the_input() {
        let args = DedupArgs {
            input: PathBuf::from("in.sarif"),
            output: None,
            in_place: true,
            compact: false,
        };
        assert_eq!(args.output_path(), PathBuf::from("in.sarif"));
    }
}
