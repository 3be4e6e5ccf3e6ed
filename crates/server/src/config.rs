use clap::Args;
use clap::Parser;
use clap::ValueEnum;
use gtl_scenarios::Policy;
use gtl_scenarios::Store;
use std::path::PathBuf;

/// Scenario selection policy as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    RoundRobin,
    Random,
}

/// Where scenarios come from and how they are served.
#[derive(Debug, Clone, Args)]
pub struct DeckArgs {
    /// JSON deck of scenarios; the built-in sample deck when absent
    #[arg(long, env = "DECK_PATH")]
    pub deck: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Selection::RoundRobin)]
    pub policy: Selection,
    /// Seed for random selection
    #[arg(long, default_value_t = gtl_core::DEFAULT_SEED)]
    pub seed: u64,
}

impl DeckArgs {
    pub fn policy(&self) -> Policy {
        match self.policy {
            Selection::RoundRobin => Policy::RoundRobin,
            Selection::Random => Policy::Random { seed: self.seed },
        }
    }
    pub fn store(&self) -> anyhow::Result<Store> {
        match self.deck {
            Some(ref path) => Store::from_path(path, self.policy()),
            None => {
                log::info!("no deck given, serving the sample deck");
                Store::sample(self.policy())
            }
        }
    }
}

/// Server configuration: flags first, then environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "GTO learner judging server", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = gtl_core::DEFAULT_BIND_ADDR)]
    pub bind: String,
    /// HTTP worker threads
    #[arg(long, default_value_t = gtl_core::DEFAULT_WORKERS)]
    pub workers: usize,
    #[command(flatten)]
    pub deck: DeckArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from([
            "backend",
            "--bind",
            "0.0.0.0:9000",
            "--policy",
            "random",
            "--seed",
            "7",
        ])
        .unwrap();
        assert!(config.bind == "0.0.0.0:9000");
        assert!(config.deck.policy() == Policy::Random { seed: 7 });
    }
    #[test]
    fn rejects_unknown_policy() {
        assert!(Config::try_parse_from(["backend", "--policy", "weighted"]).is_err());
    }
}
