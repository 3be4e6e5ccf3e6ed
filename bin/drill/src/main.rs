//! Interactive Drill Binary
//!
//! Practice GTO decisions in the terminal, graded exactly as the server would.
use clap::Parser;
use gtl_server::API;
use gtl_server::CLI;
use gtl_server::DeckArgs;

#[derive(Parser)]
#[command(author, version, about = "Interactive GTO decision drill", long_about = None)]
struct Args {
    /// Practice mode to start in
    #[arg(long, default_value = "comprehensive")]
    mode: String,
    #[command(flatten)]
    deck: DeckArgs,
}

fn main() -> anyhow::Result<()> {
    gtl_core::log();
    let args = Args::parse();
    let mode = API::mode(Some(&args.mode))?;
    CLI::from(API::from(args.deck.store()?))
        .with_mode(mode)
        .run()
}
