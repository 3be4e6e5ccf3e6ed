use clap::Parser;

/// Commands of the interactive drill.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Deal a question from the current mode", alias = "q")]
    Question,
    #[command(about = "Deal a different question from the current mode", alias = "n")]
    Next,
    #[command(about = "Switch practice mode (comprehensive, value, bluff)", alias = "m")]
    Mode {
        #[arg(required = true)]
        mode: String,
    },
    #[command(about = "Answer the current question: call, fold, or raise <1/3|1/2|2/3|1>", alias = "a")]
    Answer {
        #[arg(required = true)]
        action: String,
        size: Option<String>,
    },
    #[command(about = "Explain an answer to the current question without grading it", alias = "e")]
    Explain {
        #[arg(required = true)]
        action: String,
        size: Option<String>,
    },
    #[command(about = "Show how many scenarios each mode holds", alias = "s")]
    Stats,
}
