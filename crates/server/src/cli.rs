//! Interactive terminal drill.
//!
//! Deals questions, grades answers, and prints explanations through the same
//! [`API`] the HTTP server uses.
use crate::*;
use clap::Parser;
use gtl_core::QuestionId;
use gtl_dto::ApiJudgment;
use gtl_dto::ApiQuestion;
use gtl_scenarios::Mode;
use std::io::BufRead;
use std::io::Write;

pub struct CLI {
    api: API,
    mode: Mode,
    current: Option<QuestionId>,
}

impl From<API> for CLI {
    fn from(api: API) -> Self {
        Self {
            api,
            mode: Mode::default(),
            current: None,
        }
    }
}

impl CLI {
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering drill ({} mode)", self.mode);
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let Some(input) = lines.next().transpose()? else {
                break;
            };
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(&input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
        Ok(())
    }

    /// Executes one command line and returns what to print.
    pub fn handle(&mut self, input: &str) -> Result<String, Box<dyn std::error::Error>> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Question => {
                let question = self.api.fetch(self.mode)?;
                self.current = Some(question.id);
                Ok(render(&question))
            }
            Query::Next => {
                let question = match self.current {
                    Some(current) => self.api.fetch_next(current, self.mode)?,
                    None => self.api.fetch(self.mode)?,
                };
                self.current = Some(question.id);
                Ok(render(&question))
            }
            Query::Mode { mode } => {
                self.mode = API::mode(Some(&mode))?;
                self.current = None;
                Ok(format!("mode: {}", self.mode))
            }
            Query::Answer { action, size } => {
                let id = self.current.ok_or("no question dealt yet; try `question`")?;
                let judgment = self.api.judge(id, &action, size.as_deref())?;
                Ok(verdict(&ApiJudgment::from(&judgment)))
            }
            Query::Explain { action, size } => {
                let id = self.current.ok_or("no question dealt yet; try `question`")?;
                Ok(self.api.explain(id, &action, size.as_deref())?)
            }
            Query::Stats => Ok(self
                .api
                .store()
                .modes()
                .iter()
                .map(|(mode, n)| format!(" - {:<14} {}", mode, n))
                .collect::<Vec<String>>()
                .join("\n")),
        }
    }
}

fn render(question: &ApiQuestion) -> String {
    let history = [
        ("preflop", &question.action_history.preflop),
        ("flop", &question.action_history.flop),
        ("turn", &question.action_history.turn),
        ("river", &question.action_history.river),
    ]
    .into_iter()
    .filter(|(_, plays)| !plays.is_empty())
    .map(|(street, plays)| format!("  {:<8} {}", street, plays.join(", ")))
    .collect::<Vec<String>>();
    let stacks = question
        .stacks
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    [
        format!("#{} [{}] {} on the {}", question.id, question.mode, question.position, question.stage),
        format!("  hole     {}", question.hole_cards.join(" ")),
        format!("  board    {}", question.board.join(" ")),
        format!("  pot      {}bb", question.pot),
        format!("  stacks   {}", stacks),
    ]
    .into_iter()
    .chain(history)
    .collect::<Vec<String>>()
    .join("\n")
}

fn verdict(judgment: &ApiJudgment) -> String {
    let mark = match judgment.is_correct {
        2 => "✓",
        1 => "~",
        _ => "✗",
    };
    format!("{} {}\n{}", mark, judgment.user_action, judgment.explanation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtl_scenarios::Policy;
    use gtl_scenarios::Store;

    fn cli() -> CLI {
        CLI::from(API::from(Store::sample(Policy::RoundRobin).unwrap()))
    }

    #[test]
    fn answer_requires_a_question() {
        assert!(cli().handle("answer fold").is_err());
    }
    #[test]
    fn deal_then_answer() {
        let mut cli = cli();
        let dealt = cli.handle("question").unwrap();
        assert!(dealt.starts_with("#1 [comprehensive] BTN on the preflop"));
        let graded = cli.handle("a raise 1/2").unwrap();
        assert!(graded.starts_with("✓ raise12"));
    }
    #[test]
    fn switching_mode_forgets_the_question() {
        let mut cli = cli();
        cli.handle("q").unwrap();
        assert!(cli.handle("mode bluff").unwrap() == "mode: bluff");
        assert!(cli.handle("e fold").is_err());
        assert!(cli.handle("n").unwrap().starts_with("#3 [bluff]"));
    }
    #[test]
    fn rejects_unknown_commands() {
        assert!(cli().handle("shuffle").is_err());
        assert!(cli().handle("mode tournament").is_err());
    }
}
