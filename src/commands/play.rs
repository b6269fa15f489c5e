//! @acp:module "Play Command"
//! @acp:summary "Serve questions from the shuffled working cycle"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::session::Session;
use crate::config::Config;
use crate::selection::Question;

/// Options for the play command
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Number of questions to serve
    pub count: usize,
    /// Seed for a reproducible session
    pub seed: Option<u64>,
    /// Print answers under each question
    pub reveal: bool,
    /// Output as JSON
    pub json: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
            reveal: false,
            json: false,
        }
    }
}

/// Execute the play command
pub fn execute_play(options: PlayOptions, config: Config) -> Result<()> {
    let mut session = Session::open(config, options.seed)?;

    if session.engine.active_generator_count() == 0 {
        session.report_no_active();
        std::process::exit(1);
    }

    let mut questions: Vec<Question> = Vec::with_capacity(options.count);
    for _ in 0..options.count {
        questions.push(session.engine.next_question()?);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    for (i, question) in questions.iter().enumerate() {
        println!(
            "{} {}",
            style(format!("{}.", i + 1)).bold(),
            question.prompt
        );
        for (letter, choice) in ('a'..='z').zip(&question.choices) {
            println!("   {}) {}", letter, choice);
        }
        if options.reveal {
            println!(
                "   {} {}",
                style("→").cyan(),
                style(&question.answer).green()
            );
        }
        println!(
            "   {}",
            style(format!("[{}]", question.generator_id)).dim()
        );
    }

    Ok(())
}
