use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use knowledge::builtin::istqb_foundation;
use qa_core::model::Tier;
use services::{Clock, QuizAdvance, QuizService, SessionError};

#[derive(Debug)]
enum ArgsError {
    MissingName { command: &'static str },
    UnexpectedArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingName { command } => write!(f, "{command} requires a name"),
            ArgsError::UnexpectedArg(arg) => write!(f, "unexpected argument: {arg}"),
            ArgsError::UnknownCommand(arg) => write!(f, "unknown command: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- categories");
    eprintln!("  cargo run -p app -- topics <category>");
    eprintln!("  cargo run -p app -- show <topic>");
    eprintln!("  cargo run -p app -- quiz <category>");
    eprintln!();
    eprintln!("Category and topic names may be given unquoted; remaining");
    eprintln!("arguments are joined with spaces.");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Categories,
    Topics { name: String },
    Show { name: String },
    Quiz { name: String },
}

impl Command {
    fn parse(mut argv: Vec<String>) -> Result<Self, ArgsError> {
        if argv.is_empty() {
            // Default behavior: list categories when no command is provided.
            return Ok(Self::Categories);
        }
        let command = argv.remove(0);
        let name = argv.join(" ");

        match command.as_str() {
            "categories" => {
                if !name.is_empty() {
                    return Err(ArgsError::UnexpectedArg(name));
                }
                Ok(Self::Categories)
            }
            "topics" if name.is_empty() => Err(ArgsError::MissingName { command: "topics" }),
            "topics" => Ok(Self::Topics { name }),
            "show" if name.is_empty() => Err(ArgsError::MissingName { command: "show" }),
            "show" => Ok(Self::Show { name }),
            "quiz" if name.is_empty() => Err(ArgsError::MissingName { command: "quiz" }),
            "quiz" => Ok(Self::Quiz { name }),
            _ => Err(ArgsError::UnknownCommand(command)),
        }
    }
}

fn option_letter(index: usize) -> char {
    char::from(b'A' + u8::try_from(index).unwrap_or(0))
}

/// Maps a typed answer to an option index: A-D (any case) or 1-4.
///
/// Invalid input never reaches the session; the prompt simply repeats.
fn parse_choice(input: &str) -> Option<usize> {
    match input.trim() {
        "a" | "A" | "1" => Some(0),
        "b" | "B" | "2" => Some(1),
        "c" | "C" | "3" => Some(2),
        "d" | "D" | "4" => Some(3),
        _ => None,
    }
}

fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "Excellent! You have a strong understanding of this topic.",
        Tier::Moderate => "Good job! You have a decent grasp of the concepts.",
        Tier::NeedsReview => "You might want to review this topic again.",
    }
}

fn list_categories(service: &QuizService) {
    for category in service.store().categories() {
        let marker = if service.store().questions(category.name()).is_empty() {
            ""
        } else {
            "  [quiz]"
        };
        println!("{}{marker}", category.name());
    }
}

fn list_topics(service: &QuizService, name: &str) {
    let topics = service.store().topics(name);
    if topics.is_empty() {
        // Lookup miss is a normal "nothing to show" case.
        println!("No topics found for {name:?}.");
        return;
    }
    for topic in topics {
        println!("{topic}");
    }
}

fn run_quiz(service: &QuizService, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = match service.start_quiz(name) {
        Ok(session) => session,
        Err(SessionError::Empty) => {
            println!("No quiz available for {name:?}.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let view = session.current_question()?;
        println!();
        println!("Question {} of {}: {}", view.number(), view.total, view.prompt);
        for (index, option) in view.options.iter().enumerate() {
            println!("  {}. {option}", option_letter(index));
        }

        let selected = loop {
            print!("Answer [A-D]: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                // Abandoning mid-quiz has no side effects to undo.
                println!();
                println!("Quiz abandoned.");
                return Ok(());
            };
            match parse_choice(&line?) {
                Some(index) => break index,
                None => println!("Please answer with A, B, C, D or 1-4."),
            }
        };

        let outcome = service.answer_current(&mut session, selected)?;
        if outcome.is_correct {
            println!("Correct!");
        } else {
            println!(
                "Incorrect. The correct answer was {}.",
                option_letter(outcome.correct_index)
            );
        }

        match service.advance_current(&mut session)? {
            QuizAdvance::Next(_) => {}
            QuizAdvance::Completed(summary) => {
                println!();
                println!("You scored {} out of {}.", summary.score(), summary.total());
                println!("{}", tier_message(summary.tier()));
                return Ok(());
            }
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if matches!(argv.first().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let command = Command::parse(argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    // The corpus is compiled in; building it validates every entry up front.
    let store = Arc::new(istqb_foundation()?);
    let service = QuizService::new(Clock::default_clock(), store);

    match command {
        Command::Categories => list_categories(&service),
        Command::Topics { name } => list_topics(&service, &name),
        Command::Show { name } => println!("{}", service.store().content(&name)),
        Command::Quiz { name } => run_quiz(&service, &name)?,
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parsing_accepts_letters_and_digits() {
        assert_eq!(parse_choice(" b "), Some(1));
        assert_eq!(parse_choice("D"), Some(3));
        assert_eq!(parse_choice("4"), Some(3));
        assert_eq!(parse_choice("e"), None);
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn command_parsing_joins_multi_word_names() {
        let command = Command::parse(
            ["quiz", "Test", "Levels"].map(String::from).to_vec(),
        )
        .unwrap();
        assert_eq!(
            command,
            Command::Quiz {
                name: "Test Levels".into()
            }
        );
    }

    #[test]
    fn no_arguments_defaults_to_categories() {
        assert_eq!(Command::parse(Vec::new()).unwrap(), Command::Categories);
    }

    #[test]
    fn command_parsing_rejects_missing_and_unknown() {
        assert!(matches!(
            Command::parse(vec!["topics".into()]).unwrap_err(),
            ArgsError::MissingName { command: "topics" }
        ));
        assert!(matches!(
            Command::parse(vec!["frobnicate".into()]).unwrap_err(),
            ArgsError::UnknownCommand(_)
        ));
        assert!(matches!(
            Command::parse(vec!["categories".into(), "extra".into()]).unwrap_err(),
            ArgsError::UnexpectedArg(_)
        ));
    }
}
