//! Line-oriented terminal prompts.
//!
//! Questions are asked over any `BufRead`/`Write` pair so the shell can be
//! driven from a pipe in tests the same way it is driven from a terminal.

use crate::domain::models::{Answers, Question, QuestionKind};
use std::io::{BufRead, Write};

#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    #[error("Prompts require an interactive terminal.")]
    InputClosed,
    #[error("prompt i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every question in order and collect the accepted values.
    pub fn ask_all(&mut self, questions: &[Question]) -> Result<Answers, PromptError> {
        let mut answers = Answers::new();
        for q in questions {
            let value = self.ask(q)?;
            answers.insert(q.name.clone(), value);
        }
        Ok(answers)
    }

    /// Ask until the answer passes the question's validator.
    pub fn ask(&mut self, q: &Question) -> Result<String, PromptError> {
        loop {
            let value = match q.kind {
                QuestionKind::Input => self.ask_input(q)?,
                QuestionKind::List => match self.ask_list(q)? {
                    Some(v) => v,
                    None => continue,
                },
                QuestionKind::Confirm => match self.ask_confirm(q)? {
                    Some(yes) => if yes { "yes" } else { "no" }.to_string(),
                    None => continue,
                },
            };
            match q.validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => writeln!(self.output, ">> {}", message)?,
            }
        }
    }

    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.ask(&Question::confirm("confirm", message, default))?;
        Ok(answer == "yes")
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn or_default(q: &Question, raw: String) -> String {
        match (&q.default, raw.is_empty()) {
            (Some(d), true) => d.clone(),
            _ => raw,
        }
    }

    fn ask_input(&mut self, q: &Question) -> Result<String, PromptError> {
        match &q.default {
            Some(d) => write!(self.output, "? {} ({}) ", q.message, d)?,
            None => write!(self.output, "? {} ", q.message)?,
        }
        let raw = self.read_line()?;
        Ok(Self::or_default(q, raw))
    }

    fn ask_list(&mut self, q: &Question) -> Result<Option<String>, PromptError> {
        writeln!(self.output, "? {}", q.message)?;
        for (i, choice) in q.choices.iter().enumerate() {
            let marker = if q.default.as_deref() == Some(choice.as_str()) {
                " (default)"
            } else {
                ""
            };
            writeln!(self.output, "  {}) {}{}", i + 1, choice, marker)?;
        }
        write!(self.output, "  Answer: ")?;
        let raw = Self::or_default(q, self.read_line()?);

        let picked = match raw.parse::<usize>() {
            Ok(n) if n >= 1 => q.choices.get(n - 1).cloned(),
            _ => q.choices.iter().find(|c| **c == raw).cloned(),
        };
        if picked.is_none() {
            writeln!(self.output, ">> Please pick one of the listed options.")?;
        }
        Ok(picked)
    }

    fn ask_confirm(&mut self, q: &Question) -> Result<Option<bool>, PromptError> {
        let default_yes = q.default.as_deref() == Some("yes");
        let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
        write!(self.output, "? {} {} ", q.message, hint)?;
        let raw = self.read_line()?.to_ascii_lowercase();
        let answer = match raw.as_str() {
            "" => Some(default_yes),
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        };
        if answer.is_none() {
            writeln!(self.output, ">> Please answer yes or no.")?;
        }
        Ok(answer)
    }
}
