//! Validated line input.
//!
//! A [`Prompter`] writes a prompt, reads one line, trims it, and checks it
//! against a [`Pattern`]. Rejected answers get a corrective message and
//! the same prompt again, up to the configured retry budget. A line that
//! is not valid UTF-8 is rejected the same way.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_RETRIES;
use crate::error::{CreationError, CreationResult};

/// A named acceptance rule for prompt answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Letters, spaces, dashes or underscores; at least three characters,
    /// the first a letter.
    Alpha,
    /// A single `M` or `F`, either case.
    Sex,
    /// A single `N`, `L` or `Q`, either case.
    Menu,
    /// One or more ASCII digits.
    Integer,
}

static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();

fn patterns() -> &'static [Regex; 4] {
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^[A-Za-z][A-Za-z\-_ ][A-Za-z\-_ ]+$").expect("valid alpha regex"),
            Regex::new(r"^[FfMm]$").expect("valid sex regex"),
            Regex::new(r"^[LlNnQq]$").expect("valid menu regex"),
            Regex::new(r"^[0-9]+$").expect("valid integer regex"),
        ]
    })
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        let index = match self {
            Self::Alpha => 0,
            Self::Sex => 1,
            Self::Menu => 2,
            Self::Integer => 3,
        };
        &patterns()[index]
    }

    /// Returns true if `text` is an acceptable answer.
    pub fn matches(self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// The message shown after a rejected answer.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Alpha => "Enter only letters, spaces, dashes or underscores:",
            Self::Sex => "Enter M or F.",
            Self::Menu => "Enter N, L or Q.",
            Self::Integer => "Enter only numbers.",
        }
    }
}

/// Asks questions on an output stream and reads answers from an input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_retries: Option<u32>,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter with the default retry budget.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: Some(DEFAULT_MAX_RETRIES),
            line: Vec::new(),
        }
    }

    /// Set the retry budget; `None` re-asks forever.
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Everything written so far.
    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    /// Write one line of text.
    pub fn say(&mut self, text: impl Display) -> CreationResult<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask until the answer matches `pattern`, then return it trimmed.
    pub fn validate(&mut self, prompt: &str, pattern: Pattern) -> CreationResult<String> {
        self.ask(prompt, pattern, |text| Ok(text.to_string()))
    }

    /// Ask until the answer matches `pattern` and `accept` takes it.
    ///
    /// `accept` sees the trimmed text and returns either the parsed value
    /// or the message to show before asking again. Both kinds of rejection
    /// count against the same retry budget.
    pub fn ask<T, F>(&mut self, prompt: &str, pattern: Pattern, mut accept: F) -> CreationResult<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        let mut retries = 0u32;
        loop {
            let rejection = match self.read_answer(prompt)? {
                Some(answer) if pattern.matches(&answer) => match accept(&answer) {
                    Ok(value) => return Ok(value),
                    Err(message) => {
                        debug!(prompt = prompt.trim(), answer = %answer, "answer not accepted");
                        message
                    }
                },
                Some(answer) => {
                    debug!(prompt = prompt.trim(), answer = %answer, ?pattern, "answer rejected");
                    pattern.hint().to_string()
                }
                None => {
                    debug!(prompt = prompt.trim(), ?pattern, "answer is not valid UTF-8");
                    pattern.hint().to_string()
                }
            };
            self.say(rejection)?;

            retries += 1;
            if self.max_retries.is_some_and(|max| retries > max) {
                warn!(prompt = prompt.trim(), retries, "giving up on prompt");
                return Err(CreationError::RetriesExhausted {
                    prompt: prompt.trim().to_string(),
                    attempts: retries,
                });
            }
        }
    }

    /// Write the prompt and read one line, trimmed.
    ///
    /// Returns `None` when the line is not valid UTF-8.
    fn read_answer(&mut self, prompt: &str) -> CreationResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Err(CreationError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(std::str::from_utf8(&self.line)
            .ok()
            .map(|text| text.trim().to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use super::*;

    pub(crate) type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    /// A prompter fed with the given answers, one per line.
    pub(crate) fn scripted(answers: &[&str]) -> TestPrompter {
        let mut text = answers.join("\n");
        text.push('\n');
        Prompter::new(Cursor::new(text.into_bytes()), Vec::new())
    }

    pub(crate) fn transcript(prompter: &TestPrompter) -> String {
        String::from_utf8_lossy(prompter.output()).into_owned()
    }

    #[test]
    fn alpha_rules() {
        assert!(Pattern::Alpha.matches("Kaelith"));
        assert!(Pattern::Alpha.matches("Jo Ann"));
        assert!(Pattern::Alpha.matches("al-Rashid_the Bold"));
        assert!(Pattern::Alpha.matches("Abc"));
        assert!(!Pattern::Alpha.matches("Al"));
        assert!(!Pattern::Alpha.matches("-Bob"));
        assert!(!Pattern::Alpha.matches(" Bob"));
        assert!(!Pattern::Alpha.matches("R2D2"));
        assert!(!Pattern::Alpha.matches(""));
    }

    #[test]
    fn sex_rules() {
        for ok in ["m", "M", "f", "F"] {
            assert!(Pattern::Sex.matches(ok));
        }
        for bad in ["x", "male", "MF", ""] {
            assert!(!Pattern::Sex.matches(bad));
        }
    }

    #[test]
    fn menu_rules() {
        for ok in ["n", "N", "l", "L", "q", "Q"] {
            assert!(Pattern::Menu.matches(ok));
        }
        for bad in ["new", "x", "nl", ""] {
            assert!(!Pattern::Menu.matches(bad));
        }
    }

    #[test]
    fn integer_rules() {
        assert!(Pattern::Integer.matches("0"));
        assert!(Pattern::Integer.matches("130"));
        assert!(!Pattern::Integer.matches("-3"));
        assert!(!Pattern::Integer.matches("12.5"));
        assert!(!Pattern::Integer.matches("ten"));
        assert!(!Pattern::Integer.matches(""));
    }

    #[test]
    fn validate_returns_trimmed_text_with_case_kept() {
        let mut p = scripted(&["   Kaelith Moon  "]);
        assert_eq!(p.validate("Your name: ", Pattern::Alpha).unwrap(), "Kaelith Moon");
        assert_eq!(transcript(&p), "Your name: ");
    }

    #[test]
    fn validate_reprompts_until_valid() {
        let mut p = scripted(&["x1", "", "F"]);
        assert_eq!(p.validate("(M)ale or (F)emale: ", Pattern::Sex).unwrap(), "F");
        let out = transcript(&p);
        assert_eq!(out.matches("(M)ale or (F)emale: ").count(), 3);
        assert_eq!(out.matches("Enter M or F.").count(), 2);
    }

    #[test]
    fn ask_shows_acceptor_message() {
        let mut p = scripted(&["7", "8"]);
        let value = p
            .ask("Pick: ", Pattern::Integer, |text| {
                let n: u32 = text.parse().map_err(|_| "bad".to_string())?;
                if n % 2 == 0 {
                    Ok(n)
                } else {
                    Err("Pick an even number".to_string())
                }
            })
            .unwrap();
        assert_eq!(value, 8);
        assert_eq!(transcript(&p), "Pick: Pick an even number\nPick: ");
    }

    #[test]
    fn retries_are_bounded() {
        let mut p = scripted(&["a", "b", "c", "M"]).with_max_retries(Some(2));
        let err = p.validate("Sex: ", Pattern::Sex).unwrap_err();
        match err {
            CreationError::RetriesExhausted { prompt, attempts } => {
                assert_eq!(prompt, "Sex:");
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unbounded_retries_survive_long_invalid_streams() {
        let mut answers = vec!["nope"; 5000];
        answers.push("q");
        let mut p = scripted(&answers).with_max_retries(None);
        assert_eq!(p.validate("> ", Pattern::Menu).unwrap(), "q");
    }

    #[test]
    fn non_utf8_line_is_reasked() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'M', b'\n']);
        let mut p = Prompter::new(input, Vec::new());
        assert_eq!(p.validate("Sex: ", Pattern::Sex).unwrap(), "M");
        assert_eq!(transcript(&p), "Sex: Enter M or F.\nSex: ");
    }

    #[test]
    fn non_utf8_lines_use_the_retry_budget() {
        let input = Cursor::new(b"\xc3\n\xff\nF\n".to_vec());
        let mut p = Prompter::new(input, Vec::new()).with_max_retries(Some(1));
        let err = p.validate("Sex: ", Pattern::Sex).unwrap_err();
        assert!(matches!(err, CreationError::RetriesExhausted { attempts: 2, .. }));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = scripted(&["zz"]);
        let err = p.validate("Age: ", Pattern::Integer).unwrap_err();
        assert!(matches!(err, CreationError::InputClosed { ref prompt } if prompt == "Age:"));
    }
}
