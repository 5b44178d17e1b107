use std::io::{self, BufRead, Write};

use super::RenamePair;

pub const PROMPT_USAGE: &str = "\
y  yes, move this file
n  no, skip this file
a  move this file and assume 'yes' as the answer to all subsequent prompts
q  quit the program without moving this file
?  show this help message
";

/// A reply to the move prompt, judged by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    All,
    Quit,
    Help,
}

impl Answer {
    pub fn parse(line: &str) -> Self {
        match line.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => Self::Yes,
            Some('n') => Self::No,
            Some('a') => Self::All,
            Some('q') => Self::Quit,
            _ => Self::Help,
        }
    }
}

/// What to do with one planned move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Move,
    Skip,
    Quit,
}

/// Asks before each move until told to stop asking.
pub struct Confirmer<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Confirmer<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    pub fn assumes_yes(&self) -> bool {
        self.assume_yes
    }

    /// Prompts for `pair` until a decisive answer arrives. End of input means quit.
    pub fn confirm(&mut self, pair: &RenamePair) -> io::Result<Decision> {
        if self.assume_yes {
            return Ok(Decision::Move);
        }

        let mut line = String::new();
        loop {
            write!(
                self.output,
                "mv {} {}? [y/n/a/q/?] ",
                pair.source, pair.destination
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input at prompt");
                return Ok(Decision::Quit);
            }

            match Answer::parse(&line) {
                Answer::Yes => return Ok(Decision::Move),
                Answer::No => return Ok(Decision::Skip),
                Answer::All => {
                    self.assume_yes = true;
                    return Ok(Decision::Move);
                }
                Answer::Quit => return Ok(Decision::Quit),
                Answer::Help => self.output.write_all(PROMPT_USAGE.as_bytes())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pair() -> RenamePair {
        RenamePair {
            source: "a1".into(),
            destination: "b1".into(),
        }
    }

    fn confirmer(input: &str) -> Confirmer<Cursor<Vec<u8>>, Vec<u8>> {
        Confirmer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn parses_answers_by_first_character() {
        assert_eq!(Answer::parse("yes\n"), Answer::Yes);
        assert_eq!(Answer::parse("  N"), Answer::No);
        assert_eq!(Answer::parse("all"), Answer::All);
        assert_eq!(Answer::parse("quit"), Answer::Quit);
        assert_eq!(Answer::parse("?"), Answer::Help);
        assert_eq!(Answer::parse(""), Answer::Help);
        assert_eq!(Answer::parse("maybe"), Answer::Help);
    }

    #[test]
    fn yes_and_no_decide_once() {
        let mut c = confirmer("y\nn\n");
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Move);
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Skip);
        assert!(!c.assumes_yes());
    }

    #[test]
    fn all_stops_further_prompts() {
        let mut c = confirmer("a\n");
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Move);
        assert!(c.assumes_yes());
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Move);

        let shown = String::from_utf8(c.output).unwrap();
        assert_eq!(shown.matches("? [y/n/a/q/?] ").count(), 1);
    }

    #[test]
    fn help_reprompts() {
        let mut c = confirmer("?\nq\n");
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Quit);

        let shown = String::from_utf8(c.output).unwrap();
        assert!(shown.contains(PROMPT_USAGE));
        assert_eq!(shown.matches("mv a1 b1? [y/n/a/q/?] ").count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let mut c = confirmer("");
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Quit);
    }

    #[test]
    fn assume_yes_never_reads_input() {
        let mut c = Confirmer::new(Cursor::new(Vec::new()), Vec::new(), true);
        assert_eq!(c.confirm(&pair()).unwrap(), Decision::Move);
        assert!(c.output.is_empty());
    }
}
