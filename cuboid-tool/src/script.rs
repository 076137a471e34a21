//! The script format: one cuboid addition or removal per line.
//!
//! ```text
//! # Comments and blank lines are ignored.
//! on 0,0,0,9,9,9
//! + 5,5,5,14,14,14
//! off 0,0,0,0,9,9
//! 20,20,20,21,21,21
//! ```
//!
//! A line is an optional action word followed by a cuboid in its text form. `on`, `add` and
//! `+` add the cuboid to the region; `off`, `remove` and `-` remove it; with no action word,
//! the cuboid is added.

use std::fmt;
use std::str::FromStr;

use cuboid_algebra::ParseError;
use cuboid_algebra::math::Cuboid;
use cuboid_algebra::set::Cuboids;

/// What an [`Instruction`] does with its cuboid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_enums)]
pub enum Action {
    /// Add the cuboid's points to the region.
    Add,
    /// Remove the cuboid's points from the region.
    Remove,
}

impl Action {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "on" | "add" | "+" => Some(Self::Add),
            "off" | "remove" | "-" => Some(Self::Remove),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Add => "on",
            Action::Remove => "off",
        })
    }
}

/// One line of a [`Script`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct Instruction {
    /// Line number in the script text, counting from 1.
    pub line: usize,
    /// Whether to add or remove the cuboid.
    pub action: Action,
    /// The cuboid to add or remove.
    pub cuboid: Cuboid,
}

/// A parsed script: a sequence of [`Instruction`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Script {
    instructions: Vec<Instruction>,
}

impl Script {
    /// The instructions, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Builds the region the script describes, starting from nothing and applying each
    /// instruction in order.
    pub fn run(&self) -> Cuboids {
        let mut region = Cuboids::new();
        for &Instruction {
            line,
            action,
            cuboid,
        } in &self.instructions
        {
            region = match action {
                Action::Add => region.merge(cuboid),
                Action::Remove => region.remove(cuboid),
            };
            log::debug!(
                "line {line}: {action} {cuboid} -> {count} cuboids",
                count = region.len()
            );
        }
        region
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut instructions = Vec::new();
        for (index, line_text) in text.lines().enumerate() {
            let line = index + 1;
            if let Some((action, cuboid)) =
                parse_line(line_text).map_err(|detail| ScriptError { line, detail })?
            {
                instructions.push(Instruction {
                    line,
                    action,
                    cuboid,
                });
            }
        }
        Ok(Script { instructions })
    }
}

/// Parses one line, returning [`None`] if it is blank or a comment.
fn parse_line(text: &str) -> Result<Option<(Action, Cuboid)>, LineError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (action, cuboid_text) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => match Action::from_word(word) {
            Some(action) => (action, rest),
            None if word.starts_with(|c: char| c.is_ascii_alphabetic()) => {
                return Err(LineError::UnknownAction {
                    word: word.to_owned(),
                });
            }
            // Whitespace inside the cuboid text, such as after a comma.
            None => (Action::Add, text),
        },
        None if text.starts_with(|c: char| c.is_ascii_alphabetic()) => {
            return Err(LineError::MissingCuboid {
                word: text.to_owned(),
            });
        }
        None => (Action::Add, text),
    };
    Ok(Some((action, cuboid_text.parse()?)))
}

/// Error from parsing a [`Script`], identifying the line at fault.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
#[error("invalid instruction on line {line}")]
#[allow(clippy::module_name_repetitions)]
pub struct ScriptError {
    /// Line number, counting from 1.
    pub line: usize,
    /// What was wrong with the line.
    #[source]
    pub detail: LineError,
}

/// Reason a line of a [`Script`] could not be parsed. Always contained in a [`ScriptError`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum LineError {
    /// The line began with a word that is not an action.
    #[non_exhaustive]
    #[error("unknown action {word:?}; expected one of on, add, +, off, remove, -")]
    UnknownAction {
        /// The word found.
        word: String,
    },

    /// The line consisted of a single word and no cuboid.
    #[non_exhaustive]
    #[error("{word:?} is not followed by a cuboid")]
    MissingCuboid {
        /// The word found.
        word: String,
    },

    /// The cuboid text was invalid.
    #[error(transparent)]
    Cuboid(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn c(text: &str) -> Cuboid {
        text.parse().unwrap()
    }

    #[test]
    fn parse_actions_and_comments() {
        let script: Script = "\
            # comment\n\
            on 0,0,0,1,1,1\n\
            \n\
            off 0,0,0,0,0,0\n\
            + 5, 5, 5, 6, 6, 6\n\
            remove 1,1,1,1,1,1\n\
            -1,-1,-1,0,0,0\n\
            - 9,9,9,9,9,9\n\
            add 2,2,2,2,2,2\n\
        "
        .parse()
        .unwrap();
        let summary: Vec<(usize, Action, Cuboid)> = script
            .instructions()
            .iter()
            .map(|i| (i.line, i.action, i.cuboid))
            .collect();
        assert_eq!(
            summary,
            vec![
                (2, Action::Add, c("0,0,0,1,1,1")),
                (4, Action::Remove, c("0,0,0,0,0,0")),
                (5, Action::Add, c("5,5,5,6,6,6")),
                (6, Action::Remove, c("1,1,1,1,1,1")),
                (7, Action::Add, c("-1,-1,-1,0,0,0")),
                (8, Action::Remove, c("9,9,9,9,9,9")),
                (9, Action::Add, c("2,2,2,2,2,2")),
            ]
        );
    }

    #[test]
    fn bare_cuboid_with_spaces() {
        let script: Script = "0, 0, 0, 1, 1, 1".parse().unwrap();
        assert_eq!(script.instructions()[0].action, Action::Add);
        assert_eq!(script.instructions()[0].cuboid, c("0,0,0,1,1,1"));
    }

    #[test]
    fn unknown_action() {
        let error = "on 0,0,0,1,1,1\nflip 0,0,0,1,1,1".parse::<Script>().unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(
            error.detail,
            LineError::UnknownAction {
                word: "flip".to_owned()
            }
        );
        assert_eq!(error.to_string(), "invalid instruction on line 2");
    }

    #[test]
    fn missing_cuboid() {
        let error = "off".parse::<Script>().unwrap_err();
        assert_eq!(error.line, 1);
        assert!(matches!(error.detail, LineError::MissingCuboid { .. }));
    }

    #[test]
    fn bad_cuboid() {
        let error = "\n\non 3,3,3,2,2,2".parse::<Script>().unwrap_err();
        assert_eq!(error.line, 3);
        assert!(matches!(
            error.detail,
            LineError::Cuboid(ParseError::Inverted(_))
        ));
    }

    #[test]
    fn run_builds_region() {
        let script: Script = "\
            on 0,0,0,9,9,9\n\
            on 5,5,5,14,14,14\n\
            off 0,0,0,0,9,9\n\
        "
        .parse()
        .unwrap();
        let region = script.run();
        assert!(region.is_disjoint());
        assert_eq!(region.points_count(), Some(1775));
    }

    #[test]
    fn empty_script() {
        let script: Script = "".parse().unwrap();
        assert!(script.instructions().is_empty());
        assert!(script.run().is_empty());
    }
}
