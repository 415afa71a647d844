//! Console commands accepted while a realtime match runs.
//!
//! One command per line: `pause`, `resume`, `p` (toggle), `speed <x>`,
//! `rematch`, `menu`, `quit`.

use thiserror::Error;

use boxclash_core::commands::MatchCommand;

use crate::state::LoopCommand;

/// Reasons a console line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("unknown command `{0}`, try pause, resume, p, speed <x>, rematch, menu or quit")]
    Unknown(String),
    #[error("`speed` needs a number, got `{0}`")]
    BadSpeed(String),
}

/// Parse one console line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<LoopCommand>, ConsoleError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "pause" => LoopCommand::Match(MatchCommand::Pause),
        "resume" => LoopCommand::Match(MatchCommand::Resume),
        "p" => LoopCommand::Match(MatchCommand::TogglePause),
        "rematch" | "r" => LoopCommand::Match(MatchCommand::Rematch),
        "menu" => LoopCommand::Match(MatchCommand::ReturnToMenu),
        "quit" | "q" | "exit" => LoopCommand::Shutdown,
        "speed" => {
            let arg = words.next().unwrap_or_default();
            let scale = arg
                .trim_end_matches('x')
                .parse::<f64>()
                .map_err(|_| ConsoleError::BadSpeed(arg.to_string()))?;
            if !scale.is_finite() {
                return Err(ConsoleError::BadSpeed(arg.to_string()));
            }
            LoopCommand::Match(MatchCommand::SetTimeScale { scale })
        }
        other => return Err(ConsoleError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(
            parse_line("pause").unwrap(),
            Some(LoopCommand::Match(MatchCommand::Pause))
        );
        assert_eq!(
            parse_line("  P ").unwrap(),
            Some(LoopCommand::Match(MatchCommand::TogglePause))
        );
        assert_eq!(
            parse_line("rematch").unwrap(),
            Some(LoopCommand::Match(MatchCommand::Rematch))
        );
        assert_eq!(parse_line("quit").unwrap(), Some(LoopCommand::Shutdown));
        assert_eq!(parse_line("").unwrap(), None);
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(
            parse_line("speed 2").unwrap(),
            Some(LoopCommand::Match(MatchCommand::SetTimeScale { scale: 2.0 }))
        );
        assert_eq!(
            parse_line("speed 0.5x").unwrap(),
            Some(LoopCommand::Match(MatchCommand::SetTimeScale { scale: 0.5 }))
        );
        assert_eq!(
            parse_line("speed fast"),
            Err(ConsoleError::BadSpeed("fast".into()))
        );
        assert_eq!(parse_line("speed"), Err(ConsoleError::BadSpeed(String::new())));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("launch"),
            Err(ConsoleError::Unknown("launch".into()))
        );
    }
}
