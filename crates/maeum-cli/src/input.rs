//! Parsing of interactive commands.

use std::path::PathBuf;
use std::str::FromStr;

use maeum_core::persona::PersonaId;
use maeum_core::{MaeumError, Result};
use strum::IntoEnumIterator;

/// Every command the interactive session understands, with a short usage.
pub const COMMANDS: [(&str, &str); 12] = [
    ("/start", "시작하기"),
    ("/add", "<path>... 그림 추가 (최대 4장, 공백은 따옴표로)"),
    ("/remove", "<n> n번째 그림 빼기"),
    ("/list", "고른 그림 보기"),
    ("/next", "캐릭터 고르기로 넘어가기"),
    ("/personas", "캐릭터 목록"),
    ("/select", "<1-4|이름|key> 캐릭터 고르기"),
    ("/confirm", "분석 시작"),
    ("/reset", "처음으로 돌아가기"),
    ("/status", "현재 단계 보기"),
    ("/help", "도움말"),
    ("/quit", "끝내기"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Start,
    Add(Vec<PathBuf>),
    /// Zero-based index
    Remove(usize),
    List,
    Next,
    Personas,
    Select(PersonaId),
    Confirm,
    Reset,
    Status,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = MaeumError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "/start" => Ok(ReplCommand::Start),
            "/add" => {
                let paths = parse_paths(rest)?;
                if paths.is_empty() {
                    return Err(MaeumError::invalid_input("Usage: /add <path>..."));
                }
                Ok(ReplCommand::Add(paths))
            }
            "/remove" => parse_position(rest).map(ReplCommand::Remove),
            "/list" => Ok(ReplCommand::List),
            "/next" => Ok(ReplCommand::Next),
            "/personas" => Ok(ReplCommand::Personas),
            "/select" => parse_persona(rest).map(ReplCommand::Select),
            "/confirm" => Ok(ReplCommand::Confirm),
            "/reset" => Ok(ReplCommand::Reset),
            "/status" => Ok(ReplCommand::Status),
            "/help" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "quit" | "exit" => Ok(ReplCommand::Quit),
            other => Err(MaeumError::invalid_input(format!(
                "Unknown command: {}",
                other
            ))),
        }
    }
}

/// Splits path arguments the way a shell would, so `"my drawing.png"` stays one path.
fn parse_paths(args: &str) -> Result<Vec<PathBuf>> {
    let words = shell_words::split(args)
        .map_err(|e| MaeumError::invalid_input(format!("Could not read paths: {}", e)))?;
    Ok(words.into_iter().map(PathBuf::from).collect())
}

/// Parses a 1-based position as shown by `/list`.
fn parse_position(arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(MaeumError::invalid_input("Usage: /remove <n> (1부터 시작)")),
    }
}

/// Accepts a catalog number (1-4), a display name or a key.
pub fn parse_persona(arg: &str) -> Result<PersonaId> {
    if arg.is_empty() {
        return Err(MaeumError::invalid_input("Usage: /select <1-4|이름|key>"));
    }
    if let Ok(n) = arg.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| PersonaId::iter().nth(i))
            .ok_or_else(|| MaeumError::invalid_input(format!("No persona number {}", n)));
    }
    arg.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ReplCommand {
        line.parse().unwrap()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("/start"), ReplCommand::Start);
        assert_eq!(parse("  /next  "), ReplCommand::Next);
        assert_eq!(parse("quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_add_paths() {
        let command = parse("/add a.png  drawings/b.jpg");
        assert_eq!(
            command,
            ReplCommand::Add(vec![PathBuf::from("a.png"), PathBuf::from("drawings/b.jpg")])
        );
        assert!("/add".parse::<ReplCommand>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_add_keeps_quoted_path_with_spaces() {
        let command = parse(r#"/add "my drawing.png" 'sun 2.jpg' c.png"#);
        assert_eq!(
            command,
            ReplCommand::Add(vec![
                PathBuf::from("my drawing.png"),
                PathBuf::from("sun 2.jpg"),
                PathBuf::from("c.png"),
            ])
        );

        let command = parse(r"/add my\ drawing.png");
        assert_eq!(
            command,
            ReplCommand::Add(vec![PathBuf::from("my drawing.png")])
        );

        let err = r#"/add "unterminated.png"#.parse::<ReplCommand>().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_remove_is_one_based() {
        assert_eq!(parse("/remove 1"), ReplCommand::Remove(0));
        assert!("/remove 0".parse::<ReplCommand>().is_err());
        assert!("/remove x".parse::<ReplCommand>().is_err());
    }

    #[test]
    fn test_select_by_number_name_or_key() {
        assert_eq!(parse_persona("1").unwrap(), PersonaId::Pepe);
        assert_eq!(parse_persona("4").unwrap(), PersonaId::Shasha);
        assert!(parse_persona("5").is_err());
        assert!(parse_persona("0").is_err());
        assert_eq!(parse_persona("pico").unwrap(), PersonaId::Pico);
        assert_eq!(
            parse("/select 현실친구 라봉이"),
            ReplCommand::Select(PersonaId::Labong)
        );
        assert!(parse_persona("").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = "/dance".parse::<ReplCommand>().unwrap_err();
        assert!(err.is_invalid_input());
    }
}
