//! Parsing of terminal input lines.

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Plain chat text
    Say(String),
    /// `/start`: ask the room to draw the santa
    Start,
    /// `/name <name>`
    Name(String),
    /// `/room <room>`
    Room(String),
    /// `/who`: print the roster
    Who,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type /help for the list)")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  <text>        send a chat message
  /start        draw the santa among the participants
  /name <name>  change your display name
  /room <room>  leave this room and join another one
  /who          list the participants
  /quit         leave the chat";

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<UserCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if !line.starts_with('/') {
        return Ok(Some(UserCommand::Say(line.to_string())));
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    let parsed = match command {
        "/start" => UserCommand::Start,
        "/name" => UserCommand::Name(required(argument, "/name")?),
        "/room" => UserCommand::Room(required(argument, "/room")?),
        "/who" => UserCommand::Who,
        "/help" => UserCommand::Help,
        "/quit" | "/exit" => UserCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(parsed))
}

fn required(argument: &str, command: &'static str) -> Result<String, CommandError> {
    if argument.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(argument.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        // テスト項目: スラッシュで始まらない入力はチャット本文になる
        // when (操作):
        let result = parse("  hello santa  ");

        // then (期待する結果): 前後の空白は取り除かれる
        assert_eq!(result, Ok(Some(UserCommand::Say("hello santa".to_string()))));
    }

    #[test]
    fn test_parse_blank_line() {
        // テスト項目: 空行は何もしない
        // when (操作):
        let result = parse("   ");

        // then (期待する結果):
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_parse_commands() {
        // テスト項目: 各コマンドが解釈される
        // then (期待する結果):
        assert_eq!(parse("/start"), Ok(Some(UserCommand::Start)));
        assert_eq!(parse("/who"), Ok(Some(UserCommand::Who)));
        assert_eq!(parse("/help"), Ok(Some(UserCommand::Help)));
        assert_eq!(parse("/quit"), Ok(Some(UserCommand::Quit)));
        assert_eq!(parse("/exit"), Ok(Some(UserCommand::Quit)));
    }

    #[test]
    fn test_parse_command_with_argument() {
        // テスト項目: 引数付きコマンドは引数の前後の空白を取り除く
        // when (操作):
        let name = parse("/name   Alice Smith ");
        let room = parse("/room north-pole");

        // then (期待する結果):
        assert_eq!(name, Ok(Some(UserCommand::Name("Alice Smith".to_string()))));
        assert_eq!(room, Ok(Some(UserCommand::Room("north-pole".to_string()))));
    }

    #[test]
    fn test_parse_missing_argument() {
        // テスト項目: 引数が必要なコマンドに引数がなければエラー
        // when (操作):
        let result = parse("/name");

        // then (期待する結果):
        assert_eq!(result, Err(CommandError::MissingArgument("/name")));
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のコマンドはエラー
        // when (操作):
        let result = parse("/dance now");

        // then (期待する結果):
        assert_eq!(result, Err(CommandError::Unknown("/dance".to_string())));
    }
}
