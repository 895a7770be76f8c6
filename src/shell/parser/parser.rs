use log::warn;

use super::ast::CommandRecord;
use super::lexer::{Lexer, RedirectOp, Token};
use crate::shell::error::ShellError;

/// 单条命令最多允许的 argv 长度（含命令名）
pub const MAX_ARGS: usize = 64;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    fn next_token(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    pub fn parse_command(&mut self) -> Result<CommandRecord, ShellError> {
        let mut record = CommandRecord::default();

        loop {
            match &self.current_token {
                Token::EOF => break,
                Token::Redirect(op) => {
                    let op = *op;
                    self.parse_redirection(op, &mut record);
                }
                Token::Word(word) => {
                    if record.arguments.len() == MAX_ARGS {
                        return Err(ShellError::TooManyArguments { limit: MAX_ARGS });
                    }
                    if record.command.is_none() {
                        record.command = Some(word.clone());
                    }
                    record.arguments.push(word.clone());
                    self.next_token();
                }
            }
        }

        Ok(record)
    }

    // 后面没有文件名时直接丢掉该重定向，不报错；同类重定向后者覆盖前者
    fn parse_redirection(&mut self, operator: RedirectOp, record: &mut CommandRecord) {
        self.next_token(); // 跳过重定向操作符

        let filename = match &self.current_token {
            Token::Word(filename) => filename.clone(),
            _ => {
                warn!("重定向 {:?} 缺少文件名，已忽略", operator);
                return;
            }
        };
        self.next_token();

        match operator {
            RedirectOp::Input => record.input_file = Some(filename),
            RedirectOp::Output => record.output_file = Some(filename),
        }
    }
}

pub fn parse(line: &str) -> Result<CommandRecord, ShellError> {
    Parser::new(line).parse_command()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_simple_command() {
        let record = parse("ls -l").unwrap();
        assert_eq!(record.command.as_deref(), Some("ls"));
        assert_eq!(record.arguments, words(&["ls", "-l"]));
        assert_eq!(record.input_file, None);
        assert_eq!(record.output_file, None);
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_both_redirections() {
        let record = parse("sort < in.txt > out.txt").unwrap();
        assert_eq!(record.command.as_deref(), Some("sort"));
        assert_eq!(record.arguments, words(&["sort"]));
        assert_eq!(record.input_file.as_deref(), Some("in.txt"));
        assert_eq!(record.output_file.as_deref(), Some("out.txt"));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_redirection_before_command() {
        let record = parse("> out.txt echo hi").unwrap();
        assert_eq!(record.command.as_deref(), Some("echo"));
        assert_eq!(record.arguments, words(&["echo", "hi"]));
        assert_eq!(record.output_file.as_deref(), Some("out.txt"));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_blank_lines() {
        for line in ["", " ", "      "] {
            let record = parse(line).unwrap();
            assert_eq!(record.command, None);
            assert!(record.arguments.is_empty());
        }
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_redirection_only() {
        let record = parse("< in.txt > out.txt").unwrap();
        assert_eq!(record.command, None);
        assert!(record.arguments.is_empty());
        assert_eq!(record.input_file.as_deref(), Some("in.txt"));
        assert_eq!(record.output_file.as_deref(), Some("out.txt"));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_trailing_operator_dropped() {
        let record = parse("echo hi >").unwrap();
        assert_eq!(record.arguments, words(&["echo", "hi"]));
        assert_eq!(record.output_file, None);

        let record = parse("cat <").unwrap();
        assert_eq!(record.arguments, words(&["cat"]));
        assert_eq!(record.input_file, None);
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_consecutive_operators() {
        // `<` 后面紧跟 `>`：输入重定向被丢弃，`>` 照常取下一个词
        let record = parse("a < > b").unwrap();
        assert_eq!(record.arguments, words(&["a"]));
        assert_eq!(record.input_file, None);
        assert_eq!(record.output_file.as_deref(), Some("b"));

        let record = parse("a > >").unwrap();
        assert_eq!(record.arguments, words(&["a"]));
        assert_eq!(record.output_file, None);
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_last_redirection_wins() {
        let record = parse("cat < a < b > c > d").unwrap();
        assert_eq!(record.input_file.as_deref(), Some("b"));
        assert_eq!(record.output_file.as_deref(), Some("d"));
        assert_eq!(record.arguments, words(&["cat"]));
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_argument_limit() {
        let at_limit = vec!["x"; MAX_ARGS].join(" ");
        assert_eq!(parse(&at_limit).unwrap().arguments.len(), MAX_ARGS);

        let over_limit = vec!["x"; MAX_ARGS + 1].join(" ");
        match parse(&over_limit) {
            Err(ShellError::TooManyArguments { limit }) => assert_eq!(limit, MAX_ARGS),
            other => panic!("Expected TooManyArguments, got {:?}", other),
        }
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_record_outlives_line() {
        let record = {
            let line = String::from("echo owned");
            parse(&line).unwrap()
        };
        assert_eq!(record.arguments, words(&["echo", "owned"]));
    }
}
