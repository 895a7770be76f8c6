use std::str::Split;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(String),
    Redirect(RedirectOp),
    EOF,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RedirectOp {
    Input,  // <
    Output, // >
}

/// 只按空格切分。制表符、引号和反斜杠都是普通字符，
/// 只有单独成词的 `<` 和 `>` 才是重定向符号。
pub struct Lexer<'a> {
    input: Split<'a, char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.split(' '),
        }
    }

    pub fn next_token(&mut self) -> Token {
        // 连续空格会切出空串，跳过
        match self.input.find(|word| !word.is_empty()) {
            None => Token::EOF,
            Some("<") => Token::Redirect(RedirectOp::Input),
            Some(">") => Token::Redirect(RedirectOp::Output),
            Some(word) => Token::Word(word.to_string()),
        }
    }
}
