mod ast;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;

pub use ast::CommandRecord;
pub use parser::parse;
