use std::ffi::NulError;
use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// 读取输入失败，无法继续
    #[error("input: {0}")]
    InputFailure(#[source] ReadlineError),

    #[error("invalid command")]
    InvalidCommand,

    #[error("too many arguments (limit {limit})")]
    TooManyArguments { limit: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] NulError),

    #[error("{name}: {}", describe(.source))]
    BuiltinFailure {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {}", describe(.source))]
    RedirectionOpenFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    /// 子进程里 dup2 失败
    #[error("redirect: {}", describe(.0))]
    RedirectionSetupFailure(#[source] io::Error),

    #[error("fork: {}", describe(.0))]
    SpawnFailure(#[source] io::Error),

    #[error("wait: {}", describe(.0))]
    WaitFailure(#[source] io::Error),

    /// 只在子进程中产生，父进程只能看到子进程的退出码
    #[error("{program}: {}", describe(.source))]
    ExecFailure {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// `Error <code> (<description>)`，没有 errno 的错误直接显示原文
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => format!("Error {} ({})", code, errno::Errno(code)),
        None => err.to_string(),
    }
}
