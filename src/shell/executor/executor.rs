use log::debug;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use super::process::{spawn_and_wait, ChildStatus};
use super::redirect::Redirections;
use crate::shell::error::ShellError;
use crate::shell::parser::CommandRecord;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// 内建命令已在 shell 进程内完成
    Builtin,
    Finished(ChildStatus),
    /// `exit`，调用方应立即结束循环
    Exit,
}

/// 持有 shell 进程级状态：工作目录，以及上一个子进程的结束状态
#[derive(Default)]
pub struct Executor {
    last_status: Option<ChildStatus>,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    pub fn last_status(&self) -> Option<ChildStatus> {
        self.last_status
    }

    pub fn execute(&mut self, record: &CommandRecord) -> Result<Outcome, ShellError> {
        let Some(program) = record.command.as_deref() else {
            return Err(ShellError::InvalidCommand);
        };

        // 处理内建命令，不 fork，也不处理重定向
        if let Some(result) = self.handle_builtin(program, record) {
            debug!("执行内建命令: {:?}", record);
            return result;
        }

        debug!("执行外部命令: {:?}", record);
        let redirections = Redirections::open(record)?;
        let status = spawn_and_wait(&record.arguments, redirections)?;
        self.last_status = Some(status);
        Ok(Outcome::Finished(status))
    }

    fn handle_builtin(
        &mut self,
        program: &str,
        record: &CommandRecord,
    ) -> Option<Result<Outcome, ShellError>> {
        match program {
            "cd" => Some(self.builtin_cd(record)),
            "exit" => Some(Ok(Outcome::Exit)),
            _ => None,
        }
    }

    fn builtin_cd(&mut self, record: &CommandRecord) -> Result<Outcome, ShellError> {
        let target = match record.arguments.get(1) {
            Some(path) => PathBuf::from(path),
            None => home_dir(|key| env::var_os(key)),
        };
        env::set_current_dir(&target).map_err(|source| ShellError::BuiltinFailure {
            name: "cd",
            source,
        })?;
        debug!("工作目录切换到: {}", target.display());
        Ok(Outcome::Builtin)
    }
}

// HOME 未设置时退回根目录
fn home_dir<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}
