use std::fs::{File, OpenOptions};
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;

use log::debug;
use nix::unistd::dup2;

use crate::shell::error::ShellError;
use crate::shell::parser::CommandRecord;

const OUTPUT_MODE: u32 = 0o644;

/// 父进程打开的重定向文件。父子进程各自持有一份，drop 时关闭
#[derive(Debug, Default)]
pub struct Redirections {
    input: Option<File>,
    output: Option<File>,
}

impl Redirections {
    /// 任何一个文件打不开都直接返回错误，已打开的随之关闭
    pub fn open(record: &CommandRecord) -> Result<Self, ShellError> {
        let mut redirections = Redirections::default();

        if let Some(path) = &record.input_file {
            let file = File::open(path).map_err(|source| ShellError::RedirectionOpenFailure {
                path: path.clone(),
                source,
            })?;
            debug!("输入重定向: {} (fd {})", path, file.as_raw_fd());
            redirections.input = Some(file);
        }

        if let Some(path) = &record.output_file {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(OUTPUT_MODE)
                .open(path)
                .map_err(|source| ShellError::RedirectionOpenFailure {
                    path: path.clone(),
                    source,
                })?;
            debug!("输出重定向: {} (fd {})", path, file.as_raw_fd());
            redirections.output = Some(file);
        }

        Ok(redirections)
    }

    /// 仅在子进程中调用：把文件复制到 stdin/stdout 后关闭原描述符
    pub fn install(self) -> nix::Result<()> {
        if let Some(file) = self.input {
            dup2(file.as_raw_fd(), libc::STDIN_FILENO)?;
        }
        if let Some(file) = self.output {
            dup2(file.as_raw_fd(), libc::STDOUT_FILENO)?;
        }
        Ok(())
    }
}
