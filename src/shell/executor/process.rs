use std::ffi::CString;
use std::fmt;
use std::io::{self, Write};

use log::{debug, warn};
use nix::errno::Errno;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitStatus as WS};
use nix::unistd::{execvp, fork, ForkResult, Pid};

use super::redirect::Redirections;
use crate::shell::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(Signal),
}

impl ChildStatus {
    pub fn success(&self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exit {}", code),
            ChildStatus::Signaled(signal) => write!(f, "killed by {}", signal),
        }
    }
}

/// fork 出子进程执行 `argv`，阻塞直到子进程结束
pub fn spawn_and_wait(
    argv: &[String],
    redirections: Redirections,
) -> Result<ChildStatus, ShellError> {
    // 在 fork 之前准备好 C 字符串，子进程里只做 dup2/exec
    let c_argv = argv
        .iter()
        .map(|arg| CString::new(arg.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    if c_argv.is_empty() {
        return Err(ShellError::InvalidCommand);
    }

    // 避免缓冲区内容在子进程里被再输出一次
    io::stdout().flush().ok();

    match unsafe { fork() } {
        Ok(ForkResult::Child) => run_child(&c_argv, redirections),
        Ok(ForkResult::Parent { child }) => {
            debug!("子进程 {} 已启动: {:?}", child, argv);
            let status = wait_child(child);
            // 无论子进程结果如何，父进程持有的描述符都在这里关闭
            drop(redirections);
            status
        }
        Err(errno) => Err(ShellError::SpawnFailure(errno.into())),
    }
}

fn wait_child(child: Pid) -> Result<ChildStatus, ShellError> {
    loop {
        match waitpid(child, None) {
            Ok(WS::Exited(pid, code)) => {
                debug!("子进程 {} 退出, 状态码 {}", pid, code);
                return Ok(ChildStatus::Exited(code));
            }
            Ok(WS::Signaled(pid, signal, _)) => {
                warn!("子进程 {} 被信号 {} 终止", pid, signal);
                return Ok(ChildStatus::Signaled(signal));
            }
            Ok(other) => {
                debug!("子进程状态变化: {:?}", other);
            }
            Err(Errno::EINTR) => {}
            Err(errno) => return Err(ShellError::WaitFailure(errno.into())),
        }
    }
}

fn run_child(argv: &[CString], redirections: Redirections) -> ! {
    if let Err(errno) = redirections.install() {
        child_fail(&ShellError::RedirectionSetupFailure(errno.into()));
    }

    // Rust 运行时忽略了 SIGPIPE，exec 前还原默认行为
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }.ok();

    let errno = match execvp(&argv[0], argv) {
        Ok(never) => match never {},
        Err(errno) => errno,
    };
    child_fail(&ShellError::ExecFailure {
        program: argv[0].to_string_lossy().into_owned(),
        source: errno.into(),
    })
}

fn child_message(err: &ShellError) -> String {
    format!("techsh: {}\n", err)
}

// 子进程里不碰 std 的 stdout/stderr 锁，直接写 fd 2 后 _exit
fn child_fail(err: &ShellError) -> ! {
    let message = child_message(err);
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            message.as_ptr() as *const libc::c_void,
            message.len(),
        );
        libc::_exit(libc::EXIT_FAILURE)
    }
}
