use log::{debug, error, warn};

use crate::shell::error::ShellError;
use crate::shell::executor::{Executor, Outcome};
use crate::shell::parser::parse;
use crate::shell::readline::{ReadlineError, ReadlineManager};
use crate::utils::config::Config;
use crate::utils::path::display_dir;
use crate::utils::theme::Theme;

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    theme: Theme,
    readline: ReadlineManager,
    executor: Executor,
}

impl Shell {
    pub fn new(config: &Config, theme: Theme) -> Result<Self, ShellError> {
        Ok(Self {
            theme,
            readline: ReadlineManager::new(config).map_err(ShellError::InputFailure)?,
            executor: Executor::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        debug!("techsh 准备就绪...");
        self.run_loop()?;
        debug!(
            "退出 techsh, 最后一个子进程状态: {:?}",
            self.executor.last_status()
        );
        Ok(())
    }

    fn run_loop(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self
                .theme
                .render_prompt(display_dir(self.executor.current_dir()).as_deref());

            match self.readline.readline(&prompt) {
                Ok(line) => {
                    if self.handle_line(&line) == Flow::Exit {
                        debug!("收到 exit 命令");
                        break;
                    }
                }
                Err(ReadlineError::Eof) => {
                    debug!("接收到 EOF，退出 techsh...");
                    println!();
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    warn!("接收到中断信号...");
                }
                Err(err) => {
                    error!("读取输入失败: {}", err);
                    return Err(ShellError::InputFailure(err));
                }
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        match evaluate(&mut self.executor, line) {
            Ok(flow) => flow,
            Err(ShellError::InvalidCommand) => {
                debug!("空命令，跳过: {:?}", line);
                Flow::Continue
            }
            Err(e) => {
                error!("命令执行失败: {:?}", e);
                eprintln!("{}", self.theme.render_error(format!("techsh: {}", e)));
                Flow::Continue
            }
        }
    }
}

fn evaluate(executor: &mut Executor, line: &str) -> Result<Flow, ShellError> {
    let record = parse(line)?;
    match executor.execute(&record)? {
        Outcome::Exit => Ok(Flow::Exit),
        Outcome::Finished(status) if !status.success() => {
            debug!("命令 {:?} 结束: {}", record.command, status);
            Ok(Flow::Continue)
        }
        Outcome::Finished(_) | Outcome::Builtin => Ok(Flow::Continue),
    }
}
