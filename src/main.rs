use std::process::ExitCode;

use log::{debug, error};

use crate::shell::Shell;
use crate::utils::config::Config;
use crate::utils::log::init_logger;
use crate::utils::theme::load_theme;

mod shell;
mod utils;

fn main() -> ExitCode {
    let config = Config::new();
    if let Err(e) = init_logger(&config) {
        eprintln!("techsh: logging disabled: {}", e);
    }
    debug!("配置加载成功 {}", config.config_dir.display());

    let result = Shell::new(&config, load_theme(&config.theme)).and_then(|mut shell| shell.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("techsh 异常退出: {}", e);
            eprintln!("techsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
