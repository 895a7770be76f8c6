use std::io;
use std::path::Path;

use log::error;

/// 提示符用的目录字符串；非 UTF-8 路径按有损方式显示
pub fn display_dir(dir: io::Result<impl AsRef<Path>>) -> Option<String> {
    match dir {
        Ok(dir) => Some(dir.as_ref().to_string_lossy().into_owned()),
        Err(e) => {
            error!("techsh: PROMPT: current_dir error: {}", e);
            None
        }
    }
}
