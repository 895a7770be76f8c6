use crate::utils::config::Config;
pub use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::Editor;
use rustyline::{Config as RLConfig, Result as RLResult};

/// 行编辑器，只负责读一行；不记录也不保存历史
pub struct ReadlineManager {
    editor: Editor<(), MemHistory>,
}

impl ReadlineManager {
    pub fn new(config: &Config) -> RLResult<Self> {
        let rl_config = RLConfig::builder()
            .auto_add_history(false)
            .edit_mode(config.get_edit_mode())
            .build();

        let editor = Editor::with_history(rl_config, MemHistory::new())?;
        Ok(Self { editor })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.editor.readline(prompt)
    }
}
