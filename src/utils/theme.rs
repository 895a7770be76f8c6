use colored::Colorize;

pub struct Theme {
    pub prompt_symbol: String,
    pub prompt_style: Box<dyn Fn(String) -> String>,
    pub error_style: Box<dyn Fn(String) -> String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            prompt_symbol: String::from("$ "),
            prompt_style: Box::new(|s| s),
            error_style: Box::new(|s| s),
        }
    }
}

impl Theme {
    /// 提示符格式: `<cwd>$ `，拿不到当前目录时只显示 `$ `
    pub fn render_prompt(&self, cwd: Option<&str>) -> String {
        match cwd {
            Some(cwd) => format!("{}{}", (self.prompt_style)(cwd.to_string()), self.prompt_symbol),
            None => self.prompt_symbol.clone(),
        }
    }

    pub fn render_error(&self, message: String) -> String {
        (self.error_style)(message)
    }
}

pub fn load_theme(theme_name: &str) -> Theme {
    match theme_name {
        "color" => Theme {
            prompt_symbol: String::from("$ "),
            prompt_style: Box::new(|s| s.bright_cyan().to_string()),
            error_style: Box::new(|s| s.bright_red().to_string()),
        },
        _ => Theme::default(),
    }
}
