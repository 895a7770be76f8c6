/// 一行输入解析出的命令，执行一次后丢弃
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRecord {
    pub command: Option<String>,
    /// 包含命令名本身，即 argv
    pub arguments: Vec<String>,
    pub input_file: Option<String>,
    pub output_file: Option<String>,
}
