use std::fmt;

#[derive(Debug, Clone)]
pub enum PassgenError {
    Clipboard(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
}

impl PassgenError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PassgenError::Clipboard(_) => "E001",
            PassgenError::Config(_) => "E002",
            PassgenError::FileOperation(_) => "E003",
            PassgenError::Serialization(_) => "E004",
            PassgenError::Terminal(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PassgenError::Clipboard(_) => "Clipboard Error",
            PassgenError::Config(_) => "Configuration Error",
            PassgenError::FileOperation(_) => "File Operation Error",
            PassgenError::Serialization(_) => "Serialization Error",
            PassgenError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            PassgenError::Clipboard(msg) => msg,
            PassgenError::Config(msg) => msg,
            PassgenError::FileOperation(msg) => msg,
            PassgenError::Serialization(msg) => msg,
            PassgenError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 的 stderr）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PassgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PassgenError {}

// 便捷的构造函数
impl PassgenError {
    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        PassgenError::Clipboard(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        PassgenError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        PassgenError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PassgenError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        PassgenError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for PassgenError {
    fn from(err: std::io::Error) -> Self {
        PassgenError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for PassgenError {
    fn from(err: toml::ser::Error) -> Self {
        PassgenError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PassgenError {
    fn from(err: config::ConfigError) -> Self {
        PassgenError::Config(err.to_string())
    }
}

#[cfg(feature = "clipboard")]
impl From<arboard::Error> for PassgenError {
    fn from(err: arboard::Error) -> Self {
        PassgenError::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PassgenError>;
