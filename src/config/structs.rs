use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::generator::PasswordConfig;

/// 默认配置文件名
pub const DEFAULT_CONFIG_PATH: &str = "passgen.toml";

/// 环境变量前缀，示例：PG__GENERATOR__LENGTH=12
pub const ENV_PREFIX: &str = "PG";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - generator: 会话启动时的默认生成参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub generator: PasswordConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从默认路径加载配置
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// 加载失败时打印错误并回退到默认值
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(config) => {
                if path.exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path.display());
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Load without falling back to defaults on error.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_load_with_env(path, None)
    }

    /// 从 TOML 文件加载，环境变量取自 `env`（`None` 时读取进程环境）
    pub fn try_load_with_env<P: AsRef<Path>>(
        path: P,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件内容
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 将示例配置写入 TOML 文件，必要时创建父目录
    pub fn save_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let content = Self::generate_sample_config()?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" 或 "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}
