//! 随机密码生成
//!
//! 纯函数：给定长度与启用的字符类别，从对应字符集中逐位均匀抽样。
//! 每一位独立抽取（有放回），不做任何长度校验，调用方负责限制范围。

mod alphabet;

pub use alphabet::{Alphabet, DIGITS, LETTERS, SYMBOLS};

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

/// 长度下限
pub const MIN_LENGTH: usize = 6;

/// 长度上限
pub const MAX_LENGTH: usize = 20;

/// 默认长度
pub const DEFAULT_LENGTH: usize = 8;

/// 生成参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub include_digits: bool,
    #[serde(default)]
    pub include_symbols: bool,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl PasswordConfig {
    /// Copy of this config with `length` clamped to `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn clamped(self) -> Self {
        Self {
            length: clamp_length(self.length),
            ..self
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::for_config(self)
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generate one password using the thread-local RNG.
pub fn generate(config: &PasswordConfig) -> String {
    generate_with(config, &mut rand::rng())
}

/// Generate one password drawing from the given RNG.
///
/// Each position picks an index uniformly in `[0, alphabet.len())`.
pub fn generate_with<R: Rng + ?Sized>(config: &PasswordConfig, rng: &mut R) -> String {
    let alphabet = config.alphabet();
    let chars = alphabet.as_bytes();

    (0..config.length)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}

/// Generate `count` independent passwords.
pub fn generate_many(config: &PasswordConfig, count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count).map(|_| generate_with(config, &mut rng)).collect()
}
