//! 字符集定义
//!
//! 字母集始终存在，数字和符号按配置追加。拼接顺序固定，
//! 以便替换为带种子的随机源时输出可复现。

use super::PasswordConfig;

/// 大小写字母（52 个）
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 数字（10 个）
pub const DIGITS: &str = "0123456789";

/// 符号（8 个）
pub const SYMBOLS: &str = "@#$%^&*!";

/// 由配置派生的可选字符集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
}

impl Alphabet {
    /// Build the alphabet for a configuration: letters, then digits, then symbols.
    pub fn for_config(config: &PasswordConfig) -> Self {
        let mut chars = String::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
        chars.push_str(LETTERS);
        if config.include_digits {
            chars.push_str(DIGITS);
        }
        if config.include_symbols {
            chars.push_str(SYMBOLS);
        }
        Self { chars }
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.chars.as_bytes()
    }

    /// Number of characters; never zero.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(include_digits: bool, include_symbols: bool) -> PasswordConfig {
        PasswordConfig {
            length: 8,
            include_digits,
            include_symbols,
        }
    }

    #[test]
    fn test_letters_only() {
        let alphabet = Alphabet::for_config(&config(false, false));
        assert_eq!(alphabet.len(), 52);
        assert_eq!(alphabet.as_str(), LETTERS);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_sizes_per_class() {
        assert_eq!(Alphabet::for_config(&config(true, false)).len(), 62);
        assert_eq!(Alphabet::for_config(&config(false, true)).len(), 60);
        assert_eq!(Alphabet::for_config(&config(true, true)).len(), 70);
    }

    #[test]
    fn test_fixed_order() {
        let alphabet = Alphabet::for_config(&config(true, true));
        assert_eq!(alphabet.as_str(), format!("{}{}{}", LETTERS, DIGITS, SYMBOLS));
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::for_config(&config(false, true));
        assert!(alphabet.contains('@'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('7'));
    }
}
