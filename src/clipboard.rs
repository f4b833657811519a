//! 剪贴板写入
//!
//! 会话只依赖 [`ClipboardWriter`]，系统剪贴板实现基于 arboard。

use crate::errors::Result;

/// Something the current password can be written to.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Box<T> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

/// 系统剪贴板
///
/// `arboard::Clipboard` 在第一次写入时才打开，避免在无图形环境下启动即失败；
/// 打开后一直持有到本实例被丢弃。Linux 上剪贴板内容归持有者进程所有，
/// 句柄一旦释放其他程序就可能读不到。
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    wait_for_handoff: bool,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Clipboard for a long-running session (TUI).
    pub fn new() -> Self {
        Self {
            handle: None,
            wait_for_handoff: false,
        }
    }

    /// Clipboard for a process that exits right after copying (CLI).
    ///
    /// On Linux each write blocks until another application takes ownership
    /// of the clipboard, so the text outlives this process.
    pub fn one_shot() -> Self {
        Self {
            handle: None,
            wait_for_handoff: true,
        }
    }
}

#[cfg(feature = "clipboard")]
impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.handle.insert(clipboard);

        #[cfg(target_os = "linux")]
        {
            if self.wait_for_handoff {
                use arboard::SetExtLinux;

                tracing::info!("Holding clipboard until another application takes it over");
                clipboard.set().wait().text(text)?;
                return Ok(());
            }
        }

        clipboard.set_text(text)?;
        Ok(())
    }
}

/// 不可用的剪贴板，所有写入都失败
///
/// 未启用 `clipboard` feature 时使用。
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(crate::errors::PassgenError::clipboard(
            "clipboard support is not enabled in this build",
        ))
    }
}

/// Default clipboard for an interactive session.
pub fn default_clipboard() -> Box<dyn ClipboardWriter> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(UnavailableClipboard)
    }
}

/// Clipboard for a command that exits after a single copy.
pub fn one_shot_clipboard() -> Box<dyn ClipboardWriter> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::one_shot())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(UnavailableClipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_clipboard_fails() {
        let err = UnavailableClipboard.write_text("secret").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_system_clipboard_opens_lazily() {
        let session = SystemClipboard::new();
        assert!(session.handle.is_none());
        assert!(!session.wait_for_handoff);

        let one_shot = SystemClipboard::one_shot();
        assert!(one_shot.handle.is_none());
        assert!(one_shot.wait_for_handoff);
    }
}
