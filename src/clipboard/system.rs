use arboard::Clipboard;

use super::TextClipboard;
use crate::error::AppError;

/// 基于 `arboard` 的系统剪贴板
///
/// 进程内只初始化一次，读写复用同一个句柄。
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// 获取系统剪贴板访问权限
    ///
    /// 无图形会话（如 SSH、CI 容器）时返回 `AppError::Clipboard`。
    pub fn init() -> Result<Self, AppError> {
        let inner = Clipboard::new().map_err(|e| AppError::Clipboard(format!("初始化失败: {}", e)))?;
        log::debug!("📋 系统剪贴板已初始化");
        Ok(Self { inner })
    }
}

impl TextClipboard for SystemClipboard {
    fn read_text(&mut self) -> String {
        match self.inner.get_text() {
            Ok(text) => text,
            Err(arboard::Error::ContentNotAvailable) => {
                log::debug!("剪贴板为空或不含文本");
                String::new()
            }
            Err(err) => {
                log::warn!("读取剪贴板文本失败，按空内容处理: {}", err);
                String::new()
            }
        }
    }

    fn write_text(&mut self, content: &str) -> Result<(), AppError> {
        self.inner
            .set_text(content)
            .map_err(|e| AppError::Clipboard(format!("写入失败: {}", e)))
    }
}
