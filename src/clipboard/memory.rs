use super::TextClipboard;
use crate::error::AppError;

/// 进程内剪贴板，内容保存在 `String` 中
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: String,
    writes: usize,
}

impl MemoryClipboard {
    pub fn with_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            writes: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 累计写入次数
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TextClipboard for MemoryClipboard {
    fn read_text(&mut self) -> String {
        self.content.clone()
    }

    fn write_text(&mut self, content: &str) -> Result<(), AppError> {
        self.content = content.to_string();
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryClipboard, TextClipboard};

    #[test]
    fn write_then_read_returns_identical_text() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.write_text("Alpha\nBeta").expect("write");

        assert_eq!(clipboard.read_text(), "Alpha\nBeta");
        assert_eq!(clipboard.writes(), 1);
    }

    #[test]
    fn empty_clipboard_reads_as_empty_string() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.read_text(), "");
    }
}
