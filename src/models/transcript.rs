use std::fmt;

/// 用户输入的待评分文本
///
/// 构造时去掉首尾空白，之后原样用于请求、页面和报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 字符数（非字节数）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
