use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("检索词无法编译: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("检索词不支持内联标志: {0}")]
    InlineFlags(String),
    #[error("书籍格式错误 (#{book_index}, ISBN={isbn:?}): {reason}")]
    Format {
        book_index: usize,
        isbn: Option<String>,
        reason: String,
    },
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
}
