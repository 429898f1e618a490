// Search 模块
// 在扫描书籍的内容行中检索词条，返回 (ISBN, 页码, 行号) 命中位置

pub mod types;
pub mod matcher;
pub mod validation;
pub mod term_searcher;


// 重新导出主要类型
pub use types::*;
pub use matcher::TermMatcher;
pub use validation::validate_books;
pub use term_searcher::{search, TermSearcher};
