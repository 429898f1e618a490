// Book Search
// 在扫描书籍的逐行文本中检索词条，返回命中的 ISBN、页码与行号

pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod search;

pub use config::{MatchMode, SchemaPolicy, SearchConfig};
pub use corpus::{parse_books, search_json};
pub use error::SearchError;
pub use logging::init_logging;
pub use search::{search, Book, Line, Match, SearchResult, TermSearcher};
