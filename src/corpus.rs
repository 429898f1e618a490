use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::search::{Book, SearchResult, TermSearcher};

/// 解析 JSON 形式的书籍集合
///
/// 接受书籍数组；`null` 视为空集合
pub fn parse_books(json: &str) -> Result<Vec<Book>, SearchError> {
    let books: Option<Vec<Book>> = serde_json::from_str(json)?;
    Ok(books.unwrap_or_default())
}

/// 解析后直接检索
pub fn search_json(
    term: &str,
    json: &str,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let books = parse_books(json)?;
    TermSearcher::new(config.clone()).search(term, &books)
}
