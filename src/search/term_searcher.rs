use tracing::{debug, info};

use super::matcher::TermMatcher;
use super::types::{Book, Match, SearchResult};
use super::validation::validate_books;
use crate::config::{SchemaPolicy, SearchConfig};
use crate::error::SearchError;

/// 词条检索器
///
/// 无状态：每次调用独立，可在多个线程间共享
#[derive(Debug, Clone, Default)]
pub struct TermSearcher {
    config: SearchConfig,
}

impl TermSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// 在书籍集合中检索词条
    ///
    /// # 参数
    /// - `term`: 检索词，默认按区分大小写的正则表达式解释
    /// - `books`: 书籍列表，按给定顺序遍历
    ///
    /// # 返回
    /// 命中位置按（书籍、内容行）的遍历顺序排列。
    /// 只有存在内容行时才编译检索词，因此没有任何内容行时无效的检索词不会报错。
    pub fn search(&self, term: &str, books: &[Book]) -> Result<SearchResult, SearchError> {
        if books.is_empty() {
            return Ok(SearchResult::empty(term));
        }

        if self.config.schema_policy == SchemaPolicy::Strict {
            validate_books(books)?;
        }

        let matcher = if books.iter().any(Book::has_content) {
            Some(TermMatcher::compile(term, self.config.match_mode)?)
        } else {
            None
        };
        let mut results = Vec::new();

        for book in books {
            let lines = book.content.as_deref().filter(|lines| !lines.is_empty());
            let (Some(matcher), Some(lines)) = (&matcher, lines) else {
                info!(
                    "Book with ISBN {} has no content.",
                    book.isbn.as_deref().unwrap_or("<none>")
                );
                continue;
            };

            for line in lines {
                let Some(text) = line.text.as_deref() else {
                    continue;
                };
                if matcher.is_match(text) {
                    debug!(isbn = ?book.isbn, page = ?line.page, line = ?line.line, "Term matched");
                    results.push(Match::at(book, line));
                }
            }
        }

        let result = SearchResult {
            search_term: term.to_string(),
            results,
        };
        info!(term, matches = result.len(), "Answer --> {:?}", result);
        Ok(result)
    }
}

/// 使用默认配置检索
pub fn search(term: &str, books: &[Book]) -> Result<SearchResult, SearchError> {
    TermSearcher::default().search(term, books)
}
