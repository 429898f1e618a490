use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// 扫描书籍
///
/// 以 ISBN 标识，包含零或多行扫描文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "Content", default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Line>>,
}

impl Book {
    pub fn new(isbn: &str, content: Vec<Line>) -> Self {
        Self {
            title: None,
            isbn: Some(isbn.to_string()),
            content: Some(content),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// 有可检索的内容行
    pub fn has_content(&self) -> bool {
        self.content.as_ref().is_some_and(|lines| !lines.is_empty())
    }
}

/// 扫描行：一本书中的一行文本，带页码和行号
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "Page", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "Line", default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Line {
    pub fn new(page: i64, line: i64, text: &str) -> Self {
        Self {
            page: Some(page),
            line: Some(line),
            text: Some(text.to_string()),
        }
    }
}

/// 命中位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "Page", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "Line", default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
}

impl Match {
    pub fn at(book: &Book, line: &Line) -> Self {
        Self {
            isbn: book.isbn.clone(),
            page: line.page,
            line: line.line,
        }
    }
}

/// 检索结果
///
/// `search_term` 保留调用方传入的原始检索词，`results` 按遍历顺序排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "SearchTerm")]
    pub search_term: String,
    #[serde(rename = "Results")]
    pub results: Vec<Match>,
}

impl SearchResult {
    pub fn empty(search_term: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            results: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn to_json(&self) -> Result<String, SearchError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SearchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_content() {
        assert!(Book::new("1", vec![Line::new(1, 1, "a")]).has_content());
        assert!(!Book::new("1", vec![]).has_content());
        assert!(!Book::default().has_content());
    }

    #[test]
    fn test_book_deserialize_pascal_case() {
        let book: Book = serde_json::from_str(
            r#"{"Title": "Pageless", "ISBN": "1234567890"}"#,
        )
        .unwrap();
        assert_eq!(book.title.as_deref(), Some("Pageless"));
        assert_eq!(book.isbn.as_deref(), Some("1234567890"));
        assert!(book.content.is_none());
    }

    #[test]
    fn test_match_omits_absent_fields() {
        let m = Match {
            isbn: None,
            page: Some(31),
            line: None,
        };
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"Page":31}"#);
    }

    #[test]
    fn test_empty_result_json() {
        let result = SearchResult::empty("the");
        assert!(result.is_empty());
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"SearchTerm":"the","Results":[]}"#
        );
    }
}
