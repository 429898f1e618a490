use super::types::Book;
use crate::error::SearchError;

/// 严格模式下的书籍格式校验
///
/// ISBN 必须存在且非空白；每个内容行必须带 Page、Line、Text。
/// 没有内容的书只校验 ISBN。
pub fn validate_books(books: &[Book]) -> Result<(), SearchError> {
    for (book_index, book) in books.iter().enumerate() {
        let format_error = |reason: String| SearchError::Format {
            book_index,
            isbn: book.isbn.clone(),
            reason,
        };

        match book.isbn.as_deref() {
            Some(isbn) if !isbn.trim().is_empty() => {}
            Some(_) => return Err(format_error("ISBN 为空".to_string())),
            None => return Err(format_error("缺少 ISBN".to_string())),
        }

        let Some(lines) = &book.content else {
            continue;
        };

        for (i, line) in lines.iter().enumerate() {
            let missing: Vec<&str> = [
                ("Page", line.page.is_none()),
                ("Line", line.line.is_none()),
                ("Text", line.text.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();

            if !missing.is_empty() {
                return Err(format_error(format!(
                    "第 {} 个内容行缺少 {}",
                    i,
                    missing.join(", ")
                )));
            }
        }
    }

    Ok(())
}
