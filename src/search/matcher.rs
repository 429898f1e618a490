use regex::Regex;
use regex_syntax::ast::parse::Parser;
use regex_syntax::ast::{Ast, GroupKind};
use tracing::debug;

use crate::config::MatchMode;
use crate::error::SearchError;

/// 检索词匹配器
///
/// 区分大小写，不锚定：文本中任意位置出现即算命中
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Regex,
}

impl TermMatcher {
    pub fn compile(term: &str, mode: MatchMode) -> Result<Self, SearchError> {
        let pattern = match mode {
            MatchMode::Regex => term.to_string(),
            MatchMode::Literal => regex::escape(term),
        };
        debug!(term, ?mode, pattern = %pattern, "Compiling search term");
        let regex = Regex::new(&pattern)?;
        if mode == MatchMode::Regex && has_inline_flags(&pattern) {
            return Err(SearchError::InlineFlags(term.to_string()));
        }
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// `(?i)`、`(?i:...)` 等内联标志会改变大小写等匹配语义，一律拒绝
fn has_inline_flags(pattern: &str) -> bool {
    match Parser::new().parse(pattern) {
        Ok(ast) => ast_has_flags(&ast),
        Err(_) => false,
    }
}

fn ast_has_flags(ast: &Ast) -> bool {
    match ast {
        Ast::Flags(_) => true,
        Ast::Group(group) => {
            matches!(&group.kind, GroupKind::NonCapturing(flags) if !flags.items.is_empty())
                || ast_has_flags(&group.ast)
        }
        Ast::Repetition(rep) => ast_has_flags(&rep.ast),
        Ast::Alternation(alt) => alt.asts.iter().any(ast_has_flags),
        Ast::Concat(concat) => concat.asts.iter().any(ast_has_flags),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive() {
        let matcher = TermMatcher::compile("The", MatchMode::Regex).unwrap();
        assert!(matcher.is_match("momentum.  The dark-"));
        assert!(!matcher.is_match("however good the Canadian's"));
    }

    #[test]
    fn test_unanchored() {
        let matcher = TermMatcher::compile("dark", MatchMode::Regex).unwrap();
        assert!(matcher.is_match("The dark-"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let matcher = TermMatcher::compile("", MatchMode::Regex).unwrap();
        assert!(matcher.is_match(""));
        assert!(matcher.is_match("anything"));
    }

    #[test]
    fn test_regex_metacharacters() {
        let regex = TermMatcher::compile("h.d", MatchMode::Regex).unwrap();
        assert!(regex.is_match("he had managed"));

        let literal = TermMatcher::compile("h.d", MatchMode::Literal).unwrap();
        assert!(!literal.is_match("he had managed"));
        assert!(literal.is_match("ah.d"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = TermMatcher::compile("(unclosed", MatchMode::Regex);
        assert!(matches!(result, Err(SearchError::InvalidPattern(_))));

        // 字面模式下同样的输入是合法的
        assert!(TermMatcher::compile("(unclosed", MatchMode::Literal).is_ok());
    }

    #[test]
    fn test_inline_flags_rejected() {
        for term in ["(?i)the", "(?i:the)", "a|(?s).", "(x(?-u)y)*", "(?x) the"] {
            let result = TermMatcher::compile(term, MatchMode::Regex);
            assert!(
                matches!(result, Err(SearchError::InlineFlags(ref t)) if t == term),
                "{} should be rejected",
                term
            );
        }

        // 普通分组不受影响
        assert!(TermMatcher::compile("(?:the)", MatchMode::Regex).is_ok());
        assert!(TermMatcher::compile("(?P<w>the)", MatchMode::Regex).is_ok());
        // 字面模式下只是普通字符
        let literal = TermMatcher::compile("(?i)the", MatchMode::Literal).unwrap();
        assert!(literal.is_match("x(?i)they"));
        assert!(!literal.is_match("The dark-"));
    }
}
