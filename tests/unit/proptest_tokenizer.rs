//! Property-based tests for the tokenizer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use morloc_lexer::{Lexer, LexerOptions, MorlocLexer, TokenKind, tokenize};
use proptest::prelude::*;

use crate::common::assert_covers;

/// Characters that exercise most Morloc rules, including the stateful ones
const MORLOC_ALPHABET: &str = r#"[a-zA-Z0-9 \n_'"\\{}()\[\],.:=<>@#^\-]{0,80}"#;

proptest! {
    /// Tokens tile arbitrary input exactly
    #[test]
    fn tokens_cover_any_input(source in any::<String>()) {
        let tokens: Vec<_> = tokenize(&source).collect();
        assert_covers(&source, &tokens);
    }

    /// Tokens tile Morloc-like input exactly
    #[test]
    fn tokens_cover_morloc_like_input(source in MORLOC_ALPHABET) {
        let tokens: Vec<_> = tokenize(&source).collect();
        assert_covers(&source, &tokens);
    }

    /// Tokenizing is deterministic
    #[test]
    fn tokenizing_is_deterministic(source in MORLOC_ALPHABET) {
        let first: Vec<_> = tokenize(&source).collect();
        let second: Vec<_> = tokenize(&source).collect();
        prop_assert_eq!(first, second);
    }

    /// Merging keeps coverage and leaves no adjacent tokens of one kind
    #[test]
    fn merged_tokens_cover_and_alternate(source in MORLOC_ALPHABET) {
        let merged: Vec<_> = tokenize(&source).merged().collect();
        assert_covers(&source, &merged);
        for pair in merged.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    /// The stack never drops below the root state
    #[test]
    fn root_stays_at_the_bottom(source in MORLOC_ALPHABET) {
        let mut tokens = tokenize(&source);
        while tokens.next().is_some() {
            prop_assert_eq!(tokens.state_stack().first().copied(), Some("root"));
        }
    }

    /// Identifiers never produce errors
    #[test]
    fn identifiers_lex_cleanly(word in "[a-z][a-z0-9_]{0,10}") {
        // `where` is split off as a keyword with no boundary check
        prop_assume!(!word.starts_with("where"));
        let kinds: Vec<_> = tokenize(&word).map(|t| t.kind).collect();
        prop_assert!(kinds.iter().all(|k| *k == TokenKind::KeywordReserved || *k == TokenKind::Name));
    }

    /// Decimal integers are single tokens
    #[test]
    fn integers_are_one_token(n in any::<u64>()) {
        let text = n.to_string();
        let tokens: Vec<_> = tokenize(&text).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::NumberInteger);
    }

    /// Preprocessed input always ends with exactly the text the tokens cover
    #[test]
    fn preprocessed_input_is_covered(source in any::<String>(), tabsize in 0usize..9) {
        let lexer = MorlocLexer::with_options(LexerOptions { tabsize, ..LexerOptions::default() });
        let text = lexer.preprocess(&source);
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.contains('\r'));
        let tokens: Vec<_> = lexer.tokenize(&text).collect();
        assert_covers(&text, &tokens);
    }
}
