//! Tests for the Morloc grammar

use morloc_lexer::TokenKind::{
    self, CommentMultiline, CommentSingle, Error, Keyword, KeywordReserved, KeywordType, Name,
    NameBuiltin, NumberFloat, NumberInteger, OperatorWord, Punctuation, StringEscape, Text,
    Whitespace,
};
use morloc_lexer::{Lexer, MorlocLexer, tokenize};

use crate::common::{final_stack, kinds, lex};

const STR: TokenKind = TokenKind::String;

// =============================================================================
// Walkthroughs
// =============================================================================

#[test]
fn line_comment_is_one_token() {
    let tokens: Vec<_> = tokenize("-- a line comment").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, CommentSingle);
    assert_eq!(tokens[0].span.range(), 0..17);
}

#[test]
fn module_declaration() {
    assert_eq!(
        lex("module Foo.Bar"),
        [(KeywordReserved, "module"), (Whitespace, " "), (Name, "Foo.Bar")]
    );
    assert_eq!(final_stack("module Foo.Bar"), ["root"]);
}

#[test]
fn module_name_may_follow_a_newline() {
    assert_eq!(
        lex("module\n  foo.bar"),
        [(KeywordReserved, "module"), (Whitespace, "\n  "), (Name, "foo.bar")]
    );
}

#[test]
fn module_inside_a_word_is_a_name() {
    // no word boundary between the digit and `m`
    assert_eq!(lex("42module"), [(NumberInteger, "42"), (Name, "module")]);
}

#[test]
fn import_list() {
    assert_eq!(
        lex("import (foo, bar)"),
        [
            (KeywordReserved, "import"),
            (Whitespace, " "),
            (Punctuation, "("),
            (Name, "foo"),
            (Punctuation, ","),
            (Whitespace, " "),
            (Name, "bar"),
            (Punctuation, ")"),
        ]
    );
    assert_eq!(final_stack("import (foo, bar)"), ["root"]);
}

#[test]
fn nested_import_list_balances() {
    assert_eq!(
        kinds("import (a, (b))"),
        [
            KeywordReserved,
            Whitespace,
            Punctuation,
            Name,
            Punctuation,
            Whitespace,
            Punctuation,
            Name,
            Punctuation,
            Punctuation,
        ]
    );
    assert_eq!(final_stack("import (a, (b))"), ["root"]);
}

#[test]
fn plain_import() {
    assert_eq!(
        lex("import math"),
        [(KeywordReserved, "import"), (Whitespace, " "), (Name, "math")]
    );
}

#[test]
fn source_list_with_alias() {
    let source = r#"source R ("f" as g)"#;
    assert_eq!(
        lex(source),
        [
            (KeywordReserved, "source"),
            (Whitespace, " "),
            (Name, "R"),
            (Whitespace, " "),
            (Text, "("),
            (STR, "\"f\""),
            (Whitespace, " "),
            (Keyword, "as"),
            (Whitespace, " "),
            (Name, "g"),
            (Text, ")"),
        ]
    );
    // the list pushes root below itself and pops only itself
    assert_eq!(final_stack(source), ["root", "root"]);
}

#[test]
fn source_from_path() {
    assert_eq!(
        lex(r#"source Py from "lib.py" ("add" as plus, "mul")"#),
        [
            (KeywordReserved, "source"),
            (Whitespace, " "),
            (Name, "Py"),
            (Whitespace, " "),
            (KeywordReserved, "from"),
            (Whitespace, " "),
            (STR, "\"lib.py\""),
            (Whitespace, " "),
            (Text, "("),
            (STR, "\"add\""),
            (Whitespace, " "),
            (Keyword, "as"),
            (Whitespace, " "),
            (Name, "plus"),
            (Punctuation, ","),
            (Whitespace, " "),
            (STR, "\"mul\""),
            (Text, ")"),
        ]
    );
}

#[test]
fn each_source_list_leaves_a_root_behind() {
    let source = "source R (\"f\")\nsource Py (\"g\")\nwhere";
    assert_eq!(final_stack(source), ["root", "root", "root"]);

    // the extra roots behave like the first one
    let tokens = lex(source);
    assert_eq!(tokens.last(), Some(&(KeywordReserved, "where")));
    assert!(tokens.iter().all(|(kind, _)| *kind != Error));
}

#[test]
fn float_with_exponent() {
    assert_eq!(lex("42.5e10"), [(NumberFloat, "42.5e10")]);
}

#[test]
fn unknown_character_is_an_error() {
    let tokens: Vec<_> = tokenize("#").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Error);
    assert_eq!(tokens[0].span.range(), 0..1);

    assert_eq!(
        lex("# foo"),
        [(Error, "#"), (Whitespace, " "), (Name, "foo")]
    );
}

#[test]
fn error_covers_a_whole_character() {
    let tokens: Vec<_> = tokenize("€").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Error);
    assert_eq!(tokens[0].span.range(), 0..3);
}

#[test]
fn lone_minus_is_an_error() {
    assert_eq!(
        lex("a - b"),
        [(Name, "a"), (Whitespace, " "), (Error, "-"), (Whitespace, " "), (Name, "b")]
    );
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn where_wins_over_identifiers() {
    assert_eq!(lex("whereabouts"), [(KeywordReserved, "where"), (Name, "abouts")]);
}

#[test]
fn lowercase_type_is_not_a_declaration() {
    assert_eq!(
        lex("type Foo"),
        [(KeywordReserved, "type"), (Whitespace, " "), (Name, "Foo")]
    );
    assert_eq!(lex("type foo"), [(Name, "type"), (Whitespace, " "), (Name, "foo")]);
}

#[test]
fn record_declaration() {
    assert_eq!(
        lex("record Person = "),
        [
            (KeywordReserved, "record"),
            (Whitespace, " "),
            (Name, "Person"),
            (Whitespace, " "),
            (OperatorWord, "="),
            (Whitespace, " "),
        ]
    );
}

#[test]
fn export_captures_one_character() {
    assert_eq!(
        lex("export foo"),
        [(KeywordReserved, "export"), (Whitespace, " "), (Name, "f"), (Name, "oo")]
    );
}

#[test]
fn export_only_at_line_start() {
    assert_eq!(kinds("x export foo"), [Name, Whitespace, Name, Whitespace, Name]);
    assert_eq!(
        lex("x\nexport y"),
        [
            (Name, "x"),
            (Whitespace, "\n"),
            (KeywordReserved, "export"),
            (Whitespace, " "),
            (Name, "y"),
        ]
    );
}

#[test]
fn unit_and_empty_list() {
    assert_eq!(lex("()"), [(NameBuiltin, "()")]);
    assert_eq!(lex("[]"), [(KeywordType, "[]")]);
    assert_eq!(lex("[a]"), [(Punctuation, "["), (Name, "a"), (Punctuation, "]")]);
}

#[test]
fn signature() {
    assert_eq!(
        lex("f :: Int -> [Str]"),
        [
            (Name, "f"),
            (Whitespace, " "),
            (OperatorWord, "::"),
            (Whitespace, " "),
            (Name, "Int"),
            (Whitespace, " "),
            (OperatorWord, "->"),
            (Whitespace, " "),
            (Punctuation, "["),
            (Name, "Str"),
            (Punctuation, "]"),
        ]
    );
}

#[test]
fn primes_stay_in_identifiers() {
    assert_eq!(lex("x'"), [(Name, "x'")]);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn line_comment_stops_at_newline() {
    assert_eq!(
        lex("x -- c\ny"),
        [
            (Name, "x"),
            (Whitespace, " "),
            (CommentSingle, "-- c"),
            (Whitespace, "\n"),
            (Name, "y"),
        ]
    );
}

#[test]
fn block_comments_nest() {
    let source = "{- a {- b -} c -}";
    assert_eq!(
        lex(source),
        [
            (CommentMultiline, "{-"),
            (CommentMultiline, " a "),
            (CommentMultiline, "{-"),
            (CommentMultiline, " b "),
            (CommentMultiline, "-}"),
            (CommentMultiline, " c "),
            (CommentMultiline, "-}"),
        ]
    );
    assert_eq!(final_stack(source), ["root"]);

    let merged: Vec<_> = tokenize(source).merged().collect();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text, source);
}

#[test]
fn stray_dashes_and_braces_inside_comments() {
    assert_eq!(
        lex("{- a - b } -}"),
        [
            (CommentMultiline, "{-"),
            (CommentMultiline, " a "),
            (CommentMultiline, "-"),
            (CommentMultiline, " b "),
            (CommentMultiline, "}"),
            (CommentMultiline, " "),
            (CommentMultiline, "-}"),
        ]
    );
}

#[test]
fn unterminated_comment_stays_open() {
    assert!(kinds("{- open").iter().all(|k| *k == CommentMultiline));
    assert_eq!(final_stack("{- open"), ["root", "comment"]);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_with_escape() {
    assert_eq!(
        lex(r#""a\nb""#),
        [
            (STR, "\""),
            (STR, "a"),
            (StringEscape, "\\"),
            (StringEscape, "n"),
            (STR, "b"),
            (STR, "\""),
        ]
    );
    assert_eq!(final_stack(r#""a\nb""#), ["root"]);
}

#[test]
fn unterminated_string_stays_open() {
    assert_eq!(lex("\"abc"), [(STR, "\""), (STR, "abc")]);
    assert_eq!(final_stack("\"abc"), ["root", "string"]);
}

#[test]
fn unknown_escape_is_an_error_and_eats_the_quote() {
    // `q` is no escape, so the quote after it is taken as the escape
    assert_eq!(
        lex(r#""\q""#),
        [(STR, "\""), (StringEscape, "\\"), (Error, "q"), (StringEscape, "\"")]
    );
    assert_eq!(final_stack(r#""\q""#), ["root", "string"]);
}

#[test]
fn string_gap() {
    assert_eq!(
        lex("\"ab\\  \\cd\""),
        [
            (STR, "\""),
            (STR, "ab"),
            (StringEscape, "\\"),
            (Whitespace, "  "),
            (StringEscape, "\\"),
            (STR, "cd"),
            (STR, "\""),
        ]
    );
}

// =============================================================================
// The Lexer trait
// =============================================================================

#[test]
fn morloc_lexer_metadata() {
    let lexer = MorlocLexer::new();
    assert_eq!(lexer.name(), "Morloc");
    assert_eq!(lexer.aliases(), ["morloc"]);
    assert_eq!(lexer.filenames(), ["*.loc"]);
    assert_eq!(lexer.mimetypes(), ["text/x-morloc"]);
}

#[test]
fn preprocessed_text_is_tokenized_whole() {
    let lexer = MorlocLexer::new();
    let text = lexer.preprocess("\r\nmodule foo");
    assert_eq!(text, "module foo\n");

    let tokens: Vec<_> = lexer.tokenize(&text).collect();
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, "module foo\n");
    assert_eq!(tokens.last().map(|t| t.kind), Some(Whitespace));
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(lex("").is_empty());
    assert_eq!(final_stack(""), ["root"]);
}

#[test]
fn full_program_has_no_errors() {
    let program = r#"module math (add, mul)

import base (Int, Real)

source Cpp from "math.hpp" ("add" as add, "mul")

{- binary operations
   {- nested -} -}
add :: Int -> Int -> Int
mul a b = add 0x1F 1_000 2.5e-3 -- product

type Pair a b = (a, b)
record Person = Person {name :: Str, age :: Int}
"#;
    let errors: Vec<_> = tokenize(program).filter(|t| t.kind == Error).collect();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(final_stack(program).last(), Some(&"root"));
}
