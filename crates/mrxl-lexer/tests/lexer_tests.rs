//! Lexer tests for MrXL.
//!
//! Covers: keywords, operators, literals, comments, whitespace
//! insensitivity, spans, and error recovery.

use mrxl_lexer::{Lexer, TokenKind};
use mrxl_types::SourceFile;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the token kinds (excluding final Eof).
fn kinds(source: &str) -> Vec<TokenKind> {
    let sf = SourceFile::new("test.mrxl", source);
    let result = Lexer::new(&sf).lex();
    result
        .tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.kind)
        .collect()
}

/// Lex and return all token kinds including Eof.
fn kinds_with_eof(source: &str) -> Vec<TokenKind> {
    let sf = SourceFile::new("test.mrxl", source);
    Lexer::new(&sf)
        .lex()
        .tokens
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Lex and return the error count.
fn error_count(source: &str) -> usize {
    let sf = SourceFile::new("test.mrxl", source);
    let result = Lexer::new(&sf).lex();
    result.errors.total_errors
}

/// Lex and return the first error message.
fn first_error(source: &str) -> String {
    let sf = SourceFile::new("test.mrxl", source);
    let result = Lexer::new(&sf).lex();
    result
        .errors
        .errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────
// Keywords
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_keywords() {
    let pairs = [
        ("input", TokenKind::Input),
        ("output", TokenKind::Output),
        ("map", TokenKind::Map),
        ("reduce", TokenKind::Reduce),
        ("int", TokenKind::KwInt),
        ("float", TokenKind::KwFloat),
    ];
    for (src, expected) in &pairs {
        let k = kinds(src);
        assert_eq!(k, vec![expected.clone()], "keyword '{src}'");
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(kinds("Input"), vec![TokenKind::Ident("Input".into())]);
    assert_eq!(kinds("MAP"), vec![TokenKind::Ident("MAP".into())]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(kinds("mapper"), vec![TokenKind::Ident("mapper".into())]);
    assert_eq!(kinds("inputs"), vec![TokenKind::Ident("inputs".into())]);
    assert_eq!(kinds("int32"), vec![TokenKind::Ident("int32".into())]);
}

// ─────────────────────────────────────────────────────────────────────
// Identifiers & literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_identifiers() {
    assert_eq!(kinds("avec"), vec![TokenKind::Ident("avec".into())]);
    assert_eq!(kinds("_tmp"), vec![TokenKind::Ident("_tmp".into())]);
    assert_eq!(kinds("sum_1"), vec![TokenKind::Ident("sum_1".into())]);
}

#[test]
fn test_int_literal() {
    assert_eq!(kinds("42"), vec![TokenKind::Int(42)]);
    assert_eq!(kinds("0"), vec![TokenKind::Int(0)]);
    assert_eq!(kinds("1024"), vec![TokenKind::Int(1024)]);
}

#[test]
fn test_float_literal() {
    assert_eq!(kinds("3.14"), vec![TokenKind::Float(3.14)]);
    assert_eq!(kinds("0.5"), vec![TokenKind::Float(0.5)]);
}

#[test]
fn test_int_followed_by_bare_dot_is_not_float() {
    // `5.` is an int and an error on the stray dot
    let sf = SourceFile::new("test.mrxl", "5.");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.tokens[0].kind, TokenKind::Int(5));
    assert_eq!(result.errors.total_errors, 1);
}

#[test]
fn test_int_literal_out_of_range() {
    let src = "99999999999999999999";
    assert_eq!(error_count(src), 1);
    assert!(first_error(src).contains("out of range"));
}

// ─────────────────────────────────────────────────────────────────────
// Operators & punctuation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_assign_vs_colon() {
    assert_eq!(
        kinds("x := y"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::ColonEq,
            TokenKind::Ident("y".into()),
        ]
    );
    assert_eq!(
        kinds("x : int"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Colon,
            TokenKind::KwInt,
        ]
    );
}

#[test]
fn test_bind_arrow() {
    assert_eq!(
        kinds("(a <- avec)"),
        vec![
            TokenKind::LParen,
            TokenKind::Ident("a".into()),
            TokenKind::LArrow,
            TokenKind::Ident("avec".into()),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_arithmetic_operators() {
    assert_eq!(
        kinds("a + b - c * d / e"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::Plus,
            TokenKind::Ident("b".into()),
            TokenKind::Minus,
            TokenKind::Ident("c".into()),
            TokenKind::Star,
            TokenKind::Ident("d".into()),
            TokenKind::Slash,
            TokenKind::Ident("e".into()),
        ]
    );
}

#[test]
fn test_array_type_brackets() {
    assert_eq!(
        kinds("int[1024]"),
        vec![
            TokenKind::KwInt,
            TokenKind::LBracket,
            TokenKind::Int(1024),
            TokenKind::RBracket,
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Trivia
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_newlines_are_insignificant() {
    let multi = "sumvec :=\n  map 16\n  (a <- avec)\n  { a }";
    let single = "sumvec := map 16 (a <- avec) { a }";
    assert_eq!(kinds(multi), kinds(single));
}

#[test]
fn test_line_comments_are_stripped() {
    let src = "// header comment\ninput avec: int[10] // trailing\n// footer";
    assert_eq!(
        kinds(src),
        vec![
            TokenKind::Input,
            TokenKind::Ident("avec".into()),
            TokenKind::Colon,
            TokenKind::KwInt,
            TokenKind::LBracket,
            TokenKind::Int(10),
            TokenKind::RBracket,
        ]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds_with_eof(""), vec![TokenKind::Eof]);
    assert_eq!(kinds_with_eof("   \n\t\n"), vec![TokenKind::Eof]);
    assert_eq!(kinds_with_eof("// only a comment"), vec![TokenKind::Eof]);
}

// ─────────────────────────────────────────────────────────────────────
// Spans
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_spans_track_lines_and_columns() {
    let sf = SourceFile::new("test.mrxl", "input avec: int\nsum := map 1 (x <- avec) { x }");
    let result = Lexer::new(&sf).lex();
    let input_tok = &result.tokens[0];
    assert_eq!(input_tok.span.line, 1);
    assert_eq!(input_tok.span.col, 1);
    assert_eq!(input_tok.span.len, 5);

    let sum_tok = &result.tokens[4];
    assert_eq!(sum_tok.kind, TokenKind::Ident("sum".into()));
    assert_eq!(sum_tok.span.line, 2);
    assert_eq!(sum_tok.span.col, 1);
    assert_eq!(sum_tok.span.len, 3);
}

#[test]
fn test_assign_span_length() {
    let sf = SourceFile::new("test.mrxl", "s := m");
    let result = Lexer::new(&sf).lex();
    let assign = &result.tokens[1];
    assert_eq!(assign.kind, TokenKind::ColonEq);
    assert_eq!(assign.span.col, 3);
    assert_eq!(assign.span.len, 2);
}

// ─────────────────────────────────────────────────────────────────────
// Error recovery
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_unexpected_character() {
    let src = "x % y";
    assert_eq!(error_count(src), 1);
    assert!(first_error(src).contains("unexpected character `%`"));
    // The surrounding tokens survive
    assert_eq!(
        kinds(src),
        vec![TokenKind::Ident("x".into()), TokenKind::Ident("y".into())]
    );
}

#[test]
fn test_lone_less_than_suggests_bind_arrow() {
    let src = "(a < avec)";
    assert_eq!(error_count(src), 1);
    assert!(first_error(src).contains("did you mean `<-`?"));
}

#[test]
fn test_multiple_errors_collected() {
    assert_eq!(error_count("a % b % c % d"), 3);
}

#[test]
fn test_error_carries_source_line() {
    let sf = SourceFile::new("test.mrxl", "input avec: int\nx % y\n");
    let result = Lexer::new(&sf).lex();
    let err = &result.errors.errors[0];
    assert_eq!(err.span.line, 2);
    assert_eq!(err.source_line, "x % y");
    assert_eq!(err.file, "test.mrxl");
}

#[test]
fn test_error_cap_stops_scanning() {
    // 25 bad characters, but only MAX_ERRORS reported
    let src = "% ".repeat(25);
    let sf = SourceFile::new("test.mrxl", src);
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.errors.total_errors, mrxl_types::MAX_ERRORS);
    assert_eq!(result.errors.errors.len(), mrxl_types::MAX_ERRORS);
}

// ─────────────────────────────────────────────────────────────────────
// Whole programs
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_full_program_token_stream() {
    let src = "\
input avec: int[1024]
input bvec: int[1024]
output sumvec: int[1024]
sumvec := map 16 (a <- avec) (b <- bvec) { a + b }
";
    let k = kinds(src);
    // Three declarations of 7 tokens each, then the 19-token statement
    assert_eq!(k.len(), 7 * 3 + 19);
    assert_eq!(k[0], TokenKind::Input);
    assert_eq!(k[14], TokenKind::Output);
    assert_eq!(k[21], TokenKind::Ident("sumvec".into()));
    assert_eq!(k[22], TokenKind::ColonEq);
    assert_eq!(k[23], TokenKind::Map);
    assert_eq!(k[24], TokenKind::Int(16));
}

#[test]
fn test_reduce_statement_tokens() {
    let k = kinds("sum := reduce 4 (acc, x <- avec) 0 { acc + x }");
    assert_eq!(
        k,
        vec![
            TokenKind::Ident("sum".into()),
            TokenKind::ColonEq,
            TokenKind::Reduce,
            TokenKind::Int(4),
            TokenKind::LParen,
            TokenKind::Ident("acc".into()),
            TokenKind::Comma,
            TokenKind::Ident("x".into()),
            TokenKind::LArrow,
            TokenKind::Ident("avec".into()),
            TokenKind::RParen,
            TokenKind::Int(0),
            TokenKind::LBrace,
            TokenKind::Ident("acc".into()),
            TokenKind::Plus,
            TokenKind::Ident("x".into()),
            TokenKind::RBrace,
        ]
    );
}
