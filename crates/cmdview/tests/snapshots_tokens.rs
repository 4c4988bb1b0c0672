#![expect(missing_docs)]

use core::fmt::Write;

use cmdview::View;

/// One line per token: the cursor position after extraction, then the token.
fn render_tokens(input: &str, prefix: &str) -> String {
    let mut view = View::new(input);
    view.skip_literal(prefix);
    let mut out = String::new();
    loop {
        view.skip_whitespace();
        match view.get_quoted_word() {
            Ok(Some(token)) => writeln!(out, "@{} {token:?}", view.index()).unwrap(),
            Ok(None) => break,
            Err(err) => {
                writeln!(out, "error: {err}").unwrap();
                break;
            }
        }
    }
    out
}

#[test]
fn snapshot_command_with_mixed_quotes() {
    insta::assert_snapshot!(render_tokens("!level 'Bloodbath II' by “Riot” 10565740", "!"), @r#"
    @6 "level"
    @21 "Bloodbath II"
    @24 "by"
    @31 "Riot"
    @40 "10565740"
    "#);
}

#[test]
fn snapshot_escapes() {
    insta::assert_snapshot!(render_tokens(r#"song say\"hi\" 'it\'s' C:\path"#, ""), @r#"
    @4 "song"
    @14 "say\"hi\""
    @22 "it's"
    @30 "C:\\path"
    "#);
}

#[test]
fn snapshot_leading_backslash_does_not_escape() {
    insta::assert_snapshot!(render_tokens(r#"\"x"#, ""), @r#"error: unexpected quote: " at index 1"#);
}

#[test]
fn snapshot_stops_at_unterminated_quote() {
    insta::assert_snapshot!(render_tokens("a 'b c", ""), @r#"
    @1 "a"
    error: expected closing quote: ' at index 6
    "#);
}

#[cfg(feature = "serde")]
#[test]
fn parse_error_serializes() {
    let err = cmdview::split("'abc").unwrap_err();
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        r#"{"kind":{"MissingClosingQuote":"'"},"index":4}"#
    );
}
