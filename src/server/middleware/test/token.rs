use super::*;

/// Tests parsing a well-formed header.
///
/// Expected: the token without the scheme
#[test]
fn parses_bearer_header() {
    let token = BearerToken::from_header("Bearer abc.def.ghi");

    assert_eq!(token.0.as_deref(), Some("abc.def.ghi"));
}

/// Tests headers that are not bearer credentials.
///
/// Expected: None for other schemes, a bare scheme and an empty value
#[test]
fn ignores_other_schemes() {
    assert!(BearerToken::from_header("Basic dXNlcjpwYXNz").0.is_none());
    assert!(BearerToken::from_header("Bearer ").0.is_none());
    assert!(BearerToken::from_header("").0.is_none());
}
