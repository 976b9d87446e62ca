use super::*;

#[test]
fn plain_tokens_pass_through() {
    assert_eq!(encode_segment("s-17_A.b~c"), "s-17_A.b~c");
}

#[test]
fn separators_are_escaped() {
    assert_eq!(encode_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
}

#[test]
fn percent_and_space_are_escaped() {
    assert_eq!(encode_segment("50% done"), "50%25%20done");
}

#[test]
fn non_ascii_is_utf8_encoded() {
    assert_eq!(encode_segment("é"), "%C3%A9");
}
