//! Endpoint methods, one module per API group. Each adds an `impl Client` block.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

mod account;
mod domains;
mod nameservers;
mod redirects;
mod tlds;
mod transfers;
mod whois;

/// Characters kept literal in a path segment. `/`, `?`, `%`, `;` and `,`
/// are always escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escapes a caller-supplied name so it stays a single path segment.
fn path_segment(name: &str) -> Cow<'_, str> {
    utf8_percent_encode(name, PATH_SEGMENT).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("test.com"), "test.com");
        assert_eq!(path_segment("a/b.com"), "a%2Fb.com");
        assert_eq!(path_segment("a?b;c,d%"), "a%3Fb%3Bc%2Cd%25");
        assert_eq!(
            path_segment("пример.рф"),
            "%D0%BF%D1%80%D0%B8%D0%BC%D0%B5%D1%80.%D1%80%D1%84"
        );
    }
}
