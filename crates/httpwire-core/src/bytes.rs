//! Byte classification for the HTTP/1.x grammar.
//!
//! Every scanner in the workspace makes its per-byte decisions through
//! these functions. The definitions are scalar and total; bulk scanning
//! (`memchr` at the scanner layer) must agree with them byte for byte.

/// Classification of a single byte under the HTTP/1.x grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// Permitted in tokens: methods and header names.
    Token,
    /// A separator: `()<>@,;:\"/[]?={}` plus horizontal tab.
    Separator,
    /// A control byte other than CR, LF, and HTAB.
    Ctl,
    /// Carriage return.
    Cr,
    /// Line feed.
    Lf,
    /// The space byte.
    Space,
    /// Bytes outside the ASCII range.
    Other,
}

/// Classify a byte. Pure and total.
#[must_use]
pub const fn classify(byte: u8) -> ByteClass {
    match byte {
        b'\r' => ByteClass::Cr,
        b'\n' => ByteClass::Lf,
        b' ' => ByteClass::Space,
        b'\t' | b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/'
        | b'[' | b']' | b'?' | b'=' | b'{' | b'}' => ByteClass::Separator,
        0x00..=0x1f | 0x7f => ByteClass::Ctl,
        0x21..=0x7e => ByteClass::Token,
        _ => ByteClass::Other,
    }
}

/// True for bytes the token grammar permits in methods and header names.
#[inline]
#[must_use]
pub const fn is_token_char(byte: u8) -> bool {
    matches!(classify(byte), ByteClass::Token)
}

/// True for optional whitespace: space or horizontal tab.
#[inline]
#[must_use]
pub const fn is_ows(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// True for bytes legal inside a header value. HTAB is permitted; all
/// other control bytes are not.
#[inline]
#[must_use]
pub const fn is_field_value_char(byte: u8) -> bool {
    !matches!(classify(byte), ByteClass::Ctl | ByteClass::Cr | ByteClass::Lf)
}

/// True for bytes accepted inside a request-target. Target content is
/// opaque to the parser apart from this: control bytes are rejected, and
/// HTAB counts as a control byte here rather than a separator.
#[inline]
#[must_use]
pub const fn is_target_char(byte: u8) -> bool {
    byte != b'\t' && !matches!(classify(byte), ByteClass::Ctl | ByteClass::Cr | ByteClass::Lf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_symbols() {
        for &b in b"!#$%&'*+-.^_`|~" {
            assert!(is_token_char(b), "{} should be a token char", b as char);
        }
        for b in b'0'..=b'9' {
            assert!(is_token_char(b));
        }
        for b in b'A'..=b'Z' {
            assert!(is_token_char(b));
        }
        for b in b'a'..=b'z' {
            assert!(is_token_char(b));
        }
    }

    #[test]
    fn separators_are_not_tokens() {
        for &b in b"()<>@,;:\\\"/[]?={} \t" {
            assert!(!is_token_char(b), "{:#04x} must not be a token char", b);
        }
    }

    #[test]
    fn line_bytes() {
        assert_eq!(classify(b'\r'), ByteClass::Cr);
        assert_eq!(classify(b'\n'), ByteClass::Lf);
        assert_eq!(classify(b' '), ByteClass::Space);
        assert_eq!(classify(b'\t'), ByteClass::Separator);
    }

    #[test]
    fn controls_and_high_bytes() {
        assert_eq!(classify(0x00), ByteClass::Ctl);
        assert_eq!(classify(0x1f), ByteClass::Ctl);
        assert_eq!(classify(0x7f), ByteClass::Ctl);
        assert_eq!(classify(0x80), ByteClass::Other);
        assert_eq!(classify(0xff), ByteClass::Other);
    }

    #[test]
    fn field_value_chars() {
        assert!(is_field_value_char(b'\t'));
        assert!(is_field_value_char(b' '));
        assert!(is_field_value_char(0x80));
        assert!(!is_field_value_char(0x00));
        assert!(!is_field_value_char(0x7f));
        assert!(!is_field_value_char(b'\r'));
        assert!(!is_field_value_char(b'\n'));
    }

    #[test]
    fn target_chars() {
        assert!(is_target_char(b'/'));
        assert!(is_target_char(b'?'));
        assert!(is_target_char(0xe4));
        assert!(!is_target_char(b'\t'));
        assert!(!is_target_char(0x01));
        assert!(!is_target_char(0x7f));
    }

    #[test]
    fn classification_is_total() {
        // Every byte lands in exactly one class; spot-check the partition
        // boundaries against the scalar definition.
        for byte in 0..=255u8 {
            match classify(byte) {
                ByteClass::Token => assert!((0x21..=0x7e).contains(&byte)),
                ByteClass::Other => assert!(byte >= 0x80),
                ByteClass::Ctl => assert!(byte == 0x7f || byte < 0x20),
                _ => {}
            }
        }
    }
}
