/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a convenient `Display` implementation for a `u8`.
///
/// The byte is treated as ASCII. Printable ASCII is emitted as is, while
/// anything else is emitted as an escape sequence like `\n` or `\xFF`.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        for (i, b) in core::ascii::escape_default(self.0).enumerate() {
            // capitalize \xab to \xAB
            let b = if i >= 2 { b.to_ascii_uppercase() } else { b };
            core::fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn byte() {
        assert_eq!(Byte(b'a').to_string(), "a");
        assert_eq!(Byte(b' ').to_string(), " ");
        assert_eq!(Byte(b'\n').to_string(), "\\n");
        assert_eq!(Byte(0xFF).to_string(), "\\xFF");
        assert_eq!(alloc::format!("{:?}", Byte(b'-')), "\"-\"");
    }
}
