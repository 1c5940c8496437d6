/// Container format detected from a font file's first four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Woff,
    Woff2,
    TrueType,
    OpenType,
}

impl FontFormat {
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes.get(..4)? {
            b"wOFF" => Some(Self::Woff),
            b"wOF2" => Some(Self::Woff2),
            [0x00, 0x01, 0x00, 0x00] | b"true" => Some(Self::TrueType),
            b"OTTO" => Some(Self::OpenType),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
            Self::TrueType => "truetype",
            Self::OpenType => "opentype",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signatures() {
        assert_eq!(FontFormat::detect(b"wOF2\x00\x01"), Some(FontFormat::Woff2));
        assert_eq!(FontFormat::detect(&[0, 1, 0, 0, 0, 12]), Some(FontFormat::TrueType));
        assert_eq!(FontFormat::detect(b"OTTO"), Some(FontFormat::OpenType));
    }

    #[test]
    fn test_short_or_foreign_data() {
        assert_eq!(FontFormat::detect(b"wO"), None);
        assert_eq!(FontFormat::detect(b"<svg"), None);
    }
}
