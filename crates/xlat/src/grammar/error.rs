// Map-file grammar errors.

/// Reason a map definition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapErrorKind {
    /// `#` not followed by three decimal digits, or a value above 255.
    BadDecimal,
    /// `$` not followed by two hexadecimal digits.
    BadHex,
    /// Backslash followed by tab, newline, carriage return, or end of text.
    BadEscape,
    /// Line ended before the separator.
    NoReplacement,
    /// Nothing before the separator.
    NoOriginal,
}

impl MapErrorKind {
    pub fn reason(self) -> &'static str {
        match self {
            MapErrorKind::BadDecimal => "bad decimal number",
            MapErrorKind::BadHex => "bad hexadecimal number",
            MapErrorKind::BadEscape => "bad escape",
            MapErrorKind::NoReplacement => "no replacement found",
            MapErrorKind::NoOriginal => "no original string",
        }
    }
}

impl std::fmt::Display for MapErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// A grammar error, positioned by 1-based data line and entry number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{map}: line {line} (entry {entry}): {kind}")]
pub struct MapError {
    /// Name of the map being parsed.
    pub map: String,
    pub line: usize,
    pub entry: usize,
    pub kind: MapErrorKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shape() {
        let err = MapError {
            map: "Custom Sort".to_string(),
            line: 3,
            entry: 3,
            kind: MapErrorKind::BadDecimal,
        };
        assert_eq!(err.to_string(), "Custom Sort: line 3 (entry 3): bad decimal number");
    }

    #[test]
    fn reasons_are_fixed() {
        let reasons: Vec<&str> = [
            MapErrorKind::BadDecimal,
            MapErrorKind::BadHex,
            MapErrorKind::BadEscape,
            MapErrorKind::NoReplacement,
            MapErrorKind::NoOriginal,
        ]
        .iter()
        .map(|k| k.reason())
        .collect();
        assert_eq!(
            reasons,
            [
                "bad decimal number",
                "bad hexadecimal number",
                "bad escape",
                "no replacement found",
                "no original string"
            ]
        );
    }
}
