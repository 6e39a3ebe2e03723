//! Line-ending normalization.

use std::borrow::Cow;

use crate::hooks::{ArtifactContent, OutputArtifact, OutputHook};

/// Replace every CRLF sequence with LF.
///
/// Borrows the input when it contains no CRLF. Lone carriage returns are
/// left alone.
pub fn normalize_eol(content: &str) -> Cow<'_, str> {
    if content.contains("\r\n") {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Terminal output hook rewriting CRLF to LF in every textual artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EolNormalizer;

impl OutputHook for EolNormalizer {
    fn name(&self) -> &'static str {
        "eol-normalizer"
    }

    fn generate_bundle(&self, artifacts: &mut [OutputArtifact]) {
        for artifact in artifacts {
            if let ArtifactContent::Text(text) = &mut artifact.content {
                if let Cow::Owned(normalized) = normalize_eol(text) {
                    *text = normalized;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_crlf_to_lf() {
        assert_eq!(normalize_eol("a\r\nb\r\nc"), "a\nb\nc");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_eol("a\r\nb\r\nc").into_owned();
        let twice = normalize_eol(&once).into_owned();
        assert_eq!(once, twice);
        assert!(matches!(normalize_eol(&once), Cow::Borrowed(_)));
    }

    #[test]
    fn leaves_lone_carriage_returns() {
        assert_eq!(normalize_eol("a\rb\r\n"), "a\rb\n");
    }

    #[test]
    fn hook_rewrites_chunks_and_text_assets() {
        let mut artifacts = vec![
            OutputArtifact::chunk("tabulator.js", "var a;\r\nvar b;\r\n"),
            OutputArtifact::text_asset("tabulator.css", ".a{}\r\n.b{}"),
            OutputArtifact::text_asset("tabulator.js.map", "{}"),
        ];

        EolNormalizer.generate_bundle(&mut artifacts);

        assert_eq!(artifacts[0].content.as_text(), Some("var a;\nvar b;\n"));
        assert_eq!(artifacts[1].content.as_text(), Some(".a{}\n.b{}"));
        assert_eq!(artifacts[2].content.as_text(), Some("{}"));
    }

    #[test]
    fn hook_skips_binary_assets() {
        let bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        let mut artifacts = vec![OutputArtifact::binary_asset("logo.png", bytes.clone())];

        EolNormalizer.generate_bundle(&mut artifacts);

        assert_eq!(artifacts[0].content, ArtifactContent::Binary(bytes));
    }

    #[test]
    fn hook_twice_equals_once() {
        let mut once = vec![OutputArtifact::chunk("a.js", "x\r\ny\r\n")];
        EolNormalizer.generate_bundle(&mut once);
        let mut twice = once.clone();
        EolNormalizer.generate_bundle(&mut twice);
        assert_eq!(once, twice);
    }
}
