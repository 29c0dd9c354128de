//! Export templates
//!
//! Table-driven description of how each text format wraps content and which
//! marker each insertion mode anchors on.

/// Marker opening a LaTeX document body
pub const DOCUMENT_BEGIN: &str = r"\begin{document}";

/// Marker closing a LaTeX document body
pub const DOCUMENT_END: &str = r"\end{document}";

/// Per-format wrapping rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTemplate {
    /// Extension appended to filenames that have none
    pub extension: &'static str,
    /// Whether the bracket set's document markers are emitted
    pub document_markers: bool,
}

pub const PLAIN_TEMPLATE: FormatTemplate = FormatTemplate {
    extension: "txt",
    document_markers: false,
};

pub const MARKDOWN_TEMPLATE: FormatTemplate = FormatTemplate {
    extension: "md",
    document_markers: false,
};

pub const TEX_FRAGMENT_TEMPLATE: FormatTemplate = FormatTemplate {
    extension: "tex",
    document_markers: false,
};

pub const TEX_DOCUMENT_TEMPLATE: FormatTemplate = FormatTemplate {
    extension: "tex",
    document_markers: true,
};

/// Where an insertion goes relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    /// Replace the whole file
    Replace,
    /// Right after the first occurrence of the marker
    After(&'static str),
    /// Right before the last occurrence of the marker
    Before(&'static str),
}

impl Splice {
    /// Splice `insert` into `existing`; `None` when the anchor is absent
    pub fn apply(self, existing: &str, insert: &str) -> Option<String> {
        match self {
            Splice::Replace => Some(insert.to_string()),
            Splice::After(marker) => {
                let at = existing.find(marker)? + marker.len();
                Some(join_at(existing, at, insert))
            }
            Splice::Before(marker) => {
                let at = existing.rfind(marker)?;
                Some(join_at(existing, at, insert))
            }
        }
    }

    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Splice::Replace => None,
            Splice::After(marker) | Splice::Before(marker) => Some(marker),
        }
    }
}

fn join_at(existing: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(existing.len() + insert.len());
    out.push_str(&existing[..at]);
    out.push_str(insert);
    out.push_str(&existing[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_after_first_marker() {
        let doc = "a\\begin{document}b\\begin{document}c";
        let out = Splice::After(DOCUMENT_BEGIN).apply(doc, "X").unwrap();
        assert_eq!(out, "a\\begin{document}Xb\\begin{document}c");
    }

    #[test]
    fn test_splice_before_last_marker() {
        let doc = "x\\end{document}y\\end{document}";
        let out = Splice::Before(DOCUMENT_END).apply(doc, "Z").unwrap();
        assert_eq!(out, "x\\end{document}yZ\\end{document}");
    }

    #[test]
    fn test_splice_missing_anchor() {
        assert_eq!(Splice::After(DOCUMENT_BEGIN).apply("plain", "X"), None);
        assert_eq!(Splice::Replace.apply("old", "new").as_deref(), Some("new"));
    }
}
