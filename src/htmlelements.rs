use ahash::{HashSet, HashSetExt};

/// The elements that never take children and never get a closing tag.
///
/// An open tag with one of these names is treated exactly like an explicit
/// `<name/>`: the node is composed the moment it is created.
const VOID_NAMES: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "link", "meta", "param",
    "source",
];

#[derive(Debug)]
pub(crate) struct VoidElements {
    names: HashSet<&'static str>,
}

impl VoidElements {
    pub(crate) fn new() -> Self {
        let mut names = HashSet::new();
        for name in VOID_NAMES {
            let _ = names.insert(*name);
        }
        VoidElements { names }
    }

    /// Case-insensitive membership test on the full node name. A prefixed
    /// name like `x:br` is not a void element.
    pub(crate) fn matches(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.names.contains(name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_matches_any_case() {
        let void = VoidElements::new();
        assert!(void.matches("br"));
        assert!(void.matches("BR"));
        assert!(void.matches("Img"));
    }

    #[test]
    fn test_membership_is_exact() {
        let void = VoidElements::new();
        assert!(void.matches("col"));
        assert!(!void.matches("colgroup"));
        assert!(!void.matches("x:br"));
    }
}
