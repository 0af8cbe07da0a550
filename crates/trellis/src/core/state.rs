//! Node naming.

use convert_case::{Case, Casing};

/// The name of a node, used in logs and tree dumps. Names are derived
/// from the widget's type by default, normalised to snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    name: String,
}

impl NodeName {
    /// Derive a name from an arbitrary string, dropping any module
    /// path prefix and converting to snake_case.
    pub fn convert(name: &str) -> Self {
        let base = name.rsplit("::").next().unwrap_or(name);
        Self {
            name: base.to_case(Case::Snake),
        }
    }
}

impl std::fmt::Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_type_paths() {
        assert_eq!(NodeName::convert("trellis::widgets::TextBox"), "text_box");
        assert_eq!(NodeName::convert("Button"), "button");
    }
}
