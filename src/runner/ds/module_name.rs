//! Dotted module names (`tests.fixture`, `pkg.sub.mod`).

use std::fmt;
use std::rc::Rc;

use crate::runner::ds::error::ModuleError;

/// Name of a module as written by the caller.
///
/// Building one never fails; whether the text is a well-formed dotted path
/// is only checked when something tries to import it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    full_name: Rc<str>,
}

impl ModuleName {
    pub fn new(name: impl AsRef<str>) -> Self {
        ModuleName {
            full_name: Rc::from(name.as_ref()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.full_name
    }

    /// Components of the dotted path, in order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.full_name.split('.')
    }

    /// Is this a top-level (non-dotted) name?
    pub fn is_simple(&self) -> bool {
        !self.full_name.contains('.')
    }

    /// The enclosing package, `None` for top-level modules.
    ///
    /// E.g. `"a.b.c"` → `"a.b"`
    pub fn parent(&self) -> Option<ModuleName> {
        self.full_name
            .rfind('.')
            .map(|idx| ModuleName::new(&self.full_name[..idx]))
    }

    /// Last component, e.g. `"c"` for `"a.b.c"`.
    pub fn leaf(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(idx) => &self.full_name[idx + 1..],
            None => &self.full_name,
        }
    }

    /// Check that the name is a non-empty dotted path of identifiers.
    pub fn validate(&self) -> Result<(), ModuleError> {
        let invalid = |reason: &str| ModuleError::InvalidModuleName {
            name: self.full_name.to_string(),
            reason: reason.to_string(),
        };

        if self.full_name.is_empty() {
            return Err(invalid("empty module name"));
        }
        for part in self.parts() {
            if part.is_empty() {
                return Err(invalid("empty path component"));
            }
            if !is_identifier(part) {
                return Err(invalid(&format!("'{}' is not an identifier", part)));
            }
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        ModuleName::new(name)
    }
}

impl From<String> for ModuleName {
    fn from(name: String) -> Self {
        ModuleName::new(name)
    }
}

impl From<&ModuleName> for ModuleName {
    fn from(name: &ModuleName) -> Self {
        name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_and_leaf() {
        let name = ModuleName::new("a.b.c");
        assert_eq!(name.parent(), Some(ModuleName::new("a.b")));
        assert_eq!(name.leaf(), "c");
        assert!(!name.is_simple());
        assert_eq!(ModuleName::new("a").parent(), None);
    }

    #[test]
    fn test_validate() {
        assert!(ModuleName::new("tests.fixture").validate().is_ok());
        assert!(ModuleName::new("_private.mod_2").validate().is_ok());
        assert!(ModuleName::new("").validate().is_err());
        assert!(ModuleName::new("a..b").validate().is_err());
        assert!(ModuleName::new(".a").validate().is_err());
        assert!(ModuleName::new("a.1b").validate().is_err());
        assert!(ModuleName::new("a/b").validate().is_err());
    }
}
