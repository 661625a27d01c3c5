//! Substitution slots understood by archetype templates.
//!
//! Templates only ever contain the tokens listed in [`Placeholder`]. Every
//! render call goes through a [`RenderContext`], so a call site cannot ask
//! for a token the archetype does not declare.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{
    error::DomainError,
    text::{substitute_placeholder, to_identifier_case, to_title_case},
    value_objects::ProjectName,
};

/// A named substitution slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// Human-readable project name: `#{PROJECT_NAME}`.
    ProjectName,
    /// Identifier-style namespace: `#{PROJECT_NAMESPACE}`.
    ProjectNamespace,
}

impl Placeholder {
    pub const ALL: [Placeholder; 2] = [Placeholder::ProjectName, Placeholder::ProjectNamespace];

    /// Literal token as it appears in template files.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::ProjectName => "#{PROJECT_NAME}",
            Self::ProjectNamespace => "#{PROJECT_NAMESPACE}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Values bound to placeholder slots for one render.
///
/// Unbound slots are left in the output untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    bindings: BTreeMap<Placeholder, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the manifest and tool configs: the raw project name.
    pub fn for_project(name: &ProjectName) -> Self {
        Self::new().with(Placeholder::ProjectName, name.as_str())
    }

    /// Context for the main schema: title-cased name and identifier-cased
    /// namespace.
    pub fn for_main_schema(name: &ProjectName) -> Result<Self, DomainError> {
        Ok(Self::new()
            .with(Placeholder::ProjectName, to_title_case(name.as_str())?)
            .with(Placeholder::ProjectNamespace, to_identifier_case(name.as_str())?))
    }

    /// Bind `value` to `slot`, replacing any earlier binding.
    pub fn with(mut self, slot: Placeholder, value: impl Into<String>) -> Self {
        self.bindings.insert(slot, value.into());
        self
    }

    pub fn get(&self, slot: Placeholder) -> Option<&str> {
        self.bindings.get(&slot).map(String::as_str)
    }

    /// Substitute every bound slot in `template`.
    pub fn render(&self, template: &str) -> String {
        self.bindings
            .iter()
            .fold(template.to_owned(), |text, (slot, value)| {
                substitute_placeholder(&text, slot.token(), value)
            })
    }
}
