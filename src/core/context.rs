//! Declaration contexts and accessibility levels.
//!
//! The casing rules depend only on the small closed set of declaration
//! kinds below, not on syntax-tree shape. The host maps whatever node kinds
//! its parser produces onto these variants before calling the engine.

use serde::{Deserialize, Serialize};

/// Syntactic role of the declaration that owns an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationContext {
    /// Class or struct declaration
    Type,
    /// Interface declaration
    Interface,
    /// Enum declaration
    Enum,
    /// Enum member declaration
    EnumMember,
    /// Delegate declaration
    Delegate,
    /// Event declaration
    Event,
    /// Method declaration
    Method,
    /// Property declaration
    Property,
    /// Field declaration
    Field,
    /// Method or lambda parameter
    Parameter,
    /// Local variable declaration
    LocalVariable,
    /// Namespace segment
    Namespace,
}

impl DeclarationContext {
    /// Whether identifiers in this context are camelCase rather than
    /// PascalCase.
    #[must_use]
    pub fn uses_camel_case(self) -> bool {
        matches!(self, Self::Parameter | Self::LocalVariable)
    }
}

/// Declared accessibility of a member, where the host exposes one.
///
/// Variants are ordered from most to least restrictive so that
/// `a <= Accessibility::Private` reads as "private or more restrictive".
/// Only fields consult this today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// No accessibility applies or none was declared
    NotApplicable,
    /// Private member
    Private,
    /// Protected member
    Protected,
    /// Internal member
    Internal,
    /// Public member
    Public,
}

impl Accessibility {
    /// Private, or unspecified on a plain member declaration.
    #[must_use]
    pub fn is_private_or_unspecified(self) -> bool {
        self <= Self::Private
    }
}
