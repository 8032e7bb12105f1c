//! Closed vocabulary of declaration modifiers and bridging attributes.
//!
//! Rules never compare raw strings against modifier names. They classify a
//! token once through [`Modifier::from_text`] or [`BridgeAttribute::from_text`]
//! and match on the result, so supporting a new word is a change to these
//! enums that every `match` has to acknowledge.

/// The dispatch modifier inserted on eligible declarations.
pub const DYNAMIC: &str = "dynamic";
/// Class-wide bridging attribute.
pub const OBJC_MEMBERS: &str = "@objcMembers";
/// Per-declaration bridging attribute.
pub const OBJC: &str = "@objc";
/// Opt-out attribute.
pub const NONOBJC: &str = "@nonobjc";

/// Access-control levels, widest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Open,
    Public,
    Internal,
    FilePrivate,
    Private,
}

/// How a modifier participates in the `override → access → dynamic →
/// static/class → keyword` ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierRole {
    Override,
    /// Any access level except `private`.
    AccessLevel,
    /// `private`, the narrowest access level.
    RestrictedVisibility,
    /// `static` or `class`.
    TypeLevel,
    /// `dynamic`.
    Dispatch,
    Other,
}

/// A recognised declaration modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Override,
    Access(AccessLevel),
    Static,
    Class,
    Dynamic,
    Final,
    Required,
    Convenience,
    Mutating,
    Nonmutating,
    Lazy,
    Weak,
    Unowned,
    Optional,
    Indirect,
    Prefix,
    Postfix,
    Infix,
    Nonisolated,
}

impl Modifier {
    /// Look up a modifier by its source spelling.
    pub fn from_text(text: &str) -> Option<Self> {
        let modifier = match text {
            "override" => Modifier::Override,
            "open" => Modifier::Access(AccessLevel::Open),
            "public" => Modifier::Access(AccessLevel::Public),
            "internal" => Modifier::Access(AccessLevel::Internal),
            "fileprivate" => Modifier::Access(AccessLevel::FilePrivate),
            "private" => Modifier::Access(AccessLevel::Private),
            "static" => Modifier::Static,
            "class" => Modifier::Class,
            "dynamic" => Modifier::Dynamic,
            "final" => Modifier::Final,
            "required" => Modifier::Required,
            "convenience" => Modifier::Convenience,
            "mutating" => Modifier::Mutating,
            "nonmutating" => Modifier::Nonmutating,
            "lazy" => Modifier::Lazy,
            "weak" => Modifier::Weak,
            "unowned" => Modifier::Unowned,
            "optional" => Modifier::Optional,
            "indirect" => Modifier::Indirect,
            "prefix" => Modifier::Prefix,
            "postfix" => Modifier::Postfix,
            "infix" => Modifier::Infix,
            "nonisolated" => Modifier::Nonisolated,
            _ => return None,
        };
        Some(modifier)
    }

    pub fn role(self) -> ModifierRole {
        match self {
            Modifier::Override => ModifierRole::Override,
            Modifier::Access(AccessLevel::Private) => ModifierRole::RestrictedVisibility,
            Modifier::Access(_) => ModifierRole::AccessLevel,
            Modifier::Static | Modifier::Class => ModifierRole::TypeLevel,
            Modifier::Dynamic => ModifierRole::Dispatch,
            Modifier::Final
            | Modifier::Required
            | Modifier::Convenience
            | Modifier::Mutating
            | Modifier::Nonmutating
            | Modifier::Lazy
            | Modifier::Weak
            | Modifier::Unowned
            | Modifier::Optional
            | Modifier::Indirect
            | Modifier::Prefix
            | Modifier::Postfix
            | Modifier::Infix
            | Modifier::Nonisolated => ModifierRole::Other,
        }
    }
}

/// Attributes that control Objective-C bridging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BridgeAttribute {
    /// `@objcMembers`
    ObjcMembers,
    /// `@objc`, optionally followed by a parenthesised runtime name.
    Objc,
    /// `@nonobjc`
    Nonobjc,
    /// Any other attribute (`@available`, `@discardableResult`, ...).
    Other,
}

impl BridgeAttribute {
    pub fn from_text(text: &str) -> Self {
        match text {
            OBJC_MEMBERS => BridgeAttribute::ObjcMembers,
            OBJC => BridgeAttribute::Objc,
            NONOBJC => BridgeAttribute::Nonobjc,
            _ => BridgeAttribute::Other,
        }
    }
}
