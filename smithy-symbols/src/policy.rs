/*!
Policy resolutions that route a non-fatal condition to either the issue bag or a fatal
abort (spec.md §4.4, §4.5, §7).
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// How a policy-controlled condition should be handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Record an issue and continue.
    Skip,
    /// Return a fatal `PolicyAbort` (parser) or the condition's own fatal error
    /// (emitter).
    Abort,
}

impl Resolution {
    /// Returns `true` for `Resolution::Abort`.
    pub fn is_abort(&self) -> bool {
        matches!(self, Resolution::Abort)
    }
}

///
/// Parser policy (spec.md §4.4): two independent resolutions.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePolicy {
    /// Governs unrecognized object properties.
    pub property: Resolution,
    /// Governs traits with no registered parser.
    pub r#trait: Resolution,
}

impl ParsePolicy {
    /// Every resolution set to `Abort`; the strictest parser policy.
    pub fn strict() -> Self {
        Self {
            property: Resolution::Abort,
            r#trait: Resolution::Abort,
        }
    }

    /// Every resolution set to `Skip`; the most permissive parser policy.
    pub fn lenient() -> Self {
        Self {
            property: Resolution::Skip,
            r#trait: Resolution::Skip,
        }
    }
}

impl Default for ParsePolicy {
    /// Lenient: unrecognized input is recorded rather than treated as fatal, matching
    /// the teacher's own default of reporting over failing outright.
    fn default() -> Self {
        Self::lenient()
    }
}

///
/// Emitter policy (spec.md §4.5): three independent resolutions.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitPolicy {
    /// Governs a reference to an undeclared shape.
    pub unknown_shape: Resolution,
    /// Governs a root shape in an illegal root position.
    pub invalid_root: Resolution,
    /// Governs a failure while emitting a specific shape.
    pub shape_codegen_fail: Resolution,
}

impl EmitPolicy {
    /// Every resolution set to `Abort`; the strictest emitter policy.
    pub fn strict() -> Self {
        Self {
            unknown_shape: Resolution::Abort,
            invalid_root: Resolution::Abort,
            shape_codegen_fail: Resolution::Abort,
        }
    }

    /// Every resolution set to `Skip`; the most permissive emitter policy.
    pub fn lenient() -> Self {
        Self {
            unknown_shape: Resolution::Skip,
            invalid_root: Resolution::Skip,
            shape_codegen_fail: Resolution::Skip,
        }
    }
}

impl Default for EmitPolicy {
    /// Strict: an emitter that silently drops broken references would produce a
    /// target-language file that doesn't compile, which is worse than failing loudly.
    fn default() -> Self {
        Self::strict()
    }
}
