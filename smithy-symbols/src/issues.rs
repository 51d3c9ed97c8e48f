/*!
Non-fatal issue tracking (spec.md §6.4). Where policy resolves a condition to `skip`
rather than `abort`, the condition is recorded here instead of aborting the pipeline.
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// One recorded, non-fatal condition encountered while parsing or emitting a model.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    /// An unrecognized top-level or shape property was skipped (`policy.property ==
    /// skip`).
    ParseUnexpectedProp {
        /// The shape or context the property was found on, for diagnostics.
        context: String,
        /// The unrecognized property key.
        item: String,
    },
    /// A trait with no registered parser was skipped (`policy.trait == skip`).
    ParseUnknownTrait {
        /// The shape the trait was applied to, for diagnostics.
        context: String,
        /// The unrecognized trait id, formatted for diagnostics.
        item: String,
    },
    /// A non-fatal parse condition, carrying the formatted underlying error kind.
    ParseError {
        /// The formatted `ErrorKind` that produced this issue.
        kind: String,
    },
    /// The emitter encountered a member or reference targeting an undeclared shape
    /// (`policy.unknown_shape == skip`).
    CodegenUnknownShape {
        /// The missing shape's raw id value.
        id: u32,
    },
    /// The emitter's root shape was not a legal root position (`policy.invalid_root ==
    /// skip`).
    CodegenInvalidRoot {
        /// The root shape's name if known, otherwise its id formatted as a string.
        name_or_id: String,
    },
    /// A shape's emission itself failed (`policy.shape_codegen_fail == skip`).
    CodegenShapeFail {
        /// The formatted underlying error.
        err: String,
        /// The shape or member being emitted when the failure occurred.
        item: String,
    },
    /// The Readme hook failed to render.
    ReadmeError {
        /// The formatted underlying error.
        kind: String,
    },
    /// A condition raised outside parsing/emission proper (e.g. rules-engine lowering).
    ProcessError {
        /// The formatted underlying error.
        kind: String,
    },
}

///
/// An ordered collection of [`Issue`]s, append-only, one per model per phase (spec.md
/// §5: "each gets its own Symbol Store, issue bag, arena, and emitter").
///
#[derive(Clone, Debug, Default)]
pub struct IssueBag {
    issues: Vec<Issue>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl IssueBag {
    /// An empty issue bag.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Record an issue, preserving arrival order.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Returns `true` if no issues have been recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Iterate recorded issues in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Consume the bag, returning its issues in arrival order.
    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}
