use std::fmt;

use numscript_ir::{Range, Type};

/// Severity level for diagnostics.
///
/// Ordered from most to least severe.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl Severity {
    /// Short lowercase name, as used in machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "info",
            Severity::Hint => "hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which arm of a conditional a diagnostic refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BranchSide {
    Then,
    Else,
}

/// The closed set of problems the toolchain can report statically.
///
/// Every kind fixes its own severity and message; there is no way for a
/// caller to reconfigure either.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// A syntax error reported by the parser.
    Parsing { message: String },
    /// A `vars` entry names a type that does not exist.
    UnknownType { name: String },
    /// A variable is used but never declared.
    UnboundVariable { name: String },
    /// A variable is declared more than once.
    DuplicateVariable { name: String },
    /// A variable is declared but never referenced.
    UnusedVariable { name: String },
    /// An expression's type does not fit where it is used.
    TypeMismatch { expected: Type, got: Type },
    /// Literal allocation portions add up to more than 100%.
    AllocationOverflow,
    /// Literal portions add up to less than 100% with no `remaining` branch.
    AllocationUnderflow,
    /// More than one `remaining` branch in one allocation.
    MultipleRemaining,
    /// A portion literal with a zero denominator.
    DivisionByZero,
    /// A `remaining` branch that can never receive anything.
    RedundantRemaining,
    /// A conditional branch that can never run.
    UnreachableBranch { branch: BranchSide, condition: bool },
    /// Source and destination are the same literal account.
    SelfTransfer,
    /// A literal zero amount is moved.
    ZeroAmount,
    /// An allocation with a single branch.
    SingleBranchAllocation,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::Parsing { .. }
            | DiagnosticKind::UnknownType { .. }
            | DiagnosticKind::UnboundVariable { .. }
            | DiagnosticKind::DuplicateVariable { .. }
            | DiagnosticKind::TypeMismatch { .. }
            | DiagnosticKind::AllocationOverflow
            | DiagnosticKind::AllocationUnderflow
            | DiagnosticKind::MultipleRemaining
            | DiagnosticKind::DivisionByZero => Severity::Error,
            DiagnosticKind::UnusedVariable { .. } | DiagnosticKind::RedundantRemaining => {
                Severity::Warning
            }
            DiagnosticKind::UnreachableBranch { .. } => Severity::Information,
            DiagnosticKind::SelfTransfer
            | DiagnosticKind::ZeroAmount
            | DiagnosticKind::SingleBranchAllocation => Severity::Hint,
        }
    }

    #[cold]
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::Parsing { message } => message.clone(),
            DiagnosticKind::UnknownType { name } => {
                let known: Vec<&str> = Type::ALL.iter().map(|ty| ty.as_str()).collect();
                format!(
                    "unknown type `{name}` (expected one of: {})",
                    known.join(", ")
                )
            }
            DiagnosticKind::UnboundVariable { name } => {
                format!("the variable `${name}` is not declared")
            }
            DiagnosticKind::DuplicateVariable { name } => {
                format!("the variable `${name}` is declared more than once")
            }
            DiagnosticKind::UnusedVariable { name } => {
                format!("the variable `${name}` is never used")
            }
            DiagnosticKind::TypeMismatch { expected, got } => {
                format!("type mismatch: expected `{expected}`, got `{got}`")
            }
            DiagnosticKind::AllocationOverflow => {
                "allocation portions add up to more than 100%".to_string()
            }
            DiagnosticKind::AllocationUnderflow => {
                "allocation portions add up to less than 100%; add a `remaining` branch"
                    .to_string()
            }
            DiagnosticKind::MultipleRemaining => {
                "an allocation may have at most one `remaining` branch".to_string()
            }
            DiagnosticKind::DivisionByZero => "portion has a zero denominator".to_string(),
            DiagnosticKind::RedundantRemaining => {
                "this `remaining` branch never receives anything: portions already add up to 100%"
                    .to_string()
            }
            DiagnosticKind::UnreachableBranch { branch, condition } => {
                let which = match branch {
                    BranchSide::Then => "then",
                    BranchSide::Else => "else",
                };
                format!("the {which} branch is unreachable: the condition is always `{condition}`")
            }
            DiagnosticKind::SelfTransfer => {
                "source and destination are the same account".to_string()
            }
            DiagnosticKind::ZeroAmount => {
                "this amount is zero, so no posting is produced".to_string()
            }
            DiagnosticKind::SingleBranchAllocation => {
                "an allocation with a single branch can be written as `send`".to_string()
            }
        }
    }
}

/// A located diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub range: Range,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(range: Range, kind: DiagnosticKind) -> Self {
        Diagnostic { range, kind }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.severity(),
            self.range.start,
            self.message()
        )
    }
}
