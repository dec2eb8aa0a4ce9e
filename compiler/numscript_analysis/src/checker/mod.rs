//! Checker state and the declaration passes.
//!
//! # Module Structure
//!
//! - `statements`: statement walk and usage-site checks
//! - `expressions`: expression typing and operator rules
//! - `allocation`: literal portion arithmetic for `allocate`

mod allocation;
mod expressions;
mod statements;

use numscript_diagnostic::{Diagnostic, DiagnosticKind, DiagnosticQueue};
use numscript_ir::{Program, Range, Type};
use rustc_hash::FxHashMap;
use tracing::trace;

/// What the checker knows about a declared variable.
#[derive(Clone, Debug)]
struct VarInfo {
    /// `None` when the declared type name is unknown; such variables never
    /// produce type mismatches.
    ty: Option<Type>,
    range: Range,
    used: bool,
    /// Set when the statement walk reaches the declaration.
    visible: bool,
}

pub(crate) struct Checker {
    queue: DiagnosticQueue,
    variables: FxHashMap<String, VarInfo>,
    /// First-declaration order, for deterministic unused reporting.
    declared: Vec<String>,
}

impl Checker {
    pub(crate) fn new(queue: DiagnosticQueue) -> Self {
        Checker {
            queue,
            variables: FxHashMap::default(),
            declared: Vec::new(),
        }
    }

    pub(crate) fn check_program(&mut self, program: &Program) {
        self.collect_declarations(program);
        for stmt in &program.statements {
            self.check_statement(stmt);
        }
        self.report_unused();
    }

    pub(crate) fn finish(mut self) -> Vec<Diagnostic> {
        self.queue.flush()
    }

    fn report(&mut self, range: Range, kind: DiagnosticKind) {
        trace!(?kind, start = %range.start, "diagnostic");
        self.queue.push(range, kind);
    }

    /// Register every declaration before any use is checked. The first
    /// declaration of a name wins; later ones are reported as duplicates.
    fn collect_declarations(&mut self, program: &Program) {
        for decl in program.declarations() {
            if decl.ty.ty.is_none() {
                self.report(
                    decl.ty.range,
                    DiagnosticKind::UnknownType {
                        name: decl.ty.name.clone(),
                    },
                );
            }

            let name = &decl.name.name;
            if self.variables.contains_key(name) {
                self.report(
                    decl.name.range,
                    DiagnosticKind::DuplicateVariable { name: name.clone() },
                );
                continue;
            }

            self.variables.insert(
                name.clone(),
                VarInfo {
                    ty: decl.ty.ty,
                    range: decl.name.range,
                    used: false,
                    visible: false,
                },
            );
            self.declared.push(name.clone());
        }
    }

    fn report_unused(&mut self) {
        let unused: Vec<(String, Range)> = self
            .declared
            .iter()
            .filter_map(|name| {
                let info = self.variables.get(name)?;
                (!info.used).then(|| (name.clone(), info.range))
            })
            .collect();

        for (name, range) in unused {
            self.report(range, DiagnosticKind::UnusedVariable { name });
        }
    }
}
