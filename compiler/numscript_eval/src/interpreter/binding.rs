//! Variable binding.
//!
//! Every declaration binds before the first statement runs, in document
//! order, so defaults see the balances and metadata of the starting store.

use numscript_ir::{ExprKind, Program, Type, VarDecl};
use rustc_hash::FxHashSet;
use tracing::debug;

use super::Evaluator;
use crate::coerce::coerce;
use crate::errors::{BindingError, EvalError, EvalResult};
use crate::value::Value;

impl Evaluator<'_> {
    /// Log caller values that no declaration will consume.
    pub(super) fn report_undeclared(&self, program: &Program) {
        let declared: FxHashSet<&str> = program
            .declarations()
            .map(|decl| decl.name.name.as_str())
            .collect();
        for name in self.variables.keys() {
            if !declared.contains(name.as_str()) {
                debug!(name = %name, "ignoring undeclared variable");
            }
        }
    }

    /// Bind every declaration in `program`, wherever its `vars` block sits.
    pub(super) fn bind_all(&mut self, program: &Program) -> EvalResult<()> {
        for decl in program.declarations() {
            self.bind(decl)?;
        }
        debug!(bound = self.env.len(), "variables bound");
        Ok(())
    }

    fn bind(&mut self, decl: &VarDecl) -> EvalResult<()> {
        let name = &decl.name.name;
        if self.env.contains_key(name) {
            debug!(name = %name, "ignoring duplicate declaration");
            return Ok(());
        }

        let Some(ty) = decl.ty.ty else {
            return Err(EvalError::new(BindingError::UnknownType {
                name: name.clone(),
                type_name: decl.ty.name.clone(),
            })
            .at(decl.ty.range));
        };

        let value = self.resolve_binding(decl, ty)?;
        debug!(name = %name, ty = %ty, value = %value, "bound variable");
        self.env.insert(name.clone(), value);
        Ok(())
    }

    fn resolve_binding(&self, decl: &VarDecl, ty: Type) -> EvalResult<Value> {
        let name = &decl.name.name;
        if let Some(raw) = self.variables.get(name) {
            return coerce_named(name, raw, ty).map_err(|e| e.at(decl.name.range));
        }

        let Some(default) = &decl.default else {
            return Err(EvalError::new(BindingError::Missing { name: name.clone() })
                .at(decl.name.range));
        };

        if let ExprKind::Meta { account, key } = &default.kind {
            let raw = self
                .eval_meta(account, key)
                .map_err(|e| e.at(default.range))?;
            return coerce_named(name, &raw, ty).map_err(|e| e.at(default.range));
        }

        let value = self.eval(default)?;
        if value.ty() != ty {
            return Err(EvalError::type_mismatch(ty, value.ty()).at(default.range));
        }
        Ok(value)
    }
}

fn coerce_named(name: &str, raw: &str, ty: Type) -> EvalResult<Value> {
    coerce(raw, ty).ok_or_else(|| {
        EvalError::new(BindingError::Malformed {
            name: name.to_string(),
            ty,
            value: raw.to_string(),
        })
    })
}
