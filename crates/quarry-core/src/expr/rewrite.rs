//! Module: expr::rewrite
//! Responsibility: retype a predicate's tree against a structurally
//! compatible shape, substituting member references by name.
//! Does not own: evaluation semantics or predicate combination.

use crate::{
    expr::{Expr, Lambda, ParamId, Parameter, Predicate},
    shape::{FieldKind, Shaped, TypeModel},
};
use thiserror::Error as ThisError;

///
/// RewriteError
///
/// The rewriter's only failure mode: a member reference that does not
/// resolve on the destination shape. Fatal to the rewrite call and never
/// retried — the inputs are pure, so retrying cannot change the outcome.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RewriteError {
    #[error("no member named '{member}' on '{on}'")]
    MemberNotFound { on: String, member: String },
}

///
/// NodeShape
///
/// Resolved shape of an already-rewritten node. Only record shapes admit
/// further member access; everything else terminates a member chain and
/// routes the next access to the failure path.
///

enum NodeShape {
    Record(&'static TypeModel),
    Terminal(String),
}

impl NodeShape {
    fn of_kind(kind: &'static FieldKind) -> Self {
        match kind.record_model() {
            Some(model) => Self::Record(model),
            None => Self::Terminal(kind.to_string()),
        }
    }
}

/// Rewrite a predicate over `S` into an equivalent predicate over `D`.
///
/// One fresh parameter typed `D` replaces the source parameter; member
/// accesses resolve, case-sensitively and member-by-member, against the
/// rewritten parent's model. Operator semantics are never altered, and
/// the result holds no reference to any source parameter.
pub fn rewrite<S: Shaped, D: Shaped>(source: &Predicate<S>) -> Result<Predicate<D>, RewriteError> {
    let mut rewriter = Rewriter {
        source_path: S::MODEL.path,
        dest: D::MODEL,
        bindings: Vec::new(),
    };

    let lambda = rewriter.rewrite_lambda(source.lambda())?;

    Ok(Predicate::from_lambda(lambda))
}

struct Rewriter {
    source_path: &'static str,
    dest: &'static TypeModel,
    /// In-scope parameter substitutions, innermost last.
    bindings: Vec<(ParamId, Parameter)>,
}

impl Rewriter {
    fn rewrite_lambda(&mut self, lambda: &Lambda) -> Result<Lambda, RewriteError> {
        // Lambdas typed against the source shape are retyped with their
        // own fresh parameter; any other lambda keeps its parameter and
        // is only descended into.
        let param = if lambda.param.shape.path == self.source_path {
            Parameter::fresh(self.dest)
        } else {
            lambda.param
        };

        self.bindings.push((lambda.param.id, param));
        let body = self.rewrite_expr(&lambda.body);
        self.bindings.pop();

        Ok(Lambda { param, body: body?.0 })
    }

    fn rewrite_expr(&mut self, expr: &Expr) -> Result<(Expr, NodeShape), RewriteError> {
        match expr {
            Expr::Parameter(id) => match self.lookup(*id) {
                Some(param) => Ok((
                    Expr::Parameter(param.id),
                    NodeShape::Record(param.shape),
                )),
                // Free parameters cannot occur in predicates built through
                // this crate; pass one through untouched rather than guess.
                None => Ok((expr.clone(), NodeShape::Terminal("parameter".to_string()))),
            },

            Expr::Member { parent, name } => {
                let (parent, parent_shape) = self.rewrite_expr(parent)?;

                let model = match parent_shape {
                    NodeShape::Record(model) => model,
                    NodeShape::Terminal(on) => {
                        return Err(RewriteError::MemberNotFound {
                            on,
                            member: name.clone(),
                        });
                    }
                };

                let field = model.field(name).ok_or_else(|| RewriteError::MemberNotFound {
                    on: model.path.to_string(),
                    member: name.clone(),
                })?;

                Ok((
                    Expr::Member {
                        parent: Box::new(parent),
                        name: name.clone(),
                    },
                    NodeShape::of_kind(&field.kind),
                ))
            }

            Expr::Constant(value) => Ok((
                Expr::Constant(value.clone()),
                NodeShape::Terminal(format!("{} literal", value.variant())),
            )),

            Expr::Unary { op, operand } => {
                let (operand, _) = self.rewrite_expr(operand)?;

                Ok((
                    Expr::Unary {
                        op: *op,
                        operand: Box::new(operand),
                    },
                    NodeShape::Terminal("expression".to_string()),
                ))
            }

            Expr::Binary { op, left, right } => {
                let (left, _) = self.rewrite_expr(left)?;
                let (right, _) = self.rewrite_expr(right)?;

                Ok((
                    Expr::Binary {
                        op: *op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    NodeShape::Terminal("expression".to_string()),
                ))
            }

            Expr::Invoke { lambda, argument } => {
                let (argument, _) = self.rewrite_expr(argument)?;
                let lambda = self.rewrite_lambda(lambda)?;

                Ok((
                    Expr::Invoke {
                        lambda: Box::new(lambda),
                        argument: Box::new(argument),
                    },
                    NodeShape::Terminal("expression".to_string()),
                ))
            }
        }
    }

    fn lookup(&self, id: ParamId) -> Option<Parameter> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| *bound == id)
            .map(|(_, param)| *param)
    }
}
