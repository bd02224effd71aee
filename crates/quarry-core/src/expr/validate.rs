use crate::{
    expr::{Expr, Lambda, ParamId, Predicate},
    shape::{FieldKind, Shaped, TypeModel},
};
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{field}' on '{on}'")]
    UnknownField { on: String, field: String },
}

///
/// Resolution
///
/// Shape of a validated node: records admit further member access, any
/// terminal shape ends the chain.
///

enum Resolution {
    Record(&'static TypeModel),
    Terminal(String),
}

impl Resolution {
    fn of_kind(kind: &'static FieldKind) -> Self {
        match kind.record_model() {
            Some(model) => Self::Record(model),
            None => Self::Terminal(kind.to_string()),
        }
    }
}

/// Check every member reference in a predicate against the models its
/// parameters carry. Backends call this before evaluation so that a
/// mistyped field name surfaces as an error instead of a silent
/// non-match.
pub fn validate<T: Shaped>(predicate: &Predicate<T>) -> Result<(), ValidateError> {
    let mut scopes: Vec<(ParamId, &'static TypeModel)> = Vec::new();

    validate_lambda(predicate.lambda(), &mut scopes)
}

fn validate_lambda(
    lambda: &Lambda,
    scopes: &mut Vec<(ParamId, &'static TypeModel)>,
) -> Result<(), ValidateError> {
    scopes.push((lambda.param.id, lambda.param.shape));
    let result = validate_expr(&lambda.body, scopes);
    scopes.pop();

    result
}

fn validate_expr(
    expr: &Expr,
    scopes: &mut Vec<(ParamId, &'static TypeModel)>,
) -> Result<(), ValidateError> {
    match expr {
        Expr::Parameter(_) | Expr::Constant(_) => Ok(()),

        Expr::Member { .. } => resolve(expr, scopes).map(|_| ()),

        Expr::Unary { operand, .. } => validate_expr(operand, scopes),

        Expr::Binary { left, right, .. } => {
            validate_expr(left, scopes)?;
            validate_expr(right, scopes)
        }

        Expr::Invoke { lambda, argument } => {
            validate_expr(argument, scopes)?;
            validate_lambda(lambda, scopes)
        }
    }
}

/// Resolve a node's shape, validating member chains member by member.
fn resolve(
    expr: &Expr,
    scopes: &mut Vec<(ParamId, &'static TypeModel)>,
) -> Result<Resolution, ValidateError> {
    match expr {
        Expr::Parameter(id) => Ok(scopes
            .iter()
            .rev()
            .find(|(bound, _)| bound == id)
            .map_or_else(
                || Resolution::Terminal("parameter".to_string()),
                |(_, model)| Resolution::Record(*model),
            )),

        Expr::Member { parent, name } => {
            let model = match resolve(parent, scopes)? {
                Resolution::Record(model) => model,
                Resolution::Terminal(on) => {
                    return Err(ValidateError::UnknownField {
                        on,
                        field: name.clone(),
                    });
                }
            };

            let field = model.field(name).ok_or_else(|| ValidateError::UnknownField {
                on: model.path.to_string(),
                field: name.clone(),
            })?;

            Ok(Resolution::of_kind(&field.kind))
        }

        _ => {
            validate_expr(expr, scopes)?;

            Ok(Resolution::Terminal("expression".to_string()))
        }
    }
}
