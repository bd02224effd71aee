use crate::{
    expr::{BinaryOp, Expr, Lambda, ParamId, UnaryOp},
    value::{Value, compare_eq, strict_order_cmp},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during evaluation.
/// This distinguishes between a missing field and a present field whose
/// value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// This decouples evaluation from concrete model types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// Computed
///
/// Intermediate result of evaluating one node: either a plain value, or
/// the row a parameter is bound to (rows only become values field by
/// field, never wholesale).
///

enum Computed<'a> {
    Row(&'a dyn Row),
    Value(Value),
}

///
/// Scope
///
/// Parameter bindings in evaluation order. Invoke nodes push the lambda's
/// parameter for the duration of the body and pop it afterwards.
///

struct Scope<'a> {
    bindings: Vec<(ParamId, Computed<'a>)>,
}

impl<'a> Scope<'a> {
    fn lookup(&self, id: ParamId) -> Option<Computed<'a>> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| *bound == id)
            .map(|(_, computed)| match computed {
                Computed::Row(row) => Computed::Row(*row),
                Computed::Value(value) => Computed::Value(value.clone()),
            })
    }
}

///
/// Evaluate a lambda against a single row.
///
/// This function performs **pure runtime evaluation**: no shape access, no
/// backend logic. Connectives evaluate left to right and short-circuit.
/// Any invalid comparison (mixed variants, missing field, non-boolean
/// operand) evaluates to `false`.
///
/// CONTRACT: predicates should be validated before evaluation; an
/// unresolvable member here is a non-match, not an error.
///
#[must_use]
pub(crate) fn eval_lambda<R: Row>(lambda: &Lambda, row: &R) -> bool {
    let mut scope = Scope {
        bindings: vec![(lambda.param.id, Computed::Row(row))],
    };

    eval_bool(&lambda.body, &mut scope).unwrap_or(false)
}

/// Evaluate a node expected to produce a boolean.
fn eval_bool(expr: &Expr, scope: &mut Scope<'_>) -> Option<bool> {
    match expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand,
        } => eval_bool(operand, scope).map(|value| !value),

        Expr::Binary { op, left, right } => eval_binary(*op, left, right, scope),

        Expr::Invoke { lambda, argument } => {
            let bound = eval_expr(argument, scope)?;
            scope.bindings.push((lambda.param.id, bound));
            let result = eval_bool(&lambda.body, scope);
            scope.bindings.pop();

            result
        }

        _ => match eval_expr(expr, scope)? {
            Computed::Value(Value::Bool(value)) => Some(value),
            _ => None,
        },
    }
}

fn eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    scope: &mut Scope<'_>,
) -> Option<bool> {
    match op {
        // Left-to-right with short-circuit: AND skips the right side when
        // the left is false, OR when the left is true.
        BinaryOp::And => {
            if eval_bool(left, scope)? {
                eval_bool(right, scope)
            } else {
                Some(false)
            }
        }
        BinaryOp::Or => {
            if eval_bool(left, scope)? {
                Some(true)
            } else {
                eval_bool(right, scope)
            }
        }

        _ => {
            let left = eval_value(left, scope)?;
            let right = eval_value(right, scope)?;

            compare_values(op, &left, &right)
        }
    }
}

/// Evaluate a node expected to produce a plain value.
fn eval_value(expr: &Expr, scope: &mut Scope<'_>) -> Option<Value> {
    match eval_expr(expr, scope)? {
        Computed::Value(value) => Some(value),
        // A bare row is not a comparable value.
        Computed::Row(_) => None,
    }
}

fn eval_expr<'a>(expr: &Expr, scope: &mut Scope<'a>) -> Option<Computed<'a>> {
    match expr {
        Expr::Parameter(id) => scope.lookup(*id),

        Expr::Member { parent, name } => match eval_expr(parent, scope)? {
            Computed::Row(row) => match row.field(name) {
                FieldPresence::Present(value) => Some(Computed::Value(value)),
                FieldPresence::Missing => None,
            },
            Computed::Value(value) => value.entry(name).cloned().map(Computed::Value),
        },

        Expr::Constant(value) => Some(Computed::Value(value.clone())),

        Expr::Unary { .. } | Expr::Binary { .. } | Expr::Invoke { .. } => {
            eval_bool(expr, scope).map(|value| Computed::Value(Value::Bool(value)))
        }
    }
}

fn compare_values(op: BinaryOp, left: &Value, right: &Value) -> Option<bool> {
    match op {
        BinaryOp::Eq => compare_eq(left, right),
        BinaryOp::Ne => compare_eq(left, right).map(|equal| !equal),

        BinaryOp::Lt => strict_order_cmp(left, right).map(Ordering::is_lt),
        BinaryOp::Lte => strict_order_cmp(left, right).map(Ordering::is_le),
        BinaryOp::Gt => strict_order_cmp(left, right).map(Ordering::is_gt),
        BinaryOp::Gte => strict_order_cmp(left, right).map(Ordering::is_ge),

        BinaryOp::In => in_list(left, right),
        BinaryOp::Contains => contains(left, right),

        BinaryOp::StartsWith => text_pair(left, right)
            .map(|(actual, needle)| actual.starts_with(needle)),
        BinaryOp::EndsWith => text_pair(left, right)
            .map(|(actual, needle)| actual.ends_with(needle)),

        BinaryOp::And | BinaryOp::Or => None,
    }
}

/// Check whether a value equals any element in a list.
///
/// A match wins outright; otherwise at least one valid comparison is
/// required before reporting a definite non-match.
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    let mut saw_valid = false;
    for item in items {
        match compare_eq(actual, item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}

/// Containment: list membership, or substring for text operands.
fn contains(actual: &Value, needle: &Value) -> Option<bool> {
    match actual {
        Value::List(items) => Some(
            items
                .iter()
                // Invalid element comparisons are treated as non-matches.
                .any(|item| compare_eq(item, needle).unwrap_or(false)),
        ),
        Value::Text(_) => text_pair(actual, needle).map(|(text, sub)| text.contains(sub)),
        _ => None,
    }
}

fn text_pair<'v>(left: &'v Value, right: &'v Value) -> Option<(&'v str, &'v str)> {
    match (left, right) {
        (Value::Text(l), Value::Text(r)) => Some((l.as_str(), r.as_str())),
        _ => None,
    }
}
