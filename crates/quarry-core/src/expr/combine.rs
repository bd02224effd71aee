use crate::{
    expr::{BinaryOp, Expr, Lambda, Predicate},
    shape::Shaped,
};

///
/// Connective
///
/// The two operators a combination may use. Comparisons are not
/// connectives; combination only ever joins whole predicates.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    #[must_use]
    pub const fn binary_op(self) -> BinaryOp {
        match self {
            Self::And => BinaryOp::And,
            Self::Or => BinaryOp::Or,
        }
    }
}

/// Combine two predicates over the same shape into one, such that the
/// result matches exactly when `left <op> right` matches.
///
/// The left predicate's parameter becomes the combined parameter; the
/// right predicate is inlined through an invoke node that applies its
/// untouched lambda to that shared parameter. No second parameter is ever
/// introduced, and neither input is modified.
///
/// Combination is purely syntactic and cannot fail; the shared type
/// parameter makes operand compatibility a compile-time property.
#[must_use]
pub fn combine<T: Shaped>(
    op: Connective,
    left: &Predicate<T>,
    right: &Predicate<T>,
) -> Predicate<T> {
    let param = left.parameter();

    let body = Expr::Binary {
        op: op.binary_op(),
        left: Box::new(left.body().clone()),
        right: Box::new(Expr::Invoke {
            lambda: Box::new(right.lambda().clone()),
            argument: Box::new(Expr::Parameter(param.id)),
        }),
    };

    Predicate::from_lambda(Lambda { param, body })
}
