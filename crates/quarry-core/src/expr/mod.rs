mod combine;
mod eval;
mod rewrite;
mod validate;

#[cfg(test)]
mod tests;

use crate::{
    shape::{Shaped, TypeModel},
    value::Value,
};
use std::{
    fmt,
    marker::PhantomData,
    ops::{BitAnd, BitOr},
    sync::atomic::{AtomicU64, Ordering},
};

pub use combine::{Connective, combine};
pub use eval::{FieldPresence, Row};
pub use rewrite::{RewriteError, rewrite};
pub use validate::{ValidateError, validate};

///
/// Expression AST
///
/// Pure, immutable representation of single-parameter boolean functions.
/// This layer contains no member resolution, evaluation, or backend
/// semantics. All interpretation occurs in later passes:
///
/// - validation (shape-aware)
/// - rewriting (shape-to-shape)
/// - evaluation (row-level)
///

///
/// ParamId
///
/// Process-unique identity of one lambda parameter. Freshness is what
/// keeps substitution honest: a rewritten or combined tree can never
/// capture a parameter it did not introduce.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParamId(u64);

impl ParamId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);

        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

///
/// Parameter
///
/// A lambda's single typed parameter: identity plus the static shape its
/// member accesses resolve against.
///

#[derive(Clone, Copy, Debug)]
pub struct Parameter {
    pub id: ParamId,
    pub shape: &'static TypeModel,
}

impl Parameter {
    pub(crate) fn fresh(shape: &'static TypeModel) -> Self {
        Self {
            id: ParamId::fresh(),
            shape,
        }
    }
}

// Identity is the id alone; ids are never reused across shapes.
impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Parameter {}

///
/// UnaryOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOp {
    Not,
}

///
/// BinaryOp
///
/// Connectives and comparisons share one operator space, matching the
/// single binary node kind in the tree.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contains,
    StartsWith,
    EndsWith,
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Placeholder bound to an enclosing lambda's parameter.
    Parameter(ParamId),
    /// Named field access rooted at another node.
    Member { parent: Box<Expr>, name: String },
    /// Fixed literal.
    Constant(Value),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Applies a lambda's body to a substituted argument. The combinator
    /// uses this to inline a second predicate without renaming its
    /// internals.
    Invoke {
        lambda: Box<Lambda>,
        argument: Box<Expr>,
    },
}

impl Expr {
    /// Access a named field on this node.
    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Member {
            parent: Box::new(self),
            name: name.into(),
        }
    }

    /// Join this node with `right` under an arbitrary binary operator.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    fn compare(self, op: BinaryOp, value: impl Into<Value>) -> Self {
        self.binary(op, Self::Constant(value.into()))
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Eq, value)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn ne(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Ne, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Lte, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Gte, value)
    }

    #[must_use]
    pub fn in_list(self, values: Vec<Value>) -> Self {
        self.compare(BinaryOp::In, Value::List(values))
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::Contains, value)
    }

    #[must_use]
    pub fn starts_with(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::StartsWith, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<Value>) -> Self {
        self.compare(BinaryOp::EndsWith, value)
    }

    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }
}

///
/// Lambda
///
/// One parameter and a body. Invariant: the body's only free parameter is
/// `param`; every other parameter reference is bound by a nested lambda.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lambda {
    pub param: Parameter,
    pub body: Expr,
}

///
/// Predicate
///
/// Typed, immutable wrapper binding a lambda to the Rust type it filters.
/// Every transformation (`rewrite`, `combine`, criteria accumulation)
/// allocates a new predicate; nothing mutates an existing tree.
///

pub struct Predicate<T: Shaped> {
    lambda: Lambda,
    _marker: PhantomData<fn(&T) -> bool>,
}

impl<T: Shaped> Predicate<T> {
    /// Build a predicate from a closure over its single argument.
    ///
    /// The argument handle mints one fresh parameter; the closure returns
    /// the boolean-valued body referencing it.
    pub fn build<F>(f: F) -> Self
    where
        F: FnOnce(&Arg<T>) -> Expr,
    {
        let arg = Arg {
            param: Parameter::fresh(T::MODEL),
            _marker: PhantomData,
        };
        let body = f(&arg);

        Self::from_lambda(Lambda {
            param: arg.param,
            body,
        })
    }

    pub(crate) const fn from_lambda(lambda: Lambda) -> Self {
        Self {
            lambda,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn lambda(&self) -> &Lambda {
        &self.lambda
    }

    #[must_use]
    pub const fn body(&self) -> &Expr {
        &self.lambda.body
    }

    #[must_use]
    pub const fn parameter(&self) -> Parameter {
        self.lambda.param
    }

    /// Check every member reference against `T`'s model.
    pub fn validate(&self) -> Result<(), ValidateError> {
        validate(self)
    }

    /// Rewrite this predicate to an equivalent one over `D`.
    pub fn rewrite<D: Shaped>(&self) -> Result<Predicate<D>, RewriteError> {
        rewrite::<T, D>(self)
    }

    /// Combine with `other` under a logical AND, sharing this predicate's
    /// parameter.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        combine(Connective::And, self, other)
    }

    /// Combine with `other` under a logical OR, sharing this predicate's
    /// parameter.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        combine(Connective::Or, self, other)
    }

    /// Evaluate against one row.
    ///
    /// Connectives evaluate left to right and short-circuit: AND skips the
    /// right side when the left is false, OR when the left is true.
    /// Invalid comparisons (mixed variants, missing fields) never match.
    #[must_use]
    pub fn matches(&self, row: &T) -> bool
    where
        T: Row,
    {
        eval::eval_lambda(&self.lambda, row)
    }
}

impl<T: Shaped> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self::from_lambda(self.lambda.clone())
    }
}

impl<T: Shaped> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("shape", &T::MODEL.path)
            .field("lambda", &self.lambda)
            .finish()
    }
}

impl<T: Shaped> PartialEq for Predicate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.lambda == other.lambda
    }
}

impl<T: Shaped> Eq for Predicate<T> {}

impl<T: Shaped> BitAnd for Predicate<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        combine(Connective::And, &self, &rhs)
    }
}

impl<T: Shaped> BitAnd for &Predicate<T> {
    type Output = Predicate<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        combine(Connective::And, self, rhs)
    }
}

impl<T: Shaped> BitOr for Predicate<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        combine(Connective::Or, &self, &rhs)
    }
}

impl<T: Shaped> BitOr for &Predicate<T> {
    type Output = Predicate<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        combine(Connective::Or, self, rhs)
    }
}

///
/// Arg
///
/// Handle to the parameter of a predicate under construction.
///

pub struct Arg<T: Shaped> {
    param: Parameter,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Shaped> Arg<T> {
    /// Reference a named field on the predicate's parameter.
    ///
    /// Names are not checked here; resolution happens at validate or
    /// rewrite time against the relevant model.
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Expr {
        Expr::Parameter(self.param.id).field(name)
    }
}
