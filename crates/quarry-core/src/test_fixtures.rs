//! Shared fixture types for engine tests: a source shape, a structurally
//! identical destination shape, a shape missing a member, and a
//! free-form row for property tests.

use crate::{
    expr::{FieldPresence, Row},
    shape::{FieldKind, Shaped, TypeModel},
    value::Value,
};
use std::collections::BTreeMap;

crate::type_model! {
    pub(crate) static ADDRESS_MODEL: "fixtures::Address" {
        city: FieldKind::Text,
        zip: FieldKind::Text,
    }
}

crate::type_model! {
    pub(crate) static CUSTOMER_MODEL: "fixtures::Customer" {
        age: FieldKind::Int,
        name: FieldKind::Text,
        active: FieldKind::Bool,
        address: FieldKind::Record(&ADDRESS_MODEL),
    }
}

crate::type_model! {
    pub(crate) static SHOPPER_MODEL: "fixtures::Shopper" {
        age: FieldKind::Int,
        name: FieldKind::Text,
        active: FieldKind::Bool,
        address: FieldKind::Record(&ADDRESS_MODEL),
    }
}

// Same spelling, different case: member resolution must not match "age".
crate::type_model! {
    pub(crate) static VISITOR_MODEL: "fixtures::Visitor" {
        Age: FieldKind::Int,
        name: FieldKind::Text,
    }
}

///
/// Address
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Address {
    pub city: String,
    pub zip: String,
}

impl Address {
    fn to_value(&self) -> Value {
        Value::Record(vec![
            ("city".to_string(), Value::Text(self.city.clone())),
            ("zip".to_string(), Value::Text(self.zip.clone())),
        ])
    }
}

///
/// Customer
///

#[derive(Clone, Debug)]
pub(crate) struct Customer {
    pub age: i64,
    pub name: String,
    pub active: bool,
    pub address: Address,
}

impl Customer {
    pub(crate) fn new(age: i64, name: &str, active: bool) -> Self {
        Self {
            age,
            name: name.to_string(),
            active,
            address: Address::default(),
        }
    }

    pub(crate) fn in_city(mut self, city: &str) -> Self {
        self.address.city = city.to_string();
        self
    }
}

impl Shaped for Customer {
    const MODEL: &'static TypeModel = &CUSTOMER_MODEL;
}

impl Row for Customer {
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "age" => FieldPresence::Present(Value::Int(self.age)),
            "name" => FieldPresence::Present(Value::Text(self.name.clone())),
            "active" => FieldPresence::Present(Value::Bool(self.active)),
            "address" => FieldPresence::Present(self.address.to_value()),
            _ => FieldPresence::Missing,
        }
    }
}

///
/// Shopper
///
/// Structurally identical to `Customer`; a value-equivalent shopper must
/// satisfy exactly the predicates its customer does.
///

#[derive(Clone, Debug)]
pub(crate) struct Shopper {
    pub age: i64,
    pub name: String,
    pub active: bool,
    pub address: Address,
}

impl Shaped for Shopper {
    const MODEL: &'static TypeModel = &SHOPPER_MODEL;
}

impl Row for Shopper {
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "age" => FieldPresence::Present(Value::Int(self.age)),
            "name" => FieldPresence::Present(Value::Text(self.name.clone())),
            "active" => FieldPresence::Present(Value::Bool(self.active)),
            "address" => FieldPresence::Present(self.address.to_value()),
            _ => FieldPresence::Missing,
        }
    }
}

impl From<&Customer> for Shopper {
    fn from(customer: &Customer) -> Self {
        Self {
            age: customer.age,
            name: customer.name.clone(),
            active: customer.active,
            address: customer.address.clone(),
        }
    }
}

///
/// Visitor
///
/// Carries `Age`, not `age`.
///

#[derive(Clone, Debug)]
pub(crate) struct Visitor;

impl Shaped for Visitor {
    const MODEL: &'static TypeModel = &VISITOR_MODEL;
}

///
/// Doc
///
/// Free-form row for property tests: whatever fields the strategy put in.
///

crate::type_model! {
    pub(crate) static DOC_MODEL: "fixtures::Doc" {
        a: FieldKind::Int,
        b: FieldKind::Int,
        c: FieldKind::Text,
        d: FieldKind::Bool,
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Doc {
    pub fields: BTreeMap<String, Value>,
}

impl Shaped for Doc {
    const MODEL: &'static TypeModel = &DOC_MODEL;
}

impl Row for Doc {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}
