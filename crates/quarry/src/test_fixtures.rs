//! Shared fixture models for data-access tests: a single-key model and a
//! composite-key model.

use crate::model::Model;
use quarry_core::{
    expr::{FieldPresence, Row},
    shape::{FieldKind, Shaped, TypeModel},
    value::Value,
};
use ulid::Ulid;

quarry_core::type_model! {
    pub(crate) static PERSON_MODEL: "fixtures::Person" {
        id: FieldKind::Ulid,
        age: FieldKind::Int,
        name: FieldKind::Text,
    }
}

///
/// Person
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Person {
    pub id: Ulid,
    pub age: i64,
    pub name: String,
}

impl Person {
    pub(crate) fn unkeyed(age: i64, name: &str) -> Self {
        Self::keyed(Ulid::nil(), age, name)
    }

    pub(crate) fn keyed(id: Ulid, age: i64, name: &str) -> Self {
        Self {
            id,
            age,
            name: name.to_string(),
        }
    }
}

impl Shaped for Person {
    const MODEL: &'static TypeModel = &PERSON_MODEL;
}

impl Row for Person {
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "id" => FieldPresence::Present(Value::Ulid(self.id)),
            "age" => FieldPresence::Present(Value::Int(self.age)),
            "name" => FieldPresence::Present(Value::Text(self.name.clone())),
            _ => FieldPresence::Missing,
        }
    }
}

impl Model for Person {
    type Key = Ulid;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.id = key;
    }
}

quarry_core::type_model! {
    pub(crate) static LEDGER_MODEL: "fixtures::Ledger" {
        book: FieldKind::Uint,
        page: FieldKind::Uint,
        balance: FieldKind::Int,
    }
}

///
/// Ledger
///
/// Composite-key fixture: identity is (book, page).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Ledger {
    pub book: u64,
    pub page: u64,
    pub balance: i64,
}

impl Ledger {
    pub(crate) const fn unkeyed(balance: i64) -> Self {
        Self::keyed(0, 0, balance)
    }

    pub(crate) const fn keyed(book: u64, page: u64, balance: i64) -> Self {
        Self {
            book,
            page,
            balance,
        }
    }
}

impl Shaped for Ledger {
    const MODEL: &'static TypeModel = &LEDGER_MODEL;
}

impl Row for Ledger {
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "book" => FieldPresence::Present(Value::Uint(self.book)),
            "page" => FieldPresence::Present(Value::Uint(self.page)),
            "balance" => FieldPresence::Present(Value::Int(self.balance)),
            _ => FieldPresence::Missing,
        }
    }
}

impl Model for Ledger {
    type Key = (u64, u64);

    fn key(&self) -> Self::Key {
        (self.book, self.page)
    }

    fn set_key(&mut self, key: Self::Key) {
        (self.book, self.page) = key;
    }
}
