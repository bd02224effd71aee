use crate::{
    model::Model,
    repository::{Repository, RepositoryError},
};
use quarry_core::{criteria::Criteria, expr::Predicate};
use std::marker::PhantomData;

///
/// Store
///
/// Business-layer wrapper over a repository. The store owns the policy
/// decisions the repository refuses to make — notably that an empty
/// criteria means match-everything.
///

pub struct Store<M: Model, R: Repository<M>> {
    repository: R,
    _marker: PhantomData<M>,
}

impl<M: Model, R: Repository<M>> Store<M, R> {
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.repository
    }

    pub fn add(&mut self, model: M) -> Result<M, RepositoryError> {
        self.repository.add(model)
    }

    pub fn update(&mut self, model: M) -> Result<M, RepositoryError> {
        self.repository.update(model)
    }

    pub fn delete(&mut self, key: &M::Key) -> Result<(), RepositoryError> {
        self.repository.delete(key)
    }

    pub fn get(&self, key: &M::Key) -> Result<Option<M>, RepositoryError> {
        self.repository.get(key)
    }

    pub fn count(&self) -> Result<usize, RepositoryError> {
        self.repository.count()
    }

    pub fn all(&self) -> Result<Vec<M>, RepositoryError> {
        self.repository.all()
    }

    pub fn query(&self, predicate: &Predicate<M>) -> Result<Vec<M>, RepositoryError> {
        self.repository.query(predicate)
    }

    /// Rows matching an accumulated criteria.
    ///
    /// An empty criteria matches everything — absence of constraints is
    /// interpreted here, once, rather than defaulted inside the
    /// accumulator.
    pub fn find(&self, criteria: &Criteria<M>) -> Result<Vec<M>, RepositoryError> {
        match criteria.as_predicate() {
            Some(predicate) => self.repository.query(predicate),
            None => self.repository.all(),
        }
    }
}
