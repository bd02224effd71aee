use crate::{
    key::ModelKey,
    model::Model,
    obs,
    repository::{Repository, RepositoryError},
};
use quarry_core::expr::Predicate;
use std::collections::BTreeMap;

// Generation retries before giving up; only pathological key spaces (or a
// broken `generate`) ever need more than one.
const KEY_ATTEMPTS: u32 = 8;

///
/// MemoryRepository
///
/// Reference backend: an ordered in-process keyspace. This is also the
/// toolkit's query-execution backend — final predicates are evaluated
/// row by row, left to right, with short-circuiting connectives.
///

#[derive(Clone, Debug)]
pub struct MemoryRepository<M: Model> {
    rows: BTreeMap<M::Key, M>,
}

impl<M: Model> Default for MemoryRepository<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> MemoryRepository<M> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    fn fresh_key(&self) -> Result<M::Key, RepositoryError> {
        for _ in 0..KEY_ATTEMPTS {
            let key = M::Key::generate();
            if !self.rows.contains_key(&key) {
                obs::record(|ops| ops.keys_generated += 1);

                return Ok(key);
            }
        }

        Err(RepositoryError::KeyExhausted {
            attempts: KEY_ATTEMPTS,
        })
    }
}

impl<M: Model> Repository<M> for MemoryRepository<M> {
    fn add(&mut self, mut model: M) -> Result<M, RepositoryError> {
        obs::record(|ops| ops.add_calls += 1);

        if model.key().is_missing() {
            model.set_key(self.fresh_key()?);
        } else if self.rows.contains_key(&model.key()) {
            return Err(RepositoryError::duplicate_key(&model.key()));
        }

        self.rows.insert(model.key(), model.clone());

        Ok(model)
    }

    fn update(&mut self, model: M) -> Result<M, RepositoryError> {
        obs::record(|ops| ops.update_calls += 1);

        if model.key().is_missing() {
            return Err(RepositoryError::KeyMissing);
        }
        if !self.rows.contains_key(&model.key()) {
            return Err(RepositoryError::not_found(&model.key()));
        }

        self.rows.insert(model.key(), model.clone());

        Ok(model)
    }

    fn delete(&mut self, key: &M::Key) -> Result<(), RepositoryError> {
        obs::record(|ops| ops.delete_calls += 1);

        self.rows
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(key))
    }

    fn get(&self, key: &M::Key) -> Result<Option<M>, RepositoryError> {
        obs::record(|ops| ops.get_calls += 1);

        Ok(self.rows.get(key).cloned())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.rows.len())
    }

    fn all(&self) -> Result<Vec<M>, RepositoryError> {
        obs::record(|ops| ops.query_calls += 1);

        Ok(self.rows.values().cloned().collect())
    }

    fn query(&self, predicate: &Predicate<M>) -> Result<Vec<M>, RepositoryError> {
        obs::record(|ops| ops.query_calls += 1);

        // CONTRACT: predicates are validated before evaluation; an
        // unresolvable member is an error here, never a silent non-match.
        predicate.validate()?;

        let mut matched = Vec::new();
        for row in self.rows.values() {
            obs::record(|ops| ops.rows_scanned += 1);

            if predicate.matches(row) {
                matched.push(row.clone());
            }
        }
        obs::record(|ops| ops.rows_matched += matched.len() as u64);

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        key::ModelKey,
        test_fixtures::{Ledger, Person},
    };
    use quarry_core::expr::ValidateError;
    use ulid::Ulid;

    #[test]
    fn add_generates_a_missing_key() {
        let mut repo = MemoryRepository::new();

        let stored = repo.add(Person::unkeyed(30, "ada")).unwrap();

        assert!(!stored.id.is_nil());
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(&stored.id).unwrap().unwrap(), stored);
    }

    #[test]
    fn add_keeps_a_caller_supplied_key() {
        let mut repo = MemoryRepository::new();
        let id = Ulid::new();

        let stored = repo.add(Person::keyed(id, 30, "ada")).unwrap();

        assert_eq!(stored.id, id);
    }

    #[test]
    fn add_rejects_duplicate_keys() {
        let mut repo = MemoryRepository::new();
        let id = Ulid::new();

        repo.add(Person::keyed(id, 30, "ada")).unwrap();
        let err = repo.add(Person::keyed(id, 31, "bob")).unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateKey { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn update_requires_presence_and_a_key() {
        let mut repo = MemoryRepository::new();

        assert_eq!(
            repo.update(Person::unkeyed(30, "ada")).unwrap_err(),
            RepositoryError::KeyMissing,
        );
        assert!(matches!(
            repo.update(Person::keyed(Ulid::new(), 30, "ada")).unwrap_err(),
            RepositoryError::NotFound { .. },
        ));

        let stored = repo.add(Person::unkeyed(30, "ada")).unwrap();
        let mut renamed = stored.clone();
        renamed.name = "grace".to_string();

        repo.update(renamed.clone()).unwrap();
        assert_eq!(repo.get(&stored.id).unwrap().unwrap(), renamed);
    }

    #[test]
    fn delete_requires_presence() {
        let mut repo = MemoryRepository::new();
        let stored = repo.add(Person::unkeyed(30, "ada")).unwrap();

        repo.delete(&stored.id).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(matches!(
            repo.delete(&stored.id).unwrap_err(),
            RepositoryError::NotFound { .. },
        ));
    }

    #[test]
    fn query_filters_by_predicate() {
        let mut repo = MemoryRepository::new();
        repo.add(Person::unkeyed(30, "ada")).unwrap();
        repo.add(Person::unkeyed(17, "bob")).unwrap();
        repo.add(Person::unkeyed(45, "grace")).unwrap();

        let adults = Predicate::<Person>::build(|p| p.field("age").gte(18));
        let matched = repo.query(&adults).unwrap();

        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|person| person.age >= 18));
    }

    #[test]
    fn query_rejects_unknown_fields() {
        let mut repo = MemoryRepository::new();
        repo.add(Person::unkeyed(30, "ada")).unwrap();

        let bad = Predicate::<Person>::build(|p| p.field("aeg").gte(18));
        let err = repo.query(&bad).unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::Validate(ValidateError::UnknownField { .. }),
        ));
    }

    #[test]
    fn tuple_keyed_models_round_trip() {
        let mut repo = MemoryRepository::new();

        let generated = repo.add(Ledger::unkeyed(100)).unwrap();
        assert!(!generated.key().is_missing());

        let explicit = repo.add(Ledger::keyed(7, 9, 250)).unwrap();
        assert_eq!(repo.get(&(7, 9)).unwrap().unwrap(), explicit);

        repo.delete(&(7, 9)).unwrap();
        assert!(repo.get(&(7, 9)).unwrap().is_none());
    }
}
