//! In-memory data-access backend.
//!
//! Rows are stored as JSON values grouped by relation, each with a version counter and the
//! list of rows it references. The backend enforces the rules a relational store would:
//! unknown relations are rejected, keys are unique, references must resolve, referenced rows
//! cannot be deleted, and updates must carry the version they read.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::DataAccessError;

/// Reference from one row to another, by relation name and key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowRef {
    pub relation: String,
    pub key: String,
}

impl RowRef {
    pub fn new(relation: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for RowRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.relation, self.key)
    }
}

/// An entity that can be persisted in a [`MemoryStore`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const RELATION: &'static str;

    fn key(&self) -> String;

    /// Rows this record points at. Each must exist when the record is written.
    fn references(&self) -> Vec<RowRef> {
        Vec::new()
    }
}

/// A record together with the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<R> {
    pub version: u64,
    pub record: R,
}

#[derive(Debug)]
struct Row {
    version: u64,
    data: Value,
    refs: Vec<RowRef>,
}

type Relation = BTreeMap<String, Row>;

#[derive(Debug, Default)]
struct Tables {
    relations: BTreeMap<String, Relation>,
}

impl Tables {
    fn relation(&self, name: &str) -> Result<&Relation, DataAccessError> {
        self.relations
            .get(name)
            .ok_or_else(|| missing_relation(name))
    }

    fn relation_mut(&mut self, name: &str) -> Result<&mut Relation, DataAccessError> {
        self.relations
            .get_mut(name)
            .ok_or_else(|| missing_relation(name))
    }

    fn check_refs(&self, owner: &str, refs: &[RowRef]) -> Result<(), DataAccessError> {
        for r in refs {
            let target = self.relation(&r.relation)?;
            if !target.contains_key(&r.key) {
                return Err(DataAccessError::integrity(
                    owner,
                    format!("reference to missing row {r}"),
                ));
            }
        }
        Ok(())
    }

    fn first_referrer(&self, target: &RowRef) -> Option<RowRef> {
        self.relations.iter().find_map(|(rel, rows)| {
            rows.iter()
                .filter(|(key, _)| !(rel == &target.relation && *key == &target.key))
                .find(|(_, row)| row.refs.contains(target))
                .map(|(key, _)| RowRef::new(rel.clone(), key.clone()))
        })
    }
}

fn missing_relation(name: &str) -> DataAccessError {
    DataAccessError::invalid_usage(name, format!("relation '{name}' does not exist"))
}

fn decode<R: Record>(key: &str, row: &Row) -> Result<Versioned<R>, DataAccessError> {
    let record = serde_json::from_value(row.data.clone()).map_err(|e| {
        DataAccessError::invalid_usage(R::RELATION, format!("cannot map row {key}: {e}"))
    })?;
    Ok(Versioned {
        version: row.version,
        record,
    })
}

fn encode<R: Record>(record: &R) -> Result<Value, DataAccessError> {
    serde_json::to_value(record)
        .map_err(|e| DataAccessError::invalid_usage(R::RELATION, format!("cannot encode row: {e}")))
}

#[derive(Debug)]
struct Inner {
    open: AtomicBool,
    tables: RwLock<Tables>,
}

/// Shared handle to an in-memory database. Clones see the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                open: AtomicBool::new(true),
                tables: RwLock::new(Tables::default()),
            }),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let mut tables = Tables::default();
        for name in &config.tables {
            tables.relations.entry(name.clone()).or_default();
        }
        Self {
            inner: Arc::new(Inner {
                open: AtomicBool::new(config.open),
                tables: RwLock::new(tables),
            }),
        }
    }

    pub fn open(&self) {
        self.inner.open.store(true, Ordering::SeqCst);
    }

    /// Stop accepting work. Data is kept and becomes reachable again after [`Self::open`].
    pub fn close(&self) {
        self.inner.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), DataAccessError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(DataAccessError::no_transaction("store is closed"))
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DataAccessError> {
        self.ensure_open()?;
        self.inner
            .tables
            .read()
            .map_err(|_| DataAccessError::Poisoned { operation: "read" })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DataAccessError> {
        self.ensure_open()?;
        self.inner
            .tables
            .write()
            .map_err(|_| DataAccessError::Poisoned { operation: "write" })
    }

    /// Register a relation. Returns `false` if it already existed.
    pub fn create_relation(&self, name: &str) -> Result<bool, DataAccessError> {
        let mut tables = self.write()?;
        if tables.relations.contains_key(name) {
            return Ok(false);
        }
        tables.relations.insert(name.to_string(), Relation::new());
        tracing::debug!(relation = name, "created relation");
        Ok(true)
    }

    pub fn relations(&self) -> Result<Vec<String>, DataAccessError> {
        Ok(self.read()?.relations.keys().cloned().collect())
    }

    pub fn insert<R: Record>(&self, record: &R) -> Result<Versioned<R>, DataAccessError> {
        let key = record.key();
        let refs = record.references();
        let data = encode(record)?;

        {
            let mut tables = self.write()?;
            if tables.relation(R::RELATION)?.contains_key(&key) {
                return Err(DataAccessError::integrity(
                    R::RELATION,
                    format!("duplicate key {key}"),
                ));
            }
            tables.check_refs(R::RELATION, &refs)?;
            tables.relation_mut(R::RELATION)?.insert(
                key.clone(),
                Row {
                    version: 0,
                    data,
                    refs,
                },
            );
        }
        tracing::trace!(relation = R::RELATION, %key, "inserted row");

        Ok(Versioned {
            version: 0,
            record: record.clone(),
        })
    }

    pub fn find<R: Record>(&self, key: &str) -> Result<Option<Versioned<R>>, DataAccessError> {
        let tables = self.read()?;
        tables
            .relation(R::RELATION)?
            .get(key)
            .map(|row| decode(key, row))
            .transpose()
    }

    /// All rows of the relation, ordered by key.
    pub fn find_all<R: Record>(&self) -> Result<Vec<Versioned<R>>, DataAccessError> {
        let tables = self.read()?;
        tables
            .relation(R::RELATION)?
            .iter()
            .map(|(key, row)| decode(key, row))
            .collect()
    }

    pub fn exists<R: Record>(&self, key: &str) -> Result<bool, DataAccessError> {
        Ok(self.read()?.relation(R::RELATION)?.contains_key(key))
    }

    /// Write `current.record` if the stored row is still at `current.version`.
    pub fn update<R: Record>(
        &self,
        current: &Versioned<R>,
    ) -> Result<Versioned<R>, DataAccessError> {
        let key = current.record.key();
        let refs = current.record.references();
        let data = encode(&current.record)?;

        let version = {
            let mut tables = self.write()?;
            let stored = tables
                .relation(R::RELATION)?
                .get(&key)
                .map(|row| row.version)
                .ok_or_else(|| DataAccessError::NotFound {
                    relation: R::RELATION.to_string(),
                    key: key.clone(),
                })?;
            if stored != current.version {
                return Err(DataAccessError::OptimisticLockFailure {
                    relation: R::RELATION.to_string(),
                    key,
                    expected: current.version,
                    actual: stored,
                });
            }
            tables.check_refs(R::RELATION, &refs)?;

            let version = stored + 1;
            tables.relation_mut(R::RELATION)?.insert(
                key.clone(),
                Row {
                    version,
                    data,
                    refs,
                },
            );
            version
        };
        tracing::trace!(relation = R::RELATION, %key, version, "updated row");

        Ok(Versioned {
            version,
            record: current.record.clone(),
        })
    }

    /// Insert or overwrite without a version check.
    pub fn save<R: Record>(&self, record: &R) -> Result<Versioned<R>, DataAccessError> {
        let key = record.key();
        let refs = record.references();
        let data = encode(record)?;

        let version = {
            let mut tables = self.write()?;
            tables.check_refs(R::RELATION, &refs)?;
            let rows = tables.relation_mut(R::RELATION)?;
            let version = rows.get(&key).map_or(0, |row| row.version + 1);
            rows.insert(
                key,
                Row {
                    version,
                    data,
                    refs,
                },
            );
            version
        };

        Ok(Versioned {
            version,
            record: record.clone(),
        })
    }

    /// Remove a row. Returns `false` when there was nothing to remove.
    pub fn delete<R: Record>(&self, key: &str) -> Result<bool, DataAccessError> {
        let mut tables = self.write()?;
        if !tables.relation(R::RELATION)?.contains_key(key) {
            return Ok(false);
        }
        let target = RowRef::new(R::RELATION, key);
        if let Some(referrer) = tables.first_referrer(&target) {
            return Err(DataAccessError::integrity(
                R::RELATION,
                format!("{target} is still referenced by {referrer}"),
            ));
        }
        tables.relation_mut(R::RELATION)?.remove(key);
        tracing::trace!(relation = R::RELATION, key, "deleted row");
        Ok(true)
    }
}
