//! Generic admin resource table
//!
//! API keys, roles, payments, reviews and inventory all share the same
//! scaffolding: a source collection, a set of filter controls, a sort
//! selector and a window. `ResourceTable` owns that state; `view` derives the
//! rows to render.

use crate::listing::{FilterCriterion, ListingQuery, Record, ResultSet, SortKey};
use crate::session::Session;
use crate::{ListingError, Result};

#[derive(Clone, Debug)]
pub struct ResourceTable<R> {
    records: Vec<R>,
    query: ListingQuery,
}

impl<R> Default for ResourceTable<R> {
    fn default() -> Self {
        Self { records: Vec::new(), query: ListingQuery::default() }
    }
}

impl<R: Record + Clone> ResourceTable<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records, query: ListingQuery::default() }
    }

    /// Replaces the source collection, e.g. when a fetch completes. A failed
    /// fetch should pass `None`, which leaves the table empty.
    pub fn replace_all(&mut self, records: Option<Vec<R>>) {
        self.records = records.unwrap_or_default();
        tracing::debug!(count = self.records.len(), "resource table reloaded");
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[R] { &self.records }
    pub fn query(&self) -> &ListingQuery { &self.query }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn insert(&mut self, session: &Session, record: R) -> Result<()> {
        session.require_admin()?;
        record.check()?;
        if self.position(record.id()).is_some() {
            return Err(ListingError::DuplicateRecord(record.id().to_string()));
        }
        tracing::info!(id = record.id(), user = session.user(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn update(&mut self, session: &Session, record: R) -> Result<()> {
        session.require_admin()?;
        record.check()?;
        let slot = self.position(record.id()).ok_or_else(|| ListingError::RecordNotFound(record.id().to_string()))?;
        tracing::info!(id = record.id(), user = session.user(), "record updated");
        self.records[slot] = record;
        Ok(())
    }

    pub fn remove(&mut self, session: &Session, id: &str) -> Result<R> {
        session.require_admin()?;
        let slot = self.position(id).ok_or_else(|| ListingError::RecordNotFound(id.to_string()))?;
        tracing::info!(id, user = session.user(), "record removed");
        Ok(self.records.remove(slot))
    }

    /// Sets the control for `criterion.field`, replacing any previous value.
    pub fn set_criterion(&mut self, criterion: FilterCriterion) {
        self.query.criteria.retain(|c| c.field != criterion.field);
        self.query.criteria.push(criterion);
    }

    pub fn clear_filters(&mut self) {
        self.query.criteria.clear();
    }

    /// Active controls only; sentinel values are not reported.
    pub fn current_filters(&self) -> Vec<&FilterCriterion> {
        self.query.criteria.iter().filter(|c| c.is_active()).collect()
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn set_window(&mut self, offset: usize, limit: Option<usize>) {
        self.query.offset = offset;
        self.query.limit = limit;
    }

    pub fn view(&self) -> ResultSet<R> {
        self.query.run(&self.records)
    }
}
