//! Collection queries and the snapshots they produce.

use super::{Document, DocumentId};
use serde_json::Value;
use std::cmp::Ordering;

/// Sort direction for an ordered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first.
    Descending,
}

/// Declarative query over one collection.
///
/// Documents must match every equality filter. When an order field is set,
/// documents lacking that field are excluded, mirroring hosted document
/// stores. The limit applies after ordering.
///
/// # Examples
///
/// ```
/// use join_board::store::{Direction, Query};
///
/// let query = Query::all()
///     .where_eq("isAvailable", true)
///     .order_by("name", Direction::Ascending)
///     .limit(15);
/// assert_eq!(query.limit_value(), Some(15));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    filters: Vec<(String, Value)>,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

impl Query {
    /// Creates a query matching every document.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds an equality filter on a field.
    #[must_use]
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Orders results by a field.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((field.into(), direction));
        self
    }

    /// Limits the number of returned documents.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the configured limit, if any.
    #[must_use]
    pub const fn limit_value(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` when the document passes every equality filter.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.filters
            .iter()
            .all(|(field, expected)| document.field(field) == Some(expected))
    }

    /// Evaluates the query against a collection's documents.
    #[must_use]
    pub fn apply(&self, documents: &[Document]) -> Snapshot {
        let mut selected: Vec<Document> = documents
            .iter()
            .filter(|document| self.matches(document))
            .cloned()
            .collect();

        if let Some((field, direction)) = &self.order {
            selected.retain(|document| document.field(field).is_some());
            selected.sort_by(|left, right| {
                let ordering = compare_values(left.field(field), right.field(field));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }

        Snapshot::new(selected)
    }
}

/// Orders two optional JSON values for query sorting.
///
/// Values of different kinds rank by kind: null, booleans, numbers, strings,
/// then everything else.
fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        _ => kind_rank(left).cmp(&kind_rank(right)),
    }
}

const fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Point-in-time result of a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    documents: Vec<Document>,
}

impl Snapshot {
    /// Creates a snapshot from ordered documents.
    #[must_use]
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Returns the documents in query order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` when the snapshot holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Finds a document by identifier.
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|document| document.id() == id)
    }
}

impl IntoIterator for Snapshot {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}
