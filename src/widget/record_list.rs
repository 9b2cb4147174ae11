// src/widget/record_list.rs

use crate::types::Record;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Ordered, append-only sequence of records.
///
/// Appending never touches the existing storage: it builds a new list holding
/// the old elements plus the new one. A `RecordList` handed out earlier keeps
/// showing exactly what it showed when it was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList {
    items: Arc<[Record]>,
}

impl Default for RecordList {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl Serialize for RecordList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new list with `record` at the end.
    #[must_use]
    pub fn appended(&self, record: Record) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(record);
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&Record> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let list = RecordList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.last().is_none());
    }

    #[test]
    fn append_goes_to_the_end() {
        let list = RecordList::new()
            .appended(Record::new("AAPL"))
            .appended(Record::new("MSFT"));
        let symbols: Vec<&str> = list.iter().map(Record::symbol).collect();
        assert_eq!(symbols, ["AAPL", "MSFT"]);
        assert_eq!(list.last().unwrap().symbol(), "MSFT");
    }

    #[test]
    fn earlier_snapshot_is_untouched() {
        let before = RecordList::new().appended(Record::new("AAPL"));
        let after = before.appended(Record::new("TSLA"));

        assert_eq!(before.len(), 1);
        assert_eq!(before.get(0).unwrap().symbol(), "AAPL");
        assert!(before.get(1).is_none());

        assert_eq!(after.len(), 2);
        assert_eq!(&after.as_slice()[..1], before.as_slice());
    }

    #[test]
    fn duplicates_are_kept() {
        let list = RecordList::new()
            .appended(Record::new("AAPL"))
            .appended(Record::new("AAPL"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn serializes_as_array() {
        let list = RecordList::new().appended(Record::new("IBM"));
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"symbol":"IBM","description":"This is a stock IBM"}]"#);
    }
}
