//! Ordered commit history with JSON interchange.

use crate::error::Result;
use crate::model::CommitRecord;
use std::collections::HashSet;
use std::io::{Read, Write};

/// Owns the parsed commits in log order (newest first, as git reports
/// them). Records are immutable once appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitHistoryStore {
    records: Vec<CommitRecord>,
}

impl CommitHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CommitRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge a freshly parsed history into this one: records whose hash
    /// is already present are dropped, the rest are prepended so the
    /// newest-first ordering is kept across incremental updates.
    pub fn merge_recent(&mut self, newer: CommitHistoryStore) {
        let existing: HashSet<String> =
            self.records.iter().map(|r| r.hash.clone()).collect();
        let mut merged: Vec<CommitRecord> = newer
            .records
            .into_iter()
            .filter(|r| !existing.contains(&r.hash))
            .collect();
        merged.append(&mut self.records);
        self.records = merged;
    }

    /// Pretty-printed JSON array of commit objects.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.records)?)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let records: Vec<CommitRecord> = serde_json::from_slice(bytes)?;
        Ok(Self { records })
    }

    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.serialize()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Reads the full source before parsing so transport failures surface
    /// as [`Io`](crate::error::GitPulseError::Io) and malformed JSON as
    /// [`Format`](crate::error::GitPulseError::Format).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::deserialize(&bytes)
    }
}

impl<'a> IntoIterator for &'a CommitHistoryStore {
    type Item = &'a CommitRecord;
    type IntoIter = std::slice::Iter<'a, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
