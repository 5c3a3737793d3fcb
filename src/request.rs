use crate::error::Error;
use crate::row::Row;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WriteKind<'a> {
    Insert,
    /// Comma-separated column names whose combined value identifies a row.
    /// Rows matching an existing record on these columns are updated in
    /// place, the rest are inserted.
    Upsert { on_conflict: &'a str },
}

/// One chunk's deferred write: everything needed to issue (and re-issue,
/// on retry) a single request against the remote table.
#[derive(Clone, Copy, Debug)]
pub struct WriteRequest<'a> {
    pub schema: &'a str,
    pub table: &'a str,
    pub rows: &'a [Row],
    pub kind: WriteKind<'a>,
}

pub trait WriteBackend: Send + Sync {
    fn write(&self, request: &WriteRequest) -> Result<(), Error>;
}
