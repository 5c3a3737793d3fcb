/// One record destined for a table: column name to value, no fixed schema.
/// JSON objects map directly onto what the REST interface accepts.
pub type Row = serde_json::Map<String, serde_json::Value>;

pub type Rows = Vec<Row>;
