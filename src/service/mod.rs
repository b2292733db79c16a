//! RecordService: insert one row / fetch every row of an entity table.

mod records;
pub use records::RecordService;
