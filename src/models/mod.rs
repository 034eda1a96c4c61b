pub mod work_record;

pub use work_record::{HEADERS, NewRecord, RecordUpdate, WorkRecord};
