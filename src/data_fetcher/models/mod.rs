pub mod games;
pub mod result_set;
pub mod standings;
pub mod teams;

pub use games::GameRow;
pub use result_set::{RecordSet, Row, StatsResponse};
pub use standings::TeamRecord;
pub use teams::TeamDirectory;
