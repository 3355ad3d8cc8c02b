// Utils compartidos

pub mod constants;
pub mod storage;
pub mod time;

pub use constants::*;
pub use storage::StorageAdapter;
pub use time::time_ago;
