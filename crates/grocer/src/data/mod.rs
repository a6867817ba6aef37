pub mod settings;
pub mod storage;
