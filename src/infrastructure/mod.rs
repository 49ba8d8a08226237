pub mod beats;
pub mod encoder;
pub mod process;
pub mod speech;
pub mod storage;
