pub mod local;

pub use local::{LocalStorage, StagedUpload};
