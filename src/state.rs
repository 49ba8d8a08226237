use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::storage::LocalStorage;
use crate::workers::assembler::ReelAssembler;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: LocalStorage,
    pub assembler: Arc<ReelAssembler>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: LocalStorage, assembler: ReelAssembler) -> Self {
        Self {
            config,
            storage,
            assembler: Arc::new(assembler),
        }
    }

    /// Local storage and the real external tools, all taken from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let storage = LocalStorage::new(&config);
        let assembler = ReelAssembler::from_config(&config);
        Self::new(config, storage, assembler)
    }
}
