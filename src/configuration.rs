use std::path::{Path, PathBuf};

use crate::entity::chat::component::command::parser::DEFAULT_PREFIX;

/// Runtime settings of the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    prefix: String,
    debug_show: bool,
    stat_file_opt: Option<PathBuf>,
    log_dir_opt: Option<PathBuf>,
    seed_opt: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            debug_show: false,
            stat_file_opt: None,
            log_dir_opt: None,
            seed_opt: None,
        }
    }
}

impl Configuration {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
    pub fn debug_show(&self) -> bool {
        self.debug_show
    }
    pub fn stat_file_opt(&self) -> Option<&Path> {
        self.stat_file_opt.as_deref()
    }
    pub fn log_dir_opt(&self) -> Option<&Path> {
        self.log_dir_opt.as_deref()
    }
    pub fn seed_opt(&self) -> Option<u64> {
        self.seed_opt
    }
    pub fn update_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }
    pub fn update_debug_show(&mut self, debug_show: bool) {
        self.debug_show = debug_show;
    }
    pub fn update_stat_file(&mut self, stat_file: PathBuf) {
        self.stat_file_opt = Some(stat_file);
    }
    pub fn update_log_dir(&mut self, log_dir: PathBuf) {
        self.log_dir_opt = Some(log_dir);
    }
    pub fn update_seed(&mut self, seed: u64) {
        self.seed_opt = Some(seed);
    }
}
