pub mod handler_stat;

use std::collections::HashMap;
use std::path::PathBuf;

use actix::prelude::*;

use crate::entity::game::component::player::PlayerId;
use crate::{entity::stat::component::stat_data, monitoring::debug};

/// Player statistics, keyed by player id.
pub struct StatEntity {
    debug_actor_opt: Option<debug::DebugActor>,
    stats: HashMap<PlayerId, stat_data::PlayerStats>,
    stat_file_opt: Option<PathBuf>,
}
impl StatEntity {
    pub fn new(debug_actor_opt: Option<debug::DebugActor>) -> Self {
        Self {
            debug_actor_opt,
            stats: HashMap::default(),
            stat_file_opt: None,
        }
    }
    /// Every recorded result is also appended to `stat_file`.
    pub fn with_stat_file(mut self, stat_file: PathBuf) -> Self {
        self.stat_file_opt = Some(stat_file);
        self
    }
    fn stats_mut(&mut self, player: &PlayerId) -> &mut stat_data::PlayerStats {
        self.stats.entry(player.clone()).or_default()
    }
}
impl Actor for StatEntity {
    type Context = Context<Self>;
}

pub type StatActor = Addr<StatEntity>;
