use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use actix::{Handler, Message};

use crate::entity::game::component::player::PlayerId;
use crate::{entity::stat::component::stat_data, monitoring::debug};

use super::StatEntity;

#[derive(Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct AddPlayer(pub PlayerId);

impl Handler<AddPlayer> for StatEntity {
    type Result = ();

    fn handle(&mut self, msg: AddPlayer, _ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("Stat actor receive {:?}", msg),
        );
        if self.stats.contains_key(&msg.0) {
            debug::warn(
                &self.debug_actor_opt,
                format!("player {} already registered", msg.0),
            );
        } else {
            self.stats.insert(msg.0, stat_data::PlayerStats::default());
        }
    }
}

#[derive(Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct RecordResult {
    winner: PlayerId,
    loser: PlayerId,
}
impl RecordResult {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }
}

impl Handler<RecordResult> for StatEntity {
    type Result = ();

    fn handle(&mut self, msg: RecordResult, _ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("Stat actor receive {:?}", msg),
        );
        self.stats_mut(&msg.winner).inc_won();
        self.stats_mut(&msg.loser).inc_lost();
        let line = format!(
            "{} winner:'{}' loser:'{}'\n",
            chrono::Utc::now(),
            msg.winner,
            msg.loser
        );
        self.append(&line);
    }
}

#[derive(Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct RecordStale(pub Vec<PlayerId>);

impl Handler<RecordStale> for StatEntity {
    type Result = ();

    fn handle(&mut self, msg: RecordStale, _ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("Stat actor receive {:?}", msg),
        );
        for player in &msg.0 {
            self.stats_mut(player).inc_stale();
        }
        let players: Vec<&str> = msg.0.iter().map(|p| p.as_str()).collect();
        let line = format!("{} stale:'{}'\n", chrono::Utc::now(), players.join("','"));
        self.append(&line);
    }
}

#[derive(Debug, Message, Clone)]
#[rtype(result = "Option<stat_data::PlayerStats>")]
pub struct GetPlayerStats(pub PlayerId);

impl Handler<GetPlayerStats> for StatEntity {
    type Result = Option<stat_data::PlayerStats>;

    fn handle(&mut self, msg: GetPlayerStats, _ctx: &mut Self::Context) -> Self::Result {
        self.stats.get(&msg.0).cloned()
    }
}

impl StatEntity {
    fn append(&self, line: &str) {
        if let Some(stat_file) = &self.stat_file_opt {
            if let Err(err) = write_stat(stat_file, line) {
                tracing::error!("cannot write stat file {}: {}", stat_file.display(), err);
            }
        }
    }
}

fn write_stat(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(line.as_bytes())
}
