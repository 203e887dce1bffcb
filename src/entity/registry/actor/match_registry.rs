pub mod handler_registry;

use std::collections::HashMap;

use actix::{Actor, Addr, Context};

use crate::entity::game::actor::match_manager::{handler_match, MatchManagerActor};
use crate::entity::game::component::{chess_match::MatchId, player::PlayerId, square::Color};
use crate::entity::registry::component::id_generator::IdGenerator;
use crate::entity::stat::actor::stat_entity::{handler_stat, StatActor};
use crate::monitoring::debug;
use crate::span_debug;

fn span_debug() -> tracing::Span {
    span_debug!("match_registry")
}

pub type MatchRegistryActor = Addr<MatchRegistry>;

/// An active match and the actor that owns it.
#[derive(Clone)]
pub struct MatchEntry {
    id: MatchId,
    white: PlayerId,
    black: PlayerId,
    match_actor: MatchManagerActor,
}
impl MatchEntry {
    pub fn id(&self) -> MatchId {
        self.id
    }
    pub fn player(&self, color: Color) -> &PlayerId {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
    pub fn color_of(&self, player: &PlayerId) -> Option<Color> {
        if &self.white == player {
            Some(Color::White)
        } else if &self.black == player {
            Some(Color::Black)
        } else {
            None
        }
    }
    pub fn match_actor(&self) -> &MatchManagerActor {
        &self.match_actor
    }
}

/// Pending challenges and active matches.
///
/// A player has at most one pending challenge addressed to them and takes part
/// in at most one active match.
pub struct MatchRegistry {
    // challenged player -> challenger
    challenges: HashMap<PlayerId, PlayerId>,
    matches: HashMap<MatchId, MatchEntry>,
    playing: HashMap<PlayerId, MatchId>,
    id_generator: IdGenerator,
    stat_actor_opt: Option<StatActor>,
    debug_actor_opt: Option<debug::DebugActor>,
}

impl MatchRegistry {
    pub fn new(
        id_generator: IdGenerator,
        stat_actor_opt: Option<StatActor>,
        debug_actor_opt: Option<debug::DebugActor>,
    ) -> Self {
        Self {
            challenges: HashMap::new(),
            matches: HashMap::new(),
            playing: HashMap::new(),
            id_generator,
            stat_actor_opt,
            debug_actor_opt,
        }
    }

    fn is_challenge_involved(&self, player: &PlayerId) -> bool {
        self.challenges.contains_key(player) || self.challenges.values().any(|c| c == player)
    }

    fn entry_of(&self, player: &PlayerId) -> Option<&MatchEntry> {
        self.playing
            .get(player)
            .and_then(|match_id| self.matches.get(match_id))
    }

    fn insert(&mut self, entry: MatchEntry) {
        self.playing.insert(entry.white.clone(), entry.id);
        self.playing.insert(entry.black.clone(), entry.id);
        self.matches.insert(entry.id, entry);
    }

    /// Remove a finished match, record its result and stop its actor.
    ///
    /// Nothing happens when the match is already closed.
    fn close(&mut self, match_id: MatchId, winner: &PlayerId, loser: &PlayerId) -> bool {
        let Some(entry) = self.matches.remove(&match_id) else {
            return false;
        };
        self.playing.remove(&entry.white);
        self.playing.remove(&entry.black);
        if let Some(stat_actor) = &self.stat_actor_opt {
            stat_actor.do_send(handler_stat::RecordResult::new(winner.clone(), loser.clone()));
        }
        entry.match_actor.do_send(handler_match::StopActor);
        tracing::info!(match_id, "match closed: {} won against {}", winner, loser);
        true
    }
}

impl Actor for MatchRegistry {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        let span = span_debug();
        let _enter = span.enter();
        tracing::debug!("match registry started");
    }
}
