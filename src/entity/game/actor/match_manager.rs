pub mod handler_match;

use actix::{Actor, Addr, Context};

use crate::entity::game::component::chess_match::{ChessMatch, MatchId};
use crate::entity::game::component::square::Color;
use crate::entity::registry::actor::match_registry;
use crate::monitoring::debug;
use crate::span_debug;

fn span_debug() -> tracing::Span {
    span_debug!("match_manager")
}

pub type MatchManagerActor = Addr<MatchManager>;

/// Owner of one match.
///
/// Every request on the match goes through the actor mailbox, so a move is
/// always applied as a whole before the next request is looked at.
pub struct MatchManager {
    chess_match: ChessMatch,
    debug_actor_opt: Option<debug::DebugActor>,
    registry_actor_opt: Option<match_registry::MatchRegistryActor>,
}

impl MatchManager {
    pub fn new(chess_match: ChessMatch, debug_actor_opt: Option<debug::DebugActor>) -> Self {
        Self {
            chess_match,
            debug_actor_opt,
            registry_actor_opt: None,
        }
    }
    /// The registry is told when the match ends on the board.
    pub fn with_registry(mut self, registry_actor: match_registry::MatchRegistryActor) -> Self {
        self.registry_actor_opt = Some(registry_actor);
        self
    }
    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }
    pub fn id(&self) -> MatchId {
        self.chess_match.id()
    }
}

impl Actor for MatchManager {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        let span = span_debug();
        let _enter = span.enter();
        let players = self.chess_match.players();
        tracing::info!(
            match_id = self.id(),
            "match started: White={} Black={}",
            players.get_player(Color::White).id(),
            players.get_player(Color::Black).id()
        );
        debug::log(
            &self.debug_actor_opt,
            format!("Board initialized for match {}", self.id()),
        );
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::debug!(match_id = self.id(), "match actor stopped");
    }
}
