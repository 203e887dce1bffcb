use actix::{ActorContext, Handler, Message};

use crate::entity::game::component::{
    chess_match::{ChessMatch, EndGame, MoveOutcome, MoveRejection},
    coord::Coord,
    history::History,
    player::PlayerId,
    snapshot::{BoardSnapshot, DisplayMode},
    square::{Color, Switch},
};
use crate::entity::registry::actor::match_registry::handler_registry;
use crate::monitoring::debug;

use super::{span_debug, MatchManager};

#[derive(Debug, Message)]
#[rtype(result = "MoveOutcome")]
pub struct AttemptMove {
    requester: PlayerId,
    from: Coord,
    to: Coord,
}
impl AttemptMove {
    pub fn new(requester: PlayerId, from: Coord, to: Coord) -> Self {
        Self {
            requester,
            from,
            to,
        }
    }
}

impl Handler<AttemptMove> for MatchManager {
    type Result = MoveOutcome;

    fn handle(&mut self, msg: AttemptMove, _ctx: &mut Self::Context) -> Self::Result {
        let span = span_debug();
        let _enter = span.enter();

        debug::log(
            &self.debug_actor_opt,
            format!("match_manager_actor receive {:?}", msg),
        );
        let outcome = self
            .chess_match
            .attempt_move(&msg.requester, msg.from, msg.to);
        match &outcome {
            Ok(applied) => {
                tracing::debug!(
                    match_id = self.id(),
                    "{} {}-{} applied",
                    applied.piece().type_piece(),
                    applied.from(),
                    applied.to()
                );
                if applied.opponent_in_check() {
                    debug::log(
                        &self.debug_actor_opt,
                        format!("{} is in check", applied.piece().color().switch()),
                    );
                }
                if let EndGame::KingCaptured(winner) = applied.end_game() {
                    self.notify_end(winner);
                }
            }
            Err(rejection) => {
                tracing::debug!(
                    match_id = self.id(),
                    "{}-{} rejected: {}",
                    msg.from,
                    msg.to,
                    rejection
                );
            }
        }
        outcome
    }
}

impl MatchManager {
    fn notify_end(&self, winner: Color) {
        let players = self.chess_match.players();
        let winner_id = players.get_player(winner).id().clone();
        let loser_id = players.get_player(winner.switch()).id().clone();
        tracing::info!(match_id = self.id(), "match won by {}", winner_id);
        if let Some(registry_actor) = &self.registry_actor_opt {
            registry_actor.do_send(handler_registry::MatchEnded::new(
                self.id(),
                winner_id,
                loser_id,
            ));
        }
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Result<Color, MoveRejection>")]
pub struct Resign(pub PlayerId);

impl Handler<Resign> for MatchManager {
    type Result = Result<Color, MoveRejection>;

    fn handle(&mut self, msg: Resign, _ctx: &mut Self::Context) -> Self::Result {
        let span = span_debug();
        let _enter = span.enter();

        debug::log(
            &self.debug_actor_opt,
            format!("match_manager_actor receive {:?}", msg),
        );
        let winner = self.chess_match.resign(&msg.0)?;
        tracing::info!(match_id = self.id(), "{} resigned", msg.0);
        Ok(winner)
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Result<BoardSnapshot, ()>")]
pub struct GetSnapshot(pub DisplayMode);

impl Handler<GetSnapshot> for MatchManager {
    type Result = Result<BoardSnapshot, ()>;

    fn handle(&mut self, msg: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.chess_match.board_snapshot(msg.0))
    }
}

#[derive(Debug, Message)]
#[rtype(result = "bool")]
pub struct IsInCheck(pub Color);

impl Handler<IsInCheck> for MatchManager {
    type Result = bool;

    fn handle(&mut self, msg: IsInCheck, _ctx: &mut Self::Context) -> Self::Result {
        self.chess_match.is_in_check(msg.0)
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Result<ChessMatch, ()>")]
pub struct GetMatchState;

impl Handler<GetMatchState> for MatchManager {
    type Result = Result<ChessMatch, ()>;

    fn handle(&mut self, _msg: GetMatchState, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.chess_match.clone())
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Result<History, ()>")]
pub struct GetHistory;

impl Handler<GetHistory> for MatchManager {
    type Result = Result<History, ()>;

    fn handle(&mut self, _msg: GetHistory, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.chess_match.history().clone())
    }
}

#[derive(Debug, Message)]
#[rtype(result = "()")]
pub struct StopActor;

impl Handler<StopActor> for MatchManager {
    type Result = ();

    fn handle(&mut self, msg: StopActor, ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("match_manager_actor receive {:?}", msg),
        );
        ctx.stop();
    }
}
