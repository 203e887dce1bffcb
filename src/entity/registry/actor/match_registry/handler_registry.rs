use actix::{
    fut, Actor, ActorFutureExt, AsyncContext, Handler, Message, ResponseActFuture, WrapFuture,
};

use crate::entity::game::actor::match_manager::{handler_match, MatchManager};
use crate::entity::game::component::{
    chess_match::{ChessMatch, MatchId},
    player::PlayerId,
    square::{Color, Switch},
};
use crate::entity::registry::component::registry_error::RegistryError;
use crate::entity::stat::actor::stat_entity::handler_stat;
use crate::monitoring::debug;

use super::{span_debug, MatchEntry, MatchRegistry};

#[derive(Debug, Message)]
#[rtype(result = "Result<(), RegistryError>")]
pub struct Challenge {
    challenger: PlayerId,
    challenged: PlayerId,
}
impl Challenge {
    pub fn new(challenger: PlayerId, challenged: PlayerId) -> Self {
        Self {
            challenger,
            challenged,
        }
    }
}

impl Handler<Challenge> for MatchRegistry {
    type Result = Result<(), RegistryError>;

    fn handle(&mut self, msg: Challenge, _ctx: &mut Self::Context) -> Self::Result {
        let span = span_debug();
        let _enter = span.enter();

        debug::log(
            &self.debug_actor_opt,
            format!("match_registry_actor receive {:?}", msg),
        );
        if msg.challenger == msg.challenged {
            return Err(RegistryError::SelfChallenge);
        }
        for player in [&msg.challenger, &msg.challenged] {
            if self.playing.contains_key(player) {
                return Err(RegistryError::AlreadyInMatch(player.clone()));
            }
            if self.is_challenge_involved(player) {
                return Err(RegistryError::AlreadyChallenged(player.clone()));
            }
        }
        tracing::debug!("{} challenges {}", msg.challenger, msg.challenged);
        self.challenges.insert(msg.challenged, msg.challenger);
        Ok(())
    }
}

/// The challenged player accepts. The challenger plays White.
#[derive(Debug, Message)]
#[rtype(result = "Result<MatchId, RegistryError>")]
pub struct Accept(pub PlayerId);

impl Handler<Accept> for MatchRegistry {
    type Result = Result<MatchId, RegistryError>;

    fn handle(&mut self, msg: Accept, ctx: &mut Self::Context) -> Self::Result {
        let span = span_debug();
        let _enter = span.enter();

        debug::log(
            &self.debug_actor_opt,
            format!("match_registry_actor receive {:?}", msg),
        );
        let challenger = self
            .challenges
            .remove(&msg.0)
            .ok_or_else(|| RegistryError::NoPendingChallenge(msg.0.clone()))?;
        let challenged = msg.0;
        let matches = &self.matches;
        let match_id = self.id_generator.generate(|id| matches.contains_key(&id));
        let chess_match = ChessMatch::new(match_id, challenger.clone(), challenged.clone());
        let match_actor = MatchManager::new(chess_match, self.debug_actor_opt.clone())
            .with_registry(ctx.address())
            .start();
        if let Some(stat_actor) = &self.stat_actor_opt {
            stat_actor.do_send(handler_stat::AddPlayer(challenger.clone()));
            stat_actor.do_send(handler_stat::AddPlayer(challenged.clone()));
        }
        self.insert(MatchEntry {
            id: match_id,
            white: challenger,
            black: challenged,
            match_actor,
        });
        Ok(match_id)
    }
}

/// The challenged player declines. Returns the challenger.
#[derive(Debug, Message)]
#[rtype(result = "Result<PlayerId, RegistryError>")]
pub struct Decline(pub PlayerId);

impl Handler<Decline> for MatchRegistry {
    type Result = Result<PlayerId, RegistryError>;

    fn handle(&mut self, msg: Decline, _ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("match_registry_actor receive {:?}", msg),
        );
        self.challenges
            .remove(&msg.0)
            .ok_or(RegistryError::NoPendingChallenge(msg.0))
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Option<MatchEntry>")]
pub struct FindMatch(pub PlayerId);

impl Handler<FindMatch> for MatchRegistry {
    type Result = Option<MatchEntry>;

    fn handle(&mut self, msg: FindMatch, _ctx: &mut Self::Context) -> Self::Result {
        self.entry_of(&msg.0).cloned()
    }
}

/// The player resigns their match. Returns the winner.
#[derive(Debug, Message)]
#[rtype(result = "Result<PlayerId, RegistryError>")]
pub struct Resign(pub PlayerId);

impl Handler<Resign> for MatchRegistry {
    type Result = ResponseActFuture<Self, Result<PlayerId, RegistryError>>;

    fn handle(&mut self, msg: Resign, _ctx: &mut Self::Context) -> Self::Result {
        let span = span_debug();
        let _enter = span.enter();

        debug::log(
            &self.debug_actor_opt,
            format!("match_registry_actor receive {:?}", msg),
        );
        let Some(entry) = self.entry_of(&msg.0).cloned() else {
            return Box::pin(fut::ready(Err(RegistryError::NotInMatch(msg.0))));
        };
        let match_actor = entry.match_actor().clone();
        let player = msg.0;
        let resign = handler_match::Resign(player.clone());
        Box::pin(
            async move { match_actor.send(resign).await }
                .into_actor(self)
                .map(move |result, registry, _ctx| match result {
                    Ok(Ok(winner_color)) => {
                        let winner = entry.player(winner_color).clone();
                        let loser = entry.player(winner_color.switch()).clone();
                        registry.close(entry.id(), &winner, &loser);
                        Ok(winner)
                    }
                    Ok(Err(rejection)) => Err(rejection.into()),
                    Err(err) => {
                        tracing::error!(match_id = entry.id(), "match actor unreachable: {}", err);
                        registry.matches.remove(&entry.id());
                        registry.playing.remove(entry.player(Color::White));
                        registry.playing.remove(entry.player(Color::Black));
                        Err(RegistryError::NotInMatch(player))
                    }
                }),
        )
    }
}

/// Sent by a match actor when the match ends on the board.
#[derive(Debug, Message)]
#[rtype(result = "()")]
pub struct MatchEnded {
    match_id: MatchId,
    winner: PlayerId,
    loser: PlayerId,
}
impl MatchEnded {
    pub fn new(match_id: MatchId, winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            match_id,
            winner,
            loser,
        }
    }
}

impl Handler<MatchEnded> for MatchRegistry {
    type Result = ();

    fn handle(&mut self, msg: MatchEnded, _ctx: &mut Self::Context) -> Self::Result {
        debug::log(
            &self.debug_actor_opt,
            format!("match_registry_actor receive {:?}", msg),
        );
        if !self.close(msg.match_id, &msg.winner, &msg.loser) {
            debug::warn(
                &self.debug_actor_opt,
                format!("match {} already closed", msg.match_id),
            );
        }
    }
}

#[derive(Debug, Message)]
#[rtype(result = "Vec<MatchId>")]
pub struct ActiveMatches;

impl Handler<ActiveMatches> for MatchRegistry {
    type Result = Vec<MatchId>;

    fn handle(&mut self, _msg: ActiveMatches, _ctx: &mut Self::Context) -> Self::Result {
        let mut ids: Vec<MatchId> = self.matches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use actix::Actor;

    use super::*;
    use crate::entity::game::component::{chess_match::MoveRejection, coord::Coord};
    use crate::entity::registry::actor::match_registry::MatchRegistryActor;
    use crate::entity::registry::component::id_generator::IdGenerator;
    use crate::entity::stat::actor::stat_entity::{StatActor, StatEntity};

    fn build_registry() -> (MatchRegistryActor, StatActor) {
        let stat_actor = StatEntity::new(None).start();
        let registry =
            MatchRegistry::new(IdGenerator::new(Some(3)), Some(stat_actor.clone()), None)
                .start();
        (registry, stat_actor)
    }

    fn id(s: &str) -> PlayerId {
        PlayerId::new(s)
    }

    async fn start_match(registry: &MatchRegistryActor) -> MatchId {
        registry
            .send(Challenge::new(id("alice"), id("bob")))
            .await
            .expect("actix mailbox error")
            .expect("challenge accepted");
        registry
            .send(Accept(id("bob")))
            .await
            .expect("actix mailbox error")
            .expect("match started")
    }

    #[actix::test]
    async fn test_challenge_rules() {
        let (registry, _) = build_registry();
        let result = registry
            .send(Challenge::new(id("alice"), id("alice")))
            .await
            .unwrap();
        assert_eq!(result, Err(RegistryError::SelfChallenge));
        let result = registry.send(Accept(id("bob"))).await.unwrap();
        assert_eq!(result, Err(RegistryError::NoPendingChallenge(id("bob"))));
        registry
            .send(Challenge::new(id("alice"), id("bob")))
            .await
            .unwrap()
            .unwrap();
        let result = registry
            .send(Challenge::new(id("carol"), id("bob")))
            .await
            .unwrap();
        assert_eq!(result, Err(RegistryError::AlreadyChallenged(id("bob"))));
        let challenger = registry.send(Decline(id("bob"))).await.unwrap();
        assert_eq!(challenger, Ok(id("alice")));
        assert!(registry.send(ActiveMatches).await.unwrap().is_empty());
    }

    #[actix::test]
    async fn test_accept_starts_match_with_challenger_as_white() {
        let (registry, stat_actor) = build_registry();
        let match_id = start_match(&registry).await;
        assert_eq!(registry.send(ActiveMatches).await.unwrap(), vec![match_id]);
        let entry = registry
            .send(FindMatch(id("bob")))
            .await
            .unwrap()
            .expect("bob is playing");
        assert_eq!(entry.id(), match_id);
        assert_eq!(entry.player(Color::White), &id("alice"));
        let chess_match = entry
            .match_actor()
            .send(handler_match::GetMatchState)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chess_match.id(), match_id);
        let result = registry
            .send(Challenge::new(id("carol"), id("alice")))
            .await
            .unwrap();
        assert_eq!(result, Err(RegistryError::AlreadyInMatch(id("alice"))));
        let stats = stat_actor
            .send(handler_stat::GetPlayerStats(id("bob")))
            .await
            .unwrap()
            .expect("bob registered on accept");
        assert_eq!(stats.played(), 0);
    }

    #[actix::test]
    async fn test_resign_closes_match() {
        let (registry, stat_actor) = build_registry();
        start_match(&registry).await;
        let result = registry.send(Resign(id("carol"))).await.unwrap();
        assert_eq!(result, Err(RegistryError::NotInMatch(id("carol"))));
        let winner = registry.send(Resign(id("alice"))).await.unwrap();
        assert_eq!(winner, Ok(id("bob")));
        assert!(registry.send(ActiveMatches).await.unwrap().is_empty());
        assert!(registry.send(FindMatch(id("alice"))).await.unwrap().is_none());
        let stats = stat_actor
            .send(handler_stat::GetPlayerStats(id("bob")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!((stats.played(), stats.won()), (1, 1));
    }

    #[actix::test]
    async fn test_king_capture_closes_match() {
        let (registry, stat_actor) = build_registry();
        start_match(&registry).await;
        let entry = registry.send(FindMatch(id("alice"))).await.unwrap().unwrap();
        // fool's mate, then the queen takes the king
        let moves = [
            ("bob", "F2", "F3"),
            ("alice", "F2", "F3"),
            ("bob", "E7", "E5"),
            ("alice", "G2", "G4"),
            ("bob", "D8", "H4"),
            ("alice", "A2", "A3"),
            ("bob", "H4", "E1"),
        ];
        let mut outcomes = vec![];
        for (player, from, to) in moves {
            let outcome = entry
                .match_actor()
                .send(handler_match::AttemptMove::new(
                    id(player),
                    Coord::from_conventional(from).unwrap(),
                    Coord::from_conventional(to).unwrap(),
                ))
                .await
                .unwrap();
            outcomes.push(outcome);
        }
        assert_eq!(outcomes[0], Err(MoveRejection::WrongPlayer));
        assert!(outcomes[1..].iter().all(|outcome| outcome.is_ok()));
        // MatchEnded is queued by the match actor before it replies
        assert!(registry.send(ActiveMatches).await.unwrap().is_empty());
        let stats = stat_actor
            .send(handler_stat::GetPlayerStats(id("bob")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!((stats.won(), stats.lost()), (1, 0));
    }
}
