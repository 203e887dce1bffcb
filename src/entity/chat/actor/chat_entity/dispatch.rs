use crate::entity::chat::component::{
    chat_error::ChatError,
    command::{self, ChatInput, Command, DisplayRequest},
};
use crate::entity::game::actor::match_manager::handler_match;
use crate::entity::game::component::{coord::Coord, player::PlayerId, square::Color};
use crate::entity::registry::actor::match_registry::{
    handler_registry, MatchEntry, MatchRegistryActor,
};
use crate::entity::stat::actor::stat_entity::{handler_stat, StatActor};
use crate::ui::board as ui_board;

/// Runs a parsed command against the registry and the match actors.
#[derive(Clone)]
pub struct Dispatcher {
    prefix: String,
    registry_actor: MatchRegistryActor,
    stat_actor_opt: Option<StatActor>,
}

impl Dispatcher {
    pub fn new(
        prefix: &str,
        registry_actor: MatchRegistryActor,
        stat_actor_opt: Option<StatActor>,
    ) -> Self {
        Self {
            prefix: prefix.to_string(),
            registry_actor,
            stat_actor_opt,
        }
    }

    pub async fn dispatch(&self, input: ChatInput) -> Result<String, ChatError> {
        let author = input.author();
        tracing::debug!("{} sent {:?}", author, input.command());
        match input.command() {
            Command::Help => Ok(command::help(&self.prefix)),
            Command::Challenge(challenged) => self.challenge(author, challenged).await,
            Command::Accept => self.accept(author).await,
            Command::Decline => {
                let challenger = self
                    .registry_actor
                    .send(handler_registry::Decline(author.clone()))
                    .await??;
                Ok(format!("{} declined the challenge of {}", author, challenger))
            }
            Command::Move { from, to } => self.attempt_move(author, *from, *to).await,
            Command::Display(request) => self.display(author, *request).await,
            Command::Check => {
                let entry = self.find_match(author).await?;
                let color = entry.color_of(author).ok_or(ChatError::NotInMatch)?;
                let is_in_check = entry
                    .match_actor()
                    .send(handler_match::IsInCheck(color))
                    .await?;
                if is_in_check {
                    Ok(format!("{} ({}) is in check", author, color))
                } else {
                    Ok(format!("{} ({}) is not in check", author, color))
                }
            }
            Command::Resign => {
                let winner = self
                    .registry_actor
                    .send(handler_registry::Resign(author.clone()))
                    .await??;
                Ok(format!("{} resigned, {} wins", author, winner))
            }
            Command::Stats(player_opt) => {
                let player = player_opt.as_ref().unwrap_or(author);
                self.stats(player).await
            }
            Command::History => {
                let entry = self.find_match(author).await?;
                let history = entry
                    .match_actor()
                    .send(handler_match::GetHistory)
                    .await?
                    .map_err(|_| ChatError::MatchUnavailable)?;
                Ok(ui_board::format_history(&history))
            }
        }
    }

    async fn find_match(&self, player: &PlayerId) -> Result<MatchEntry, ChatError> {
        self.registry_actor
            .send(handler_registry::FindMatch(player.clone()))
            .await?
            .ok_or(ChatError::NotInMatch)
    }

    async fn challenge(
        &self,
        challenger: &PlayerId,
        challenged: &PlayerId,
    ) -> Result<String, ChatError> {
        self.registry_actor
            .send(handler_registry::Challenge::new(
                challenger.clone(),
                challenged.clone(),
            ))
            .await??;
        Ok(format!(
            "{} challenges {}. {}, answer with {}accept or {}decline",
            challenger, challenged, challenged, self.prefix, self.prefix
        ))
    }

    async fn accept(&self, author: &PlayerId) -> Result<String, ChatError> {
        let match_id = self
            .registry_actor
            .send(handler_registry::Accept(author.clone()))
            .await??;
        let entry = self.find_match(author).await?;
        let chess_match = entry
            .match_actor()
            .send(handler_match::GetMatchState)
            .await?
            .map_err(|_| ChatError::MatchUnavailable)?;
        Ok(format!(
            "Match {} started, {} plays White and {} plays Black\n{}",
            match_id,
            entry.player(Color::White),
            entry.player(Color::Black),
            ui_board::format_match(&chess_match)
        ))
    }

    async fn attempt_move(
        &self,
        author: &PlayerId,
        from: Coord,
        to: Coord,
    ) -> Result<String, ChatError> {
        let entry = self.find_match(author).await?;
        let applied = entry
            .match_actor()
            .send(handler_match::AttemptMove::new(author.clone(), from, to))
            .await??;
        Ok(ui_board::format_applied_move(&applied))
    }

    async fn display(
        &self,
        author: &PlayerId,
        request: DisplayRequest,
    ) -> Result<String, ChatError> {
        let entry = self.find_match(author).await?;
        match request {
            DisplayRequest::Text => {
                let chess_match = entry
                    .match_actor()
                    .send(handler_match::GetMatchState)
                    .await?
                    .map_err(|_| ChatError::MatchUnavailable)?;
                Ok(ui_board::format_match(&chess_match))
            }
            DisplayRequest::Snapshot(mode) => {
                let snapshot = entry
                    .match_actor()
                    .send(handler_match::GetSnapshot(mode))
                    .await?
                    .map_err(|_| ChatError::MatchUnavailable)?;
                Ok(snapshot.to_string())
            }
        }
    }

    async fn stats(&self, player: &PlayerId) -> Result<String, ChatError> {
        let stats_opt = match &self.stat_actor_opt {
            Some(stat_actor) => {
                stat_actor
                    .send(handler_stat::GetPlayerStats(player.clone()))
                    .await?
            }
            None => None,
        };
        let stats = stats_opt.ok_or_else(|| ChatError::NoStats(player.clone()))?;
        Ok(format!("{}: {}", player, stats))
    }
}
