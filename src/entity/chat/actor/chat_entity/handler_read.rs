use std::future::Future;

use actix::{Handler, Message, ResponseFuture};
use tracing::Instrument;

use crate::monitoring::debug;
use crate::span_debug;

use super::{ChatEntity, ChatRead};

fn span_debug() -> tracing::Span {
    span_debug!("chat_entity::handler_read")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    EndOfInput,
    /// Blank line or message not addressed to the bot.
    Ignored,
    Reply(String),
}

impl<R: ChatRead + 'static> ChatEntity<R> {
    fn process(&self, line: String) -> impl Future<Output = ReadOutcome> + 'static {
        let parsed = if line.trim().is_empty() {
            Ok(None)
        } else {
            self.parser.parse_line(&line)
        };
        if let Err(err) = &parsed {
            debug::log(&self.debug_actor_opt, format!("Errors: {}", err));
        }
        let dispatcher = self.dispatcher.clone();
        let is_echo = self.is_echo;
        async move {
            let outcome = match parsed {
                Ok(None) => ReadOutcome::Ignored,
                Ok(Some(input)) => {
                    let author = input.author().clone();
                    match dispatcher.dispatch(input).await {
                        Ok(reply) => ReadOutcome::Reply(reply),
                        Err(err) => ReadOutcome::Reply(format!("{}: {}", author, err)),
                    }
                }
                Err(err) => ReadOutcome::Reply(format!("Error: {}", err)),
            };
            if is_echo {
                if let ReadOutcome::Reply(reply) = &outcome {
                    println!("{}", reply);
                }
            }
            outcome
        }
        .instrument(span_debug())
    }
}

#[derive(Debug, Message)]
#[rtype(result = "ReadOutcome")]
pub struct ParseUserInput(pub String);

impl<R: ChatRead + 'static> Handler<ParseUserInput> for ChatEntity<R> {
    type Result = ResponseFuture<ReadOutcome>;

    fn handle(&mut self, msg: ParseUserInput, _ctx: &mut Self::Context) -> Self::Result {
        Box::pin(self.process(msg.0))
    }
}

#[derive(Debug, Message)]
#[rtype(result = "ReadOutcome")]
pub struct ReadUserInput;

impl<R: ChatRead + 'static> Handler<ReadUserInput> for ChatEntity<R> {
    type Result = ResponseFuture<ReadOutcome>;

    fn handle(&mut self, _msg: ReadUserInput, _ctx: &mut Self::Context) -> Self::Result {
        let Some(line) = self.chat_reader.chat_read() else {
            return Box::pin(async { ReadOutcome::EndOfInput });
        };
        Box::pin(self.process(line))
    }
}

#[cfg(test)]
mod tests {
    use actix::{Actor, Addr};

    use super::*;
    use crate::entity::chat::actor::chat_entity::ChatReadVecStringWrapper;
    use crate::entity::chat::component::command::parser::InputParser;
    use crate::entity::registry::actor::match_registry::MatchRegistry;
    use crate::entity::registry::component::id_generator::IdGenerator;
    use crate::entity::stat::actor::stat_entity::StatEntity;

    fn build_chat_actor(inputs: &[&str]) -> Addr<ChatEntity<ChatReadVecStringWrapper>> {
        let stat_actor = StatEntity::new(None).start();
        let registry_actor =
            MatchRegistry::new(IdGenerator::new(Some(5)), Some(stat_actor.clone()), None)
                .start();
        ChatEntity::new(
            ChatReadVecStringWrapper::new(inputs),
            InputParser::default(),
            registry_actor,
            Some(stat_actor),
            None,
        )
        .start()
    }

    async fn read_all(chat_actor: &Addr<ChatEntity<ChatReadVecStringWrapper>>) -> Vec<ReadOutcome> {
        let mut outcomes = vec![];
        loop {
            let outcome = chat_actor
                .send(ReadUserInput)
                .await
                .expect("actix mailbox error");
            if outcome == ReadOutcome::EndOfInput {
                break;
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    fn reply(outcome: &ReadOutcome) -> &str {
        match outcome {
            ReadOutcome::Reply(reply) => reply,
            _ => panic!("expected a reply, got {:?}", outcome),
        }
    }

    #[actix::test]
    async fn test_ignored_lines() {
        let chat_actor = build_chat_actor(&["", "alice good morning"]);
        let outcomes = read_all(&chat_actor).await;
        assert_eq!(outcomes, vec![ReadOutcome::Ignored, ReadOutcome::Ignored]);
    }

    #[actix::test]
    async fn test_chat_session() {
        let chat_actor = build_chat_actor(&[
            "alice !challenge bob",
            "bob !accept",
            "bob !move e7 e5",
            "alice !move e2e4",
            "bob !move e5 e4",
            "bob !display characterial",
            "carol !check",
            "bob !resign",
            "alice !stats",
        ]);
        let outcomes = read_all(&chat_actor).await;
        assert_eq!(outcomes.len(), 9);
        assert!(reply(&outcomes[0]).starts_with("alice challenges bob"));
        assert!(reply(&outcomes[1]).contains("alice plays White and bob plays Black"));
        assert_eq!(
            reply(&outcomes[2]),
            "bob: move rejected: it is not your turn or there is no piece on that square"
        );
        assert_eq!(reply(&outcomes[3]), "White Pawn E2 -> E4");
        assert_eq!(
            reply(&outcomes[4]),
            "bob: move rejected: it is not your turn or there is no piece on that square"
        );
        assert!(reply(&outcomes[5]).starts_with("[R|N|B|Q|K|B|N|R]"));
        assert_eq!(reply(&outcomes[6]), "carol: you are not playing a match");
        assert_eq!(reply(&outcomes[7]), "bob resigned, alice wins");
        assert_eq!(
            reply(&outcomes[8]),
            "alice: played: 1 won: 1 lost: 0 stale: 0"
        );
    }

    #[actix::test]
    async fn test_parse_error_reply() {
        let chat_actor = build_chat_actor(&[]);
        let outcome = chat_actor
            .send(ParseUserInput("alice !move z2 e4".to_string()))
            .await
            .unwrap();
        assert!(reply(&outcome).starts_with("Error: "));
        let outcome = chat_actor
            .send(ParseUserInput("alice !help".to_string()))
            .await
            .unwrap();
        assert!(reply(&outcome).contains("!challenge <player>"));
    }
}
