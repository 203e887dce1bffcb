use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use actix::{Actor, Addr, AsyncContext, Context, Handler, Message};

const DRAIN_INTERVAL: Duration = Duration::from_millis(100);
const MAX_KEPT_MESSAGES: usize = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DebugLevel {
    Info,
    Warning,
}

pub struct DebugMessage(String);
pub struct DebugData {
    time: chrono::DateTime<chrono::Utc>,
    level: DebugLevel,
    message: DebugMessage,
}
impl DebugData {
    pub fn new(level: DebugLevel, message: DebugMessage) -> Self {
        Self {
            time: chrono::Utc::now(),
            level,
            message,
        }
    }
}
impl fmt::Display for DebugData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time:{}\tlevel:{:?}\tmessage:{}",
            self.time, self.level, self.message.0
        )
    }
}

/// Background debug log.
///
/// Messages are queued by whoever holds the address and written to the
/// tracing subscriber by a periodic drain, so that senders never wait on it.
#[derive(Default)]
pub struct DebugEntity {
    pending: VecDeque<DebugData>,
    stack: VecDeque<DebugData>,
    is_show: bool,
}
impl DebugEntity {
    pub fn new(is_show: bool) -> Self {
        Self {
            is_show,
            ..Default::default()
        }
    }
    pub fn push(&mut self, level: DebugLevel, message: DebugMessage) {
        let debug_data = DebugData::new(level, message);
        if self.is_show {
            println!("debug => {}", debug_data);
        }
        self.pending.push_back(debug_data);
    }
    fn drain(&mut self) -> usize {
        let n = self.pending.len();
        while let Some(debug_data) = self.pending.pop_front() {
            match debug_data.level {
                DebugLevel::Info => {
                    tracing::debug!(target: "chesscord::debug", "{}", debug_data.message.0)
                }
                DebugLevel::Warning => {
                    tracing::warn!(target: "chesscord::debug", "{}", debug_data.message.0)
                }
            }
            self.stack.push_back(debug_data);
            if self.stack.len() > MAX_KEPT_MESSAGES {
                self.stack.pop_front();
            }
        }
        n
    }
}
pub type DebugActor = Addr<DebugEntity>;

impl Actor for DebugEntity {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.run_interval(DRAIN_INTERVAL, |debug_entity, _ctx| {
            debug_entity.drain();
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.drain();
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct AddMessage(pub String);

impl Handler<AddMessage> for DebugEntity {
    type Result = ();

    fn handle(&mut self, msg: AddMessage, _ctx: &mut Self::Context) -> Self::Result {
        self.push(DebugLevel::Info, DebugMessage(msg.0))
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct AddWarning(pub String);

impl Handler<AddWarning> for DebugEntity {
    type Result = ();

    fn handle(&mut self, msg: AddWarning, _ctx: &mut Self::Context) -> Self::Result {
        self.push(DebugLevel::Warning, DebugMessage(msg.0))
    }
}

#[derive(Message)]
#[rtype(result = "usize")]
pub struct Flush;

impl Handler<Flush> for DebugEntity {
    type Result = usize;

    fn handle(&mut self, _msg: Flush, _ctx: &mut Self::Context) -> Self::Result {
        self.drain()
    }
}

#[derive(Message)]
#[rtype(result = "Vec<String>")]
pub struct ShowAllMessages;

impl Handler<ShowAllMessages> for DebugEntity {
    type Result = Vec<String>;

    fn handle(&mut self, _msg: ShowAllMessages, _ctx: &mut Self::Context) -> Self::Result {
        self.stack
            .iter()
            .chain(self.pending.iter())
            .map(|el| el.to_string())
            .collect()
    }
}

/// Send a message to the debug actor, if any.
pub fn log(debug_actor_opt: &Option<DebugActor>, message: String) {
    if let Some(debug_actor) = debug_actor_opt {
        debug_actor.do_send(AddMessage(message));
    }
}

/// Send a warning to the debug actor, if any.
pub fn warn(debug_actor_opt: &Option<DebugActor>, message: String) {
    if let Some(debug_actor) = debug_actor_opt {
        debug_actor.do_send(AddWarning(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix::test]
    async fn test_debug_messages_are_kept_in_order() {
        let debug_actor = DebugEntity::new(false).start();
        debug_actor.do_send(AddMessage("board initialized".to_string()));
        debug_actor.do_send(AddWarning("player already registered".to_string()));
        let flushed = debug_actor.send(Flush).await.expect("actix mailbox error");
        assert_eq!(flushed, 2);
        let messages = debug_actor
            .send(ShowAllMessages)
            .await
            .expect("actix mailbox error");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].ends_with("message:board initialized"));
        assert!(messages[1].contains("level:Warning"));
    }

    #[actix::test]
    async fn test_periodic_drain() {
        let debug_actor = DebugEntity::default().start();
        debug_actor.do_send(AddMessage("match started".to_string()));
        tokio::time::sleep(DRAIN_INTERVAL * 3).await;
        let flushed = debug_actor.send(Flush).await.expect("actix mailbox error");
        assert_eq!(flushed, 0);
    }
}
