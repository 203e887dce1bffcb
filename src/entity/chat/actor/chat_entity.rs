pub mod dispatch;
pub mod handler_read;

use std::io::Stdin;
use std::sync::{Arc, Mutex};

use actix::{Actor, Addr, Context};

use crate::entity::chat::component::command::parser::InputParser;
use crate::entity::registry::actor::match_registry::MatchRegistryActor;
use crate::entity::stat::actor::stat_entity::StatActor;
use crate::monitoring::debug;

/// Front of the bot: reads chat lines, runs the commands, produces replies.
pub struct ChatEntity<R>
where
    R: ChatRead + 'static,
{
    chat_reader: R,
    parser: InputParser,
    dispatcher: dispatch::Dispatcher,
    is_echo: bool,
    debug_actor_opt: Option<debug::DebugActor>,
}
impl<R> Actor for ChatEntity<R>
where
    R: ChatRead + 'static,
{
    type Context = Context<Self>;
}

impl<R> ChatEntity<R>
where
    R: ChatRead + 'static,
{
    pub fn new(
        chat_reader: R,
        parser: InputParser,
        registry_actor: MatchRegistryActor,
        stat_actor_opt: Option<StatActor>,
        debug_actor_opt: Option<debug::DebugActor>,
    ) -> Self {
        let dispatcher = dispatch::Dispatcher::new(parser.prefix(), registry_actor, stat_actor_opt);
        Self {
            chat_reader,
            parser,
            dispatcher,
            is_echo: false,
            debug_actor_opt,
        }
    }
    /// Print every reply on stdout.
    pub fn with_echo(mut self) -> Self {
        self.is_echo = true;
        self
    }
}

pub type ChatActor<R> = Addr<ChatEntity<R>>;

pub trait ChatRead: Unpin {
    /// Next input line, `None` at the end of the input.
    fn chat_read(&mut self) -> Option<String>;
}

pub struct ChatReadWrapper {
    stdin: Arc<Mutex<Stdin>>,
}
impl ChatReadWrapper {
    pub fn new(stdin: Arc<Mutex<Stdin>>) -> Self {
        ChatReadWrapper { stdin }
    }
}

impl ChatRead for ChatReadWrapper {
    fn chat_read(&mut self) -> Option<String> {
        let mut input = String::new();
        let stdin = self.stdin.lock().ok()?;
        match stdin.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(err) => {
                tracing::error!("cannot read stdin: {}", err);
                None
            }
        }
    }
}

pub struct ChatReadVecStringWrapper {
    idx: usize,
    inputs: Vec<String>,
}
impl ChatReadVecStringWrapper {
    pub fn new(inputs: &[&str]) -> Self {
        ChatReadVecStringWrapper {
            idx: 0,
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }
}
impl ChatRead for ChatReadVecStringWrapper {
    fn chat_read(&mut self) -> Option<String> {
        let result = self.inputs.get(self.idx).cloned();
        if result.is_some() {
            self.idx += 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_string_reader() {
        let mut reader = ChatReadVecStringWrapper::new(&["alice !help", ""]);
        assert_eq!(reader.chat_read().as_deref(), Some("alice !help"));
        assert_eq!(reader.chat_read().as_deref(), Some(""));
        assert_eq!(reader.chat_read(), None);
        assert_eq!(reader.chat_read(), None);
    }
}
