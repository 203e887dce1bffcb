use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use actix::Actor;
use clap::Parser;

use chesscord::configuration::Configuration;
use chesscord::entity::chat::actor::chat_entity::{self, handler_read};
use chesscord::entity::chat::component::command::parser::{InputParser, DEFAULT_PREFIX};
use chesscord::entity::registry::actor::match_registry::MatchRegistry;
use chesscord::entity::registry::component::id_generator::IdGenerator;
use chesscord::entity::stat::actor::stat_entity::StatEntity;
use chesscord::monitoring::{debug, trace, version};
use chesscord::span_error;

/// Chess bot reading `<author> <message>` lines on stdin.
#[derive(Debug, Parser)]
#[command(name = "chesscord", version)]
struct Cli {
    /// Prefix of the bot commands
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    /// Print every debug message as soon as it is queued
    #[arg(long)]
    debug: bool,
    /// Append match results to this file
    #[arg(long)]
    stat_file: Option<PathBuf>,
    /// Also write logs to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Seed of the match id generator
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for Configuration {
    fn from(cli: Cli) -> Self {
        let mut configuration = Configuration::default();
        configuration.update_prefix(&cli.prefix);
        configuration.update_debug_show(cli.debug);
        if let Some(stat_file) = cli.stat_file {
            configuration.update_stat_file(stat_file);
        }
        if let Some(log_dir) = cli.log_dir {
            configuration.update_log_dir(log_dir);
        }
        if let Some(seed) = cli.seed {
            configuration.update_seed(seed);
        }
        configuration
    }
}

#[actix::main]
async fn main() {
    let configuration = Configuration::from(Cli::parse());
    let _guard_opt = trace::init(configuration.log_dir_opt());
    tracing::info!("chesscord {}", version::long_version());

    let debug_actor_opt: Option<debug::DebugActor> =
        Some(debug::DebugEntity::new(configuration.debug_show()).start());
    let mut stat_entity = StatEntity::new(debug_actor_opt.clone());
    if let Some(stat_file) = configuration.stat_file_opt() {
        stat_entity = stat_entity.with_stat_file(stat_file.to_path_buf());
    }
    let stat_actor = stat_entity.start();
    let registry_actor = MatchRegistry::new(
        IdGenerator::new(configuration.seed_opt()),
        Some(stat_actor.clone()),
        debug_actor_opt.clone(),
    )
    .start();

    let stdin = Arc::new(Mutex::new(io::stdin()));
    let chat_reader = chat_entity::ChatReadWrapper::new(stdin);
    let chat_actor = chat_entity::ChatEntity::new(
        chat_reader,
        InputParser::new(configuration.prefix()),
        registry_actor,
        Some(stat_actor),
        debug_actor_opt.clone(),
    )
    .with_echo()
    .start();

    println!(
        "Enter '<author> <message>' lines, '<author> {}help' for the commands",
        configuration.prefix()
    );
    loop {
        match chat_actor.send(handler_read::ReadUserInput).await {
            Ok(handler_read::ReadOutcome::EndOfInput) => break,
            Ok(_) => {}
            Err(err) => {
                let span = span_error!("main");
                let _enter = span.enter();
                tracing::error!("chat actor unreachable: {}", err);
                break;
            }
        }
    }
    if let Some(debug_actor) = &debug_actor_opt {
        let _ = debug_actor.send(debug::Flush).await;
    }
    tracing::info!("end of input, bye");
}
