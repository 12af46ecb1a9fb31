use clap::Parser;
use colored::*;
use devstash::api::DevstashApi;
use devstash::commands::save::SaveRequest;
use devstash::commands::{CmdMessage, MessageLevel};
use devstash::config::{default_config_path, ConfigOverrides, Settings};
use devstash::editor::get_editor;
use devstash::error::Result;
use devstash::input::{InputSource, ProcessStdin};
use devstash::webhook::HttpTransport;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("DEVSTASH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let overrides = ConfigOverrides {
        webhook_url: cli.webhook_url,
        auth_token: cli.auth_token,
    };
    // A broken config file must not lock the user out of the command that
    // repairs it.
    let settings = match &cli.command {
        Some(Commands::Config { .. }) => Settings::load_or_default(config_path, &overrides)?,
        _ => Settings::load(config_path, &overrides)?,
    };
    let api = DevstashApi::new(HttpTransport::new()?, settings);

    match cli.command {
        None => handle_save(
            &api,
            InputSource::select(cli.file, None),
            cli.tags,
            cli.note,
        ),
        Some(Commands::New { tags, note }) => handle_save(
            &api,
            InputSource::select(None, Some(get_editor())),
            tags,
            note,
        ),
        Some(Commands::Config { action }) => handle_config(&api, action),
    }
}

fn handle_save(
    api: &DevstashApi<HttpTransport>,
    source: InputSource,
    tags: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let request = SaveRequest {
        source,
        tags: tags.unwrap_or_default(),
        note: note.unwrap_or_default(),
    };
    let result = api.save(&request, &mut ProcessStdin)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &DevstashApi<HttpTransport>, action: ConfigCommands) -> Result<()> {
    let result = match action {
        ConfigCommands::Set { key, value } => api.config_set(&key, value)?,
        ConfigCommands::Get { key } => api.config_get(&key)?,
        ConfigCommands::Path => api.config_path()?,
    };
    if let Some(value) = &result.value {
        println!("{}", value);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
