use std::io::{self, Read};

use anyhow::{bail, Result};
use evoq::{cli, config::Config, handlers};
use is_terminal::IsTerminal;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();
    let cfg = Config::load();

    // Resolve model: CLI overrides config
    let effective_model = args
        .model
        .clone()
        .or_else(|| cfg.get("TEXT_MODEL"))
        .unwrap_or_else(|| "gemini-2.5-flash".to_string());

    // stdin handling (pipe support)
    let mut prompt_from_stdin = String::new();
    let stdin_is_tty = io::stdin().is_terminal();
    if !stdin_is_tty {
        io::stdin().read_to_string(&mut prompt_from_stdin)?;
    }

    // Resolve prompt: stdin + optional positional
    let arg_prompt = args.prompt.clone().unwrap_or_default();
    let prompt = if !prompt_from_stdin.is_empty() && !arg_prompt.is_empty() {
        format!("{}\n\n{}", prompt_from_stdin.trim_end(), arg_prompt)
    } else if !prompt_from_stdin.is_empty() {
        prompt_from_stdin
    } else {
        arg_prompt
    };

    let markdown = if args.no_md {
        false
    } else if args.md {
        true
    } else {
        cfg.get_bool("PRETTIFY_MARKDOWN")
    };

    // Workspace lookups need no prompt
    if args.list_objects {
        return handlers::objects::list(false).await;
    }
    if args.all_versions {
        return handlers::objects::list(true).await;
    }
    if !args.describe.is_empty() {
        return handlers::objects::describe(&args.describe).await;
    }
    if !args.versions.is_empty() {
        return handlers::objects::versions(&args.versions).await;
    }
    if let Some(object) = &args.download {
        return handlers::objects::download(object, args.attribute.as_deref()).await;
    }

    if prompt.trim().is_empty() {
        bail!("Provide a prompt, or use --list-objects/--describe/--versions/--download");
    }

    if args.chart {
        handlers::chart::run(&prompt).await
    } else if args.ask {
        handlers::ask::AskHandler::run(&prompt, markdown).await
    } else if args.exec {
        handlers::exec::run(&prompt).await
    } else {
        handlers::agent::AgentHandler::run(
            &prompt,
            &effective_model,
            args.temperature,
            args.top_p,
            markdown,
        )
        .await
    }
}
