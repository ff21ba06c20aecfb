use anyhow::{Context, Result, bail};
use clap::Parser;
use std::{
    io::{self, Read},
    path::Path,
    process,
    time::Duration,
};
use tagshot_config::Config;
use tagshot_engine::{
    Author, CommandSnapshotter, DiscordHtml, RenderAdapter, TagImagePipeline, TagRequest,
    parse_content, plain_text,
};

mod cli;

use cli::{AuthorArgs, Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse { file, plain } => {
            let content = read_input(file.as_deref())?;
            let nodes = parse_content(&content, &config.roles);
            if plain {
                println!("{}", plain_text(&nodes));
            } else {
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            }
        }
        Commands::Render { file, author } => {
            let content = read_input(file.as_deref())?;
            let nodes = parse_content(&content, &config.roles);
            let adapter = DiscordHtml::new(config.render.head_html.clone());
            println!(
                "{}",
                adapter.render_page(&resolve_author(&config, author), &nodes)
            );
        }
        Commands::Snapshot {
            file,
            output,
            author,
            timeout,
        } => {
            let content = read_input(file.as_deref())?;
            let author = resolve_author(&config, author);
            let timeout = timeout
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.snapshot_timeout());

            let pipeline = TagImagePipeline::new(
                &config.roles,
                DiscordHtml::new(config.render.head_html.clone()),
                CommandSnapshotter::new(
                    config.snapshot.program.clone(),
                    config.snapshot.args.clone(),
                ),
            )
            .with_timeout(timeout);

            let request = TagRequest {
                author: author.name,
                avatar: Some(author.avatar),
                content,
            };
            match pipeline.render(&request) {
                Ok(image) => {
                    std::fs::write(&output, &image.image)
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    log::info!("Wrote {} bytes to {}", image.image.len(), output.display());
                }
                Err(e) => {
                    log::error!("{e}");
                    eprintln!("{}", e.user_message());
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn resolve_author(config: &Config, args: AuthorArgs) -> Author {
    Author::new(
        args.author.unwrap_or_else(|| config.author.name.clone()),
        args.avatar.unwrap_or_else(|| config.author.avatar.clone()),
    )
}
