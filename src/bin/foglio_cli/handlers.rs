#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use thiserror::Error;

use foglio::application::api::ApiError;
use foglio::application::error::ActionError;
use foglio::application::service::PostService;
use foglio::config::{ClientSettings, ConfigError};
use foglio::infra::api::HttpPostApi;

use crate::args::{Cli, Commands};
use crate::io::read_value;
use crate::print::print_json;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Api(#[from] ApiError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("failed to render output: {0}")]
    Render(serde_json::Error),
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = ClientSettings::new(&cli.base_url, cli.user_id, cli.synthetic_id_threshold)?;
    let api = HttpPostApi::new(&settings.base_url)?;
    let mut service = PostService::new(api, settings.update_policy(), settings.user_id);

    match cli.command {
        Commands::List { id } => list(&mut service, id).await,
        Commands::Create {
            title,
            body,
            body_file,
        } => create(&mut service, title, body, body_file).await,
        Commands::Update {
            id,
            title,
            body,
            body_file,
        } => update(&mut service, id, title, body, body_file).await,
        Commands::Delete { id } => delete(&mut service, id).await,
    }
}

async fn list(service: &mut PostService<HttpPostApi>, id: Option<String>) -> Result<(), CliError> {
    service.load().await?;
    if let Some(filter) = id {
        service.set_filter(filter);
    }
    print_json(&service.visible())?;
    Ok(())
}

async fn create(
    service: &mut PostService<HttpPostApi>,
    title: String,
    body: Option<String>,
    body_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let body = read_value(body, body_file)?;
    service.compose_title(title);
    service.compose_body(body);
    let created = service.submit_compose().await?;
    print_json(&created)?;
    Ok(())
}

async fn update(
    service: &mut PostService<HttpPostApi>,
    id: u64,
    title: String,
    body: Option<String>,
    body_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let body = read_value(body, body_file)?;
    let updated = service.update(id, &title, &body).await?;
    print_json(&updated)?;
    Ok(())
}

async fn delete(service: &mut PostService<HttpPostApi>, id: u64) -> Result<(), CliError> {
    service.delete(id).await?;
    println!("deleted");
    Ok(())
}
