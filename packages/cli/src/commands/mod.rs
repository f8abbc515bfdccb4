mod add;
mod delete;
mod get;
mod list;
mod update;

use std::{error::Error, io::Write, path::PathBuf};

use add::AddCommand;
use clap::{Parser, Subcommand};
use delete::DeleteCommand;
use docrepo_core::{
    bson::{oid::ObjectId, Document},
    config::{db_settings::DbSettings, init_config},
    db::documents::raw_document::RawDocument,
    errors::repository_error::RepositoryError,
    services::db::document_repository::DocumentRepository,
};
use get::GetCommand;
use home::home_dir;
use list::ListCommand;
use log::debug;
use update::UpdateCommand;

/** Inspect and edit documents of any collection */
#[derive(Debug, Parser)]
#[clap(name = "docrepo", version)]
pub struct DocrepoCLIOptions {
    /// Directory holding the .docrepo config, defaults to home directory
    #[clap(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Database name, overrides config
    #[clap(long, global = true)]
    pub database: Option<String>,

    /// Directory or polodb:// URI of databases, overrides config
    #[clap(long, global = true)]
    pub connection_string: Option<String>,

    #[clap(subcommand)]
    pub command: DocrepoCommand,
}

#[derive(Debug, Subcommand)]
pub enum DocrepoCommand {
    #[clap(name = "list")]
    List(ListCommand),

    #[clap(name = "get")]
    Get(GetCommand),

    #[clap(name = "add")]
    Add(AddCommand),

    #[clap(name = "update")]
    Update(UpdateCommand),

    #[clap(name = "delete")]
    Delete(DeleteCommand),
}

impl DocrepoCLIOptions {
    /**
     * Load settings from config then apply command line overrides
     */
    fn resolve_settings(&self) -> Result<DbSettings, Box<dyn Error>> {
        let config_location = match &self.config_dir {
            Some(config_dir) => config_dir.clone(),
            None => home_dir().ok_or("Could not find home directory")?,
        };

        let config_manager = init_config(&config_location)?;

        let mut settings = config_manager.load_settings()?;

        if let Some(database) = &self.database {
            settings.database_name = database.clone();
        }

        if let Some(connection_string) = &self.connection_string {
            settings.connection_string = connection_string.clone();
        }

        settings.validate()?;

        Ok(settings)
    }

    /**
     * Run selected command, documents are written to out
     */
    pub async fn run(&self, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        let settings = self.resolve_settings()?;

        debug!(
            "Using database {} from {}",
            settings.database_name, settings.connection_string
        );

        match &self.command {
            DocrepoCommand::List(list) => list.run(&settings, out).await?,
            DocrepoCommand::Get(get) => get.run(&settings, out).await?,
            DocrepoCommand::Add(add) => add.run(&settings, out).await?,
            DocrepoCommand::Update(update) => update.run(&settings, out).await?,
            DocrepoCommand::Delete(delete) => delete.run(&settings).await?,
        }

        Ok(())
    }
}

/**
 * Open repository on collection known only at runtime
 */
fn open_repository(
    settings: &DbSettings,
    collection_name: &str,
) -> Result<DocumentRepository<RawDocument>, RepositoryError> {
    DocumentRepository::<RawDocument>::from_settings_with_collection(settings, collection_name)
}

/**
 * Parse hexadecimal object id
 */
fn parse_id(id: &str) -> Result<ObjectId, Box<dyn Error>> {
    let object_id = ObjectId::parse_str(id)?;

    Ok(object_id)
}

/**
 * Parse JSON object into a raw document
 */
fn parse_document(json: &str) -> Result<RawDocument, Box<dyn Error>> {
    let document: Document = serde_json::from_str(json)?;

    Ok(RawDocument::from(document))
}

/**
 * Parse CLI args then run command
 */
#[cfg(not(tarpaulin_include))]
pub async fn bootstrap() -> Result<(), Box<dyn Error>> {
    let args = DocrepoCLIOptions::parse();

    let mut stdout = std::io::stdout().lock();

    args.run(&mut stdout).await?;

    Ok(())
}
