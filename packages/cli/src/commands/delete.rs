use std::error::Error;

use clap::Parser;
use colored::Colorize;
use docrepo_core::{
    config::db_settings::DbSettings, db::traits::repository::Repository,
};
use log::{debug, info};

use super::{open_repository, parse_id};

/** Remove a document using its id, unknown ids are ignored */
#[derive(Debug, Parser)]
pub struct DeleteCommand {
    #[clap(required = true)]
    pub collection: String,

    #[clap(required = true)]
    pub id: String,
}

impl DeleteCommand {
    pub async fn run(&self, settings: &DbSettings) -> Result<(), Box<dyn Error>> {
        debug!("Subcommand delete is being run...");

        let id = parse_id(&self.id)?;

        let repository = open_repository(settings, &self.collection)?;

        repository.delete(&id).await?;

        info!(
            "Document {} has been {} from {} !",
            self.id.blue(),
            "deleted".red(),
            self.collection
        );

        debug!("Subcommand delete successfully ran !");

        Ok(())
    }
}
