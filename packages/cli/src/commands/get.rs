use std::{error::Error, io::Write};

use clap::Parser;
use colored::Colorize;
use docrepo_core::{
    config::db_settings::DbSettings, db::traits::repository::Repository,
};
use log::{debug, warn};

use super::{open_repository, parse_id};

/** Print a document using its id */
#[derive(Debug, Parser)]
pub struct GetCommand {
    #[clap(required = true)]
    pub collection: String,

    #[clap(required = true)]
    pub id: String,
}

impl GetCommand {
    pub async fn run(&self, settings: &DbSettings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        debug!("Subcommand get is being run...");

        let id = parse_id(&self.id)?;

        let repository = open_repository(settings, &self.collection)?;

        match repository.get_by_id(&id).await? {
            Some(document) => writeln!(out, "{}", serde_json::to_string(&document)?)?,
            None => warn!(
                "Document {} {} in {}",
                self.id.blue(),
                "not found".red(),
                self.collection
            ),
        }

        debug!("Subcommand get successfully ran !");

        Ok(())
    }
}
