use std::{error::Error, io::Write};

use clap::Parser;
use docrepo_core::{config::db_settings::DbSettings, db::traits::repository::Repository};
use log::debug;

use super::open_repository;

/** Print every document of a collection, one JSON document per line */
#[derive(Debug, Parser)]
pub struct ListCommand {
    #[clap(required = true)]
    pub collection: String,
}

impl ListCommand {
    pub async fn run(&self, settings: &DbSettings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        debug!("Subcommand list is being run...");

        let repository = open_repository(settings, &self.collection)?;

        for document in repository.get_all().await? {
            writeln!(out, "{}", serde_json::to_string(&document?)?)?;
        }

        debug!("Subcommand list successfully ran !");

        Ok(())
    }
}
