use std::{error::Error, io::Write};

use clap::Parser;
use docrepo_core::{
    config::db_settings::DbSettings, db::traits::repository::Repository,
    entities::entity::Entity,
};
use log::debug;

use super::{open_repository, parse_document};

/** Insert a JSON document, printing the id it was stored under */
#[derive(Debug, Parser)]
pub struct AddCommand {
    #[clap(required = true)]
    pub collection: String,

    #[clap(required = true)]
    pub document: String,
}

impl AddCommand {
    pub async fn run(&self, settings: &DbSettings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        debug!("Subcommand add is being run...");

        let document = parse_document(&self.document)?;

        let repository = open_repository(settings, &self.collection)?;

        let added = repository.add(document).await?;

        if let Some(id) = added.id() {
            writeln!(out, "{}", id.to_hex())?;
        }

        debug!("Subcommand add successfully ran !");

        Ok(())
    }
}
