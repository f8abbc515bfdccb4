use std::{error::Error, io::Write};

use clap::Parser;
use docrepo_core::{
    config::db_settings::DbSettings, db::traits::repository::Repository,
    entities::entity::Entity,
};
use log::debug;

use super::{open_repository, parse_document, parse_id};

/** Replace the document stored under id, inserting it when missing */
#[derive(Debug, Parser)]
pub struct UpdateCommand {
    #[clap(required = true)]
    pub collection: String,

    #[clap(required = true)]
    pub id: String,

    #[clap(required = true)]
    pub document: String,
}

impl UpdateCommand {
    pub async fn run(&self, settings: &DbSettings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        debug!("Subcommand update is being run...");

        let id = parse_id(&self.id)?;

        let mut document = parse_document(&self.document)?;
        document.set_id(id);

        let repository = open_repository(settings, &self.collection)?;

        let updated = repository.update(document).await?;

        writeln!(out, "{}", serde_json::to_string(&updated)?)?;

        debug!("Subcommand update successfully ran !");

        Ok(())
    }
}
