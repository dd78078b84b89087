// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use controller_shared::settings::Settings;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "wedding-guestbook", version, about)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value = "config.toml",
        help = "Specify path to configuration file"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    cmd: Option<SubCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum SubCommand {
    /// Migrate the db. This is done automatically during start of the guestbook,
    /// but can be done without starting the guestbook using this command.
    MigrateDb,
}

impl Args {
    /// Returns true if we want to startup the controller after we finished the cli part
    pub fn controller_should_start(&self) -> bool {
        self.cmd.is_none()
    }
}

/// Parses the CLI-Arguments into [`Args`]
///
/// Also runs (optional) cli commands if necessary
pub async fn parse_args() -> Result<Args> {
    let args = Args::parse();

    if let Some(sub_command) = args.cmd.clone() {
        let settings = Settings::load(&args.config)?;
        match sub_command {
            SubCommand::MigrateDb => {
                let report = db_storage::migrations::migrate_from_url(&settings.database.url)
                    .await
                    .context("Failed to migrate database")?;

                println!(
                    "Applied {} migration(s)",
                    report.applied_migrations().len()
                );
            }
        }
    }

    Ok(args)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wedding-guestbook"]).unwrap();

        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(args.controller_should_start());
    }

    #[test]
    fn migrate_db() {
        let args =
            Args::try_parse_from(["wedding-guestbook", "-c", "extra/example.toml", "migrate-db"])
                .unwrap();

        assert_eq!(args.config, PathBuf::from("extra/example.toml"));
        assert_eq!(args.cmd, Some(SubCommand::MigrateDb));
        assert!(!args.controller_should_start());
    }

    #[test]
    fn unknown_subcommand() {
        assert!(Args::try_parse_from(["wedding-guestbook", "fix-acl"]).is_err());
    }
}
