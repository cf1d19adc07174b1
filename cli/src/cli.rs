// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use role_core::{APP_NAME, Role};
use tracing_subscriber::EnvFilter;

use crate::cmd_account::{CmdLogin, CmdLogout, CmdRegister, CmdWhoami};
use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventNew};
use crate::cmd_feed::{CmdHome, CmdProfile};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;

/// Run the Role command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Find and publish rolês, the social events around you.")
            .author("Zig Team <dev@zig-app.com.br>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to home
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/role/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/role/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdHome::command())
            .subcommand(CmdProfile::command())
            .subcommand(CmdLogin::command())
            .subcommand(CmdRegister::command())
            .subcommand(CmdLogout::command())
            .subcommand(CmdWhoami::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdHome::NAME, _)) | None => Home(CmdHome),
            Some((CmdProfile::NAME, _)) => Profile(CmdProfile),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdRegister::NAME, matches)) => Register(CmdRegister::from(matches)),
            Some((CmdLogout::NAME, _)) => Logout(CmdLogout),
            Some((CmdWhoami::NAME, matches)) => Whoami(CmdWhoami::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)),
                Some((CmdEventDelete::NAME, matches)) => {
                    EventDelete(CmdEventDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Browse all events
    Home(CmdHome),

    /// Browse your own events
    Profile(CmdProfile),

    /// Sign in
    Login(CmdLogin),

    /// Create an account
    Register(CmdRegister),

    /// Forget the stored session
    Logout(CmdLogout),

    /// Show the signed-in user
    Whoami(CmdWhoami),

    /// Publish a new event
    EventNew(CmdEventNew),

    /// List events
    EventList(CmdEventList),

    /// Edit one of your events
    EventEdit(CmdEventEdit),

    /// Delete one of your events
    EventDelete(CmdEventDelete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Home(a)        => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Profile(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Login(a)       => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Register(a)    => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Logout(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Whoami(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventNew(a)    => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventList(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventEdit(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventDelete(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Role) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut role = Role::new(config).await?;

        f(&mut role).await
    }
}
