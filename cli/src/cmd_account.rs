// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use role_core::{Registration, Role, User};

use crate::arg::CommonArgs;
use crate::prompt::{prompt_email, prompt_password};
use crate::util::OutputFormat;

fn password_arg() -> Arg {
    arg!(-p --password <PASSWORD> "Password, prompted for when omitted")
}

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Sign in and remember the session")
            .arg(arg!(-e --email <EMAIL> "E-mail (or username) of the account"))
            .arg(password_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            email: matches.get_one("email").cloned(),
            password: matches.get_one("password").cloned(),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(email = ?self.email, "signing in...");
        let email = match self.email {
            Some(a) => a,
            None => prompt_email()?,
        };
        let password = match self.password {
            Some(a) => a,
            None => prompt_password()?,
        };

        let session = role.login(&email, &password).await?;
        println!("Signed in as {}", session.username.bold());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRegister {
    pub username: String,
    pub email: String,
    pub password: Option<String>,
}

impl CmdRegister {
    pub const NAME: &str = "register";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("signup")
            .about("Create a new account")
            .arg(arg!(<USERNAME> "Name shown to other users"))
            .arg(arg!(<EMAIL> "E-mail of the new account"))
            .arg(password_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            username: matches
                .get_one::<String>("USERNAME")
                .cloned()
                .unwrap_or_default(),
            email: matches
                .get_one::<String>("EMAIL")
                .cloned()
                .unwrap_or_default(),
            password: matches.get_one("password").cloned(),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(username = %self.username, "registering...");
        let password = match self.password {
            Some(a) => a,
            None => prompt_password()?,
        };

        let form = Registration {
            username: self.username,
            email: self.email,
            password,
        };
        let user = role.register(&form).await?;
        println!(
            "Account {} created. Sign in with `role login`.",
            user.username.bold()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdLogout;

impl CmdLogout {
    pub const NAME: &str = "logout";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Forget the stored session")
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!("signing out...");
        if role.logout().await? {
            println!("Signed out");
        } else {
            println!("{}", "Not signed in".italic());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdWhoami {
    pub output_format: OutputFormat,
}

impl CmdWhoami {
    pub const NAME: &str = "whoami";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the signed-in user")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "asking the server who we are...");
        let user = role.whoami().await?;
        println!("{}", format_user(&user, self.output_format)?);
        Ok(())
    }
}

fn format_user(user: &User, output_format: OutputFormat) -> Result<String, Box<dyn Error>> {
    Ok(match output_format {
        OutputFormat::Json => serde_json::to_string_pretty(user)?,
        OutputFormat::Table => format!(
            "{} <{}> {}",
            user.username.bold(),
            user.email,
            format!("#{}", user.id).bright_black()
        ),
    })
}
