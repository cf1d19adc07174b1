// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::Zoned;
use role_core::{
    AuthSession, Composer, Event, EventFeed, EventId, Pick, Role, StrapiClient, TextField,
    TimeSlot,
};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::prompt::prompt_confirm;
use crate::tui;
use crate::util::{OutputFormat, parse_datetime};

/// Event attributes given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<PathBuf>,
}

impl EventFields {
    fn command(cmd: Command) -> Command {
        cmd.arg(EventArgs::title())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::location())
            .arg(EventArgs::description())
            .arg(EventArgs::image())
    }

    fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            location: EventArgs::get_location(matches),
            description: EventArgs::get_description(matches),
            image: EventArgs::get_image(matches),
        }
    }

    /// No field given, so the editor is opened instead.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the given fields into the composer's draft.
    pub fn apply(self, composer: &mut Composer, now: &Zoned) -> Result<(), Box<dyn Error>> {
        let texts = [
            (TextField::Title, self.title),
            (TextField::Location, self.location),
            (TextField::Description, self.description),
        ];
        for (field, value) in texts {
            if let Some(value) = value {
                composer.set_text(field, value);
            }
        }

        for (slot, value) in [(TimeSlot::Start, self.start), (TimeSlot::End, self.end)] {
            if let Some(value) = value {
                let t = parse_datetime(now, &value)?;
                composer.pick_time(slot, Pick::Selected(t));
            }
        }

        if let Some(path) = self.image {
            composer.pick_image(path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: EventFields,
    pub output_format: OutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        let cmd = Command::new(Self::NAME)
            .alias("add")
            .about("Publish a new event, in the editor unless fields are given");
        EventFields::command(cmd).arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "publishing new event...");
        let session = role.session().await?;
        let composer = role.composer();
        publish(role, &session, composer, self.fields, self.output_format).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub fields: EventFields,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        let cmd = Command::new(Self::NAME)
            .about("Edit one of your events, in the editor unless fields are given")
            .arg(EventArgs::id("edit"));
        EventFields::command(cmd).arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match EventArgs::get_id(matches) {
            Some(id) => Self {
                id,
                fields: EventFields::from(matches),
                output_format: CommonArgs::get_output_format(matches),
            },
            None => unreachable!(),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let session = role.session().await?;
        let feed = load_own_events(role, &session).await?;
        let composer = feed.composer_for(self.id, role.now(), role.config().time_snap())?;
        publish(role, &session, composer, self.fields, self.output_format).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    pub id: EventId,
    pub yes: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete one of your events")
            .arg(EventArgs::id("delete"))
            .arg(CommonArgs::yes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match EventArgs::get_id(matches) {
            Some(id) => Self {
                id,
                yes: CommonArgs::get_yes(matches),
            },
            None => unreachable!(),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let session = role.session().await?;
        let mut feed = load_own_events(role, &session).await?;
        let title = match feed.get(self.id) {
            Some(event) => event.title.clone(),
            None => return Err(format!("Event #{} is not one of your events", self.id).into()),
        };

        if !self.yes && !prompt_confirm(&format!("Delete \"{title}\"?"))? {
            tracing::info!(id = %self.id, "user kept the event");
            return Ok(());
        }

        feed.delete(&role.backend_for(&session), self.id).await?;
        println!("Deleted {}", title.bold());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub mine: bool,
    pub expand: bool,
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List published events")
            .arg(EventArgs::mine())
            .arg(EventArgs::expand())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            mine: EventArgs::get_mine(matches),
            expand: EventArgs::get_expand(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let feed = if self.mine {
            let session = role.session().await?;
            load_own_events(role, &session).await?
        } else {
            let mut feed = role.home_feed();
            let backend = role.feed_backend(feed.scope(), None);
            feed.load(&backend).await?;
            feed
        };

        if feed.events().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        print_events(role, feed.events(), self.output_format, self.expand);
        Ok(())
    }
}

async fn load_own_events(role: &Role, session: &AuthSession) -> Result<EventFeed, Box<dyn Error>> {
    let mut feed = role.profile_feed(session);
    feed.load(&role.backend_for(session)).await?;
    Ok(feed)
}

/// Fills the composer from flags, or from the editor when no flag is given, and
/// publishes it.
async fn publish(
    role: &mut Role,
    session: &AuthSession,
    mut composer: Composer,
    fields: EventFields,
    output_format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let event = if fields.is_empty() {
        match tui::compose_event(role, session, composer).await? {
            Some(event) => event,
            None => {
                tracing::info!("user cancelled the editor");
                return Ok(());
            }
        }
    } else {
        fields.apply(&mut composer, role.now())?;
        let backend: StrapiClient = role.backend_for(session);
        composer.submit(&backend, session, role.now()).await?
    };

    print_events(role, &[event], output_format, true);
    Ok(())
}

fn print_events(role: &Role, events: &[Event], output_format: OutputFormat, expand: bool) {
    let tz = role.now().time_zone().clone();
    let mut columns = vec![
        EventColumn::id(),
        EventColumn::time_span(tz),
        EventColumn::title(),
        EventColumn::location(),
    ];
    if expand {
        columns.push(EventColumn::description());
        columns.push(EventColumn::image());
    }

    let rows: Vec<_> = events
        .iter()
        .map(|event| EventRow {
            event,
            image_url: event.image.as_ref().map(|m| role.media_url(m)),
        })
        .collect();
    let formatter = EventFormatter::new(columns).with_output_format(output_format);
    print!("{}", formatter.format(&rows));
}
