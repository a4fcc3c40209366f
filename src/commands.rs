//! Command implementations behind the `portfolio-cms` binary.
//!
//! Each command opens one [`ResourceManager`] for the section's record type
//! and drives it the way an admin screen would: load on open, then create,
//! edit or delete through the manager's operations.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::DeletePolicy;
use crate::http::Transport;
use crate::interact::Confirm;
use crate::media::{self, FixedSelection, MediaError};
use crate::resource::{
    About, Contact, Education, Experience, ManagerError, Project, Record, RemoveOutcome,
    ResourceManager, Shape, Skill,
};
use crate::sections::Section;

/// What to do with a section.
#[derive(Debug, Clone)]
pub enum Action {
    List,
    /// Show one entry; without an id, the singleton or the whole list.
    Show { id: Option<String> },
    Create { form: FormInput },
    Update { id: String, form: FormInput },
    Delete { id: String },
}

/// Form payload assembled from the command line.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    /// Raw JSON object text.
    pub data: Option<String>,
    /// Single-image fields to fill from files.
    pub images: Vec<FieldFile>,
    /// Gallery fields to append files to.
    pub gallery: Vec<FieldFile>,
}

/// `FIELD=PATH` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFile {
    pub field: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected FIELD=PATH, got '{0}'")]
pub struct InvalidFieldFile(pub String);

impl FromStr for FieldFile {
    type Err = InvalidFieldFile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((field, path)) if !field.trim().is_empty() && !path.is_empty() => Ok(Self {
                field: field.trim().to_string(),
                path: PathBuf::from(path),
            }),
            _ => Err(InvalidFieldFile(s.to_string())),
        }
    }
}

/// Collaborators shared by every command.
#[derive(Clone)]
pub struct Context {
    pub transport: Arc<dyn Transport>,
    pub confirm: Arc<dyn Confirm>,
    pub delete_policy: DeletePolicy,
}

#[derive(Debug, Error)]
pub enum CommandError {
    /// The manager recorded an error (load or delete).
    #[error("{0}")]
    Failed(String),

    #[error("{message}: {source}")]
    SaveFailed {
        message: String,
        #[source]
        source: ManagerError,
    },

    #[error("No {section} entry with id '{id}'")]
    NotFound { section: Section, id: String },

    #[error("Invalid --data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Prints the section catalogue.
pub fn print_sections(out: &mut dyn Write) -> Result<(), CommandError> {
    for section in Section::ALL {
        let kind = if section.is_singleton() { "single" } else { "list" };
        writeln!(
            out,
            "{:<12}{:<12}{:<20}{:<12}{}",
            section.name(),
            section.label(),
            section.path(),
            section.endpoint(),
            kind
        )?;
    }
    Ok(())
}

/// Runs `action` against `section` with the section's typed record.
pub async fn run(
    section: Section,
    action: Action,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match section {
        Section::About => execute::<About>(section, action, ctx, out).await,
        Section::Contact => execute::<Contact>(section, action, ctx, out).await,
        Section::Projects => execute::<Project>(section, action, ctx, out).await,
        Section::Experience => execute::<Experience>(section, action, ctx, out).await,
        Section::Education => execute::<Education>(section, action, ctx, out).await,
        Section::Skills => execute::<Skill>(section, action, ctx, out).await,
    }
}

async fn execute<T: Record>(
    section: Section,
    action: Action,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    let shape = if section.is_singleton() {
        Shape::Single
    } else {
        Shape::List
    };
    let mut manager =
        ResourceManager::<T>::new(section.endpoint(), ctx.transport.clone(), ctx.confirm.clone())
            .with_shape(shape)
            .with_delete_policy(ctx.delete_policy);
    manager.load().await;

    if let Some(message) = manager.error() {
        return Err(CommandError::Failed(message.to_string()));
    }

    match action {
        Action::List => {
            if manager.items().is_empty() {
                writeln!(out, "(no entries)")?;
            }
            for item in manager.items() {
                writeln!(out, "{}\t{}", item.id().unwrap_or("-"), item.summary())?;
            }
        }
        Action::Show { id: Some(id) } => {
            let item = manager
                .state()
                .find(&id)
                .ok_or_else(|| CommandError::NotFound { section, id: id.clone() })?;
            write_json(out, item)?;
        }
        Action::Show { id: None } if section.is_singleton() => match manager.first() {
            Some(item) => write_json(out, item)?,
            None => writeln!(out, "(no entries)")?,
        },
        Action::Show { id: None } => write_json(out, manager.items())?,
        Action::Create { form } => {
            manager.open_create();
            let payload = build_payload(&form, None)?;
            save(&mut manager, &payload).await?;
            writeln!(out, "Created {} entry", section)?;
        }
        Action::Update { id, form } => {
            let item = manager
                .state()
                .find(&id)
                .cloned()
                .ok_or_else(|| CommandError::NotFound { section, id: id.clone() })?;
            let existing = serde_json::to_value(&item).ok();
            manager.open_edit(item);
            let payload = build_payload(&form, existing.as_ref())?;
            save(&mut manager, &payload).await?;
            writeln!(out, "Updated {} entry {}", section, id)?;
        }
        Action::Delete { id } => match manager.remove(Some(id.as_str())).await {
            RemoveOutcome::Removed => writeln!(out, "Deleted {} entry {}", section, id)?,
            RemoveOutcome::Declined => writeln!(out, "Delete cancelled")?,
            RemoveOutcome::Skipped => writeln!(out, "Nothing to delete")?,
            RemoveOutcome::Failed => {
                let message = manager.error().unwrap_or("Delete failed").to_string();
                return Err(CommandError::Failed(message));
            }
        },
    }
    Ok(())
}

async fn save<T: Record>(
    manager: &mut ResourceManager<T>,
    payload: &Map<String, Value>,
) -> Result<(), CommandError> {
    if let Err(source) = manager.save(payload).await {
        let message = manager
            .error()
            .unwrap_or("Save failed")
            .to_string();
        return Err(CommandError::SaveFailed { message, source });
    }
    // The reload after a successful save can still fail.
    match manager.error() {
        Some(message) => Err(CommandError::Failed(message.to_string())),
        None => Ok(()),
    }
}

fn write_json<V: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &V) -> Result<(), CommandError> {
    let text = serde_json::to_string_pretty(value).map_err(CommandError::Encode)?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Builds the JSON object sent on save.
///
/// Gallery uploads on an update extend the record's current gallery unless
/// `--data` already supplies that field.
pub fn build_payload(
    form: &FormInput,
    existing: Option<&Value>,
) -> Result<Map<String, Value>, CommandError> {
    let mut payload = match form.data.as_deref() {
        None => Map::new(),
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(CommandError::InvalidData("expected a JSON object".to_string())),
            Err(e) => return Err(CommandError::InvalidData(e.to_string())),
        },
    };

    for image in &form.images {
        let url = media::read_data_url(&image.path)?;
        media::set_image(&mut payload, &image.field, url);
    }

    let mut fields: Vec<&str> = Vec::new();
    for entry in &form.gallery {
        if !fields.contains(&entry.field.as_str()) {
            fields.push(&entry.field);
        }
    }
    for field in fields {
        if !payload.contains_key(field) {
            if let Some(current) = existing.and_then(|v| v.get(field)) {
                payload.insert(field.to_string(), current.clone());
            }
        }
        let selection = FixedSelection(
            form.gallery
                .iter()
                .filter(|entry| entry.field == field)
                .map(|entry| entry.path.clone())
                .collect(),
        );
        let urls = media::collect_data_urls(&selection)?;
        media::append_gallery(&mut payload, field, urls);
    }

    Ok(payload)
}
