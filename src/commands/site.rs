use anyhow::{Context, Result};
use serde_json::json;

use super::{point, print_json, CommandRunner};
use crate::cli::SiteCmd;
use crate::repository::Repository;
use crate::types::{NewSite, SiteId};

impl CommandRunner for SiteCmd {
    fn run(&self, repo: &Repository) -> Result<()> {
        match self {
            SiteCmd::Add {
                name,
                responsible,
                start_date,
                expected_end_date,
                description,
                lat,
                lon,
                photo,
            } => {
                let fields = NewSite {
                    name: name.clone(),
                    responsible: responsible.clone(),
                    start_date: start_date.clone(),
                    expected_end_date: expected_end_date.clone(),
                    description: description.clone(),
                    location: point(*lat, *lon),
                    photo: photo.clone(),
                };
                let id = repo.create_site(&fields).context("creating site")?;
                log::info!("✅ Site {} created", id);
                print_json(&json!({ "id": id }))
            }
            SiteCmd::List => print_json(&repo.list_sites()?),
            SiteCmd::Show { id } => {
                let site = repo.get_site(&SiteId::from(id.as_str()))?;
                print_json(&site)
            }
            SiteCmd::Summary => print_json(&repo.site_summaries()?),
            SiteCmd::Update {
                id,
                name,
                responsible,
                start_date,
                expected_end_date,
                description,
                lat,
                lon,
                clear_location,
                photo,
                clear_photo,
            } => {
                let mut site = repo.get_site(&SiteId::from(id.as_str()))?;
                if let Some(name) = name {
                    site.name = name.clone();
                }
                if let Some(responsible) = responsible {
                    site.responsible = responsible.clone();
                }
                if let Some(start_date) = start_date {
                    site.start_date = start_date.clone();
                }
                if let Some(expected_end_date) = expected_end_date {
                    site.expected_end_date = expected_end_date.clone();
                }
                if let Some(description) = description {
                    site.description = description.clone();
                }
                if *clear_location {
                    site.location = None;
                } else if let Some(location) = point(*lat, *lon) {
                    site.location = Some(location);
                }
                if *clear_photo {
                    site.photo = None;
                } else if let Some(photo) = photo {
                    site.photo = Some(photo.clone());
                }
                repo.update_site(&site)
                    .with_context(|| format!("updating site {id}"))?;
                log::info!("✅ Site {} updated", id);
                print_json(&site)
            }
            SiteCmd::Delete { id } => {
                repo.delete_site(&SiteId::from(id.as_str()))
                    .with_context(|| format!("deleting site {id}"))?;
                log::info!("🗑️ Site {} deleted", id);
                print_json(&json!({ "deleted": id }))
            }
        }
    }
}
