use anyhow::{Context, Result};
use serde_json::json;

use super::{point, print_json, CommandRunner};
use crate::cli::InspectionCmd;
use crate::repository::Repository;
use crate::types::{InspectionId, NewInspection, SiteId};

impl CommandRunner for InspectionCmd {
    fn run(&self, repo: &Repository) -> Result<()> {
        match self {
            InspectionCmd::Add {
                site_id,
                date,
                status,
                observations,
                lat,
                lon,
                photo,
            } => {
                let fields = NewInspection {
                    date: date.clone(),
                    observations: observations.clone(),
                    status: *status,
                    location: point(*lat, *lon),
                    photo: photo.clone(),
                };
                let id = repo
                    .create_inspection(&SiteId::from(site_id.as_str()), &fields)
                    .with_context(|| format!("recording inspection for site {site_id}"))?;
                log::info!("✅ Inspection {} recorded for site {}", id, site_id);
                print_json(&json!({ "id": id }))
            }
            InspectionCmd::List { site_id } => {
                let site_id = site_id.as_deref().map(SiteId::from);
                print_json(&repo.list_inspections(site_id.as_ref())?)
            }
            InspectionCmd::Delete {
                site_id,
                inspection_id,
            } => {
                repo.delete_inspection(
                    &SiteId::from(site_id.as_str()),
                    &InspectionId::from(inspection_id.as_str()),
                )
                .with_context(|| format!("deleting inspection {inspection_id}"))?;
                log::info!("🗑️ Inspection {} deleted", inspection_id);
                print_json(&json!({ "deleted": inspection_id }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::{InspectionStatus, NewSite};
    use std::sync::Arc;

    #[test]
    fn add_and_delete_through_commands() {
        let repo = Repository::new(Arc::new(MemoryStorage::new()));
        let site = repo
            .create_site(&NewSite {
                name: "Bridge".into(),
                responsible: "Alice".into(),
                start_date: String::new(),
                expected_end_date: String::new(),
                description: String::new(),
                location: None,
                photo: None,
            })
            .unwrap();

        InspectionCmd::Add {
            site_id: site.to_string(),
            date: "2024-03-01".into(),
            status: InspectionStatus::Delayed,
            observations: "late".into(),
            lat: None,
            lon: None,
            photo: None,
        }
        .run(&repo)
        .unwrap();

        let inspections = repo.list_inspections(Some(&site)).unwrap();
        assert_eq!(inspections.len(), 1);
        assert_eq!(inspections[0].status, InspectionStatus::Delayed);

        InspectionCmd::Delete {
            site_id: site.to_string(),
            inspection_id: inspections[0].id.to_string(),
        }
        .run(&repo)
        .unwrap();
        assert!(repo.list_inspections(None).unwrap().is_empty());
    }

    #[test]
    fn add_for_unknown_site_fails() {
        let repo = Repository::new(Arc::new(MemoryStorage::new()));
        let err = InspectionCmd::Add {
            site_id: "ghost".into(),
            date: "2024-03-01".into(),
            status: InspectionStatus::Stopped,
            observations: String::new(),
            lat: None,
            lon: None,
            photo: None,
        }
        .run(&repo)
        .unwrap_err();
        assert!(format!("{err:#}").contains("site not found: ghost"));
    }
}
