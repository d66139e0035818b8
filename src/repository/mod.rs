//! Typed access to the `sites` and `inspections` collections.
//!
//! Every mutation is a read-modify-write of a whole collection. Mutations of
//! one collection are serialized through a per-collection lock held by the
//! repository, so share a single [`Repository`] (e.g. behind an `Arc`) among
//! all writers of the same store. Reads take no lock and observe the last
//! committed value.

mod error;
mod summary;

pub use error::{Entity, RepositoryError};
pub use summary::summarize;

use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::storage::CollectionStore;
use crate::types::{Inspection, InspectionId, NewInspection, NewSite, Site, SiteId, SiteSummary};

pub const SITES: &str = "sites";
pub const INSPECTIONS: &str = "inspections";

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// What `create_inspection` does when the referenced site does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Fail with `NotFound`.
    #[default]
    Enforce,
    /// Store the orphan anyway.
    Permissive,
}

pub struct Repository {
    store: Arc<dyn CollectionStore + Send + Sync>,
    policy: ReferencePolicy,
    // Lock order: sites before inspections.
    sites_lock: Mutex<()>,
    inspections_lock: Mutex<()>,
}

fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    // The guarded value is `()`, a panicking holder cannot leave it torn.
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Repository {
    pub fn new(store: Arc<dyn CollectionStore + Send + Sync>) -> Self {
        Self {
            store,
            policy: ReferencePolicy::default(),
            sites_lock: Mutex::new(()),
            inspections_lock: Mutex::new(()),
        }
    }

    pub fn with_reference_policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn load<T: DeserializeOwned>(&self, collection: &'static str) -> Result<Vec<T>> {
        self.store
            .read_all(collection)?
            .into_iter()
            .map(|record| {
                serde_json::from_value(record)
                    .map_err(|source| RepositoryError::Malformed { collection, source })
            })
            .collect()
    }

    fn save<T: Serialize>(&self, collection: &'static str, items: &[T]) -> Result<()> {
        let records = items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| RepositoryError::Malformed { collection, source })?;
        self.store.write_all(collection, &records)?;
        Ok(())
    }

    // Sites

    pub fn create_site(&self, fields: &NewSite) -> Result<SiteId> {
        let _sites = acquire(&self.sites_lock);
        let mut sites: Vec<Site> = self.load(SITES)?;

        let mut id = SiteId::generate();
        while sites.iter().any(|s| s.id == id) {
            id = SiteId::generate();
        }
        sites.push(Site::new(id.clone(), fields.clone()));
        self.save(SITES, &sites)?;

        log::debug!("created site {} ({} sites stored)", id, sites.len());
        Ok(id)
    }

    /// All sites in insertion order.
    pub fn list_sites(&self) -> Result<Vec<Site>> {
        self.load(SITES)
    }

    pub fn get_site(&self, id: &SiteId) -> Result<Site> {
        self.load::<Site>(SITES)?
            .into_iter()
            .find(|site| &site.id == id)
            .ok_or_else(|| RepositoryError::not_found(Entity::Site, id))
    }

    /// Replaces the stored site with the same id, keeping its position.
    pub fn update_site(&self, site: &Site) -> Result<()> {
        let _sites = acquire(&self.sites_lock);
        let mut sites: Vec<Site> = self.load(SITES)?;

        let slot = sites
            .iter_mut()
            .find(|stored| stored.id == site.id)
            .ok_or_else(|| RepositoryError::not_found(Entity::Site, &site.id))?;
        *slot = site.clone();
        self.save(SITES, &sites)?;

        log::debug!("updated site {}", site.id);
        Ok(())
    }

    /// Removes the site and every inspection that references it.
    ///
    /// Inspections are written first: if the second write fails the site
    /// survives without children instead of children surviving a deleted site.
    pub fn delete_site(&self, id: &SiteId) -> Result<()> {
        let _sites = acquire(&self.sites_lock);
        let _inspections = acquire(&self.inspections_lock);

        let sites: Vec<Site> = self.load(SITES)?;
        if !sites.iter().any(|site| &site.id == id) {
            log::warn!("site {} not found, nothing deleted", id);
            return Err(RepositoryError::not_found(Entity::Site, id));
        }

        let inspections: Vec<Inspection> = self.load(INSPECTIONS)?;
        let before = inspections.len();
        let kept: Vec<Inspection> = inspections
            .into_iter()
            .filter(|inspection| !inspection.belongs_to(id))
            .collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.save(INSPECTIONS, &kept)?;
        }

        let remaining: Vec<Site> = sites.into_iter().filter(|site| &site.id != id).collect();
        self.save(SITES, &remaining)?;

        log::info!(
            "deleted site {} and {} inspection(s); {} sites remain",
            id,
            removed,
            remaining.len()
        );
        Ok(())
    }

    // Inspections

    pub fn create_inspection(
        &self,
        site_id: &SiteId,
        fields: &NewInspection,
    ) -> Result<InspectionId> {
        let _sites = acquire(&self.sites_lock);
        let _inspections = acquire(&self.inspections_lock);

        if self.policy == ReferencePolicy::Enforce {
            let sites: Vec<Site> = self.load(SITES)?;
            if !sites.iter().any(|site| &site.id == site_id) {
                return Err(RepositoryError::not_found(Entity::Site, site_id));
            }
        }

        let mut inspections: Vec<Inspection> = self.load(INSPECTIONS)?;
        let mut id = InspectionId::generate();
        while inspections.iter().any(|i| i.id == id) {
            id = InspectionId::generate();
        }
        inspections.push(Inspection::new(id.clone(), site_id.clone(), fields.clone()));
        self.save(INSPECTIONS, &inspections)?;

        log::debug!(
            "created inspection {} for site {} ({} inspections stored)",
            id,
            site_id,
            inspections.len()
        );
        Ok(id)
    }

    /// All inspections, or only those of `site_id`, in insertion order.
    pub fn list_inspections(&self, site_id: Option<&SiteId>) -> Result<Vec<Inspection>> {
        let inspections: Vec<Inspection> = self.load(INSPECTIONS)?;
        Ok(match site_id {
            Some(site_id) => inspections
                .into_iter()
                .filter(|inspection| inspection.belongs_to(site_id))
                .collect(),
            None => inspections,
        })
    }

    /// Removes an inspection by id. `site_id` is informational only.
    pub fn delete_inspection(&self, site_id: &SiteId, inspection_id: &InspectionId) -> Result<()> {
        let _inspections = acquire(&self.inspections_lock);
        let mut inspections: Vec<Inspection> = self.load(INSPECTIONS)?;

        let index = inspections
            .iter()
            .position(|inspection| &inspection.id == inspection_id)
            .ok_or_else(|| RepositoryError::not_found(Entity::Inspection, inspection_id))?;
        let removed = inspections.remove(index);
        if !removed.belongs_to(site_id) {
            log::warn!(
                "inspection {} belongs to site {}, not {}",
                inspection_id,
                removed.site_id,
                site_id
            );
        }
        self.save(INSPECTIONS, &inspections)?;

        log::debug!("deleted inspection {} of site {}", inspection_id, site_id);
        Ok(())
    }

    // Aggregation

    /// One row per site with its inspection count and whether any inspection
    /// is on schedule or delayed. Recomputed on every call.
    pub fn site_summaries(&self) -> Result<Vec<SiteSummary>> {
        let sites: Vec<Site> = self.load(SITES)?;
        let inspections: Vec<Inspection> = self.load(INSPECTIONS)?;
        Ok(summarize(sites, &inspections))
    }
}
