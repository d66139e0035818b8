use serde::{Deserialize, Serialize};

use super::{InspectionId, InspectionStatus, Point, SiteId};

/// Caller-supplied fields of an inspection, before ids are attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewInspection {
    pub date: String,
    pub observations: String,
    pub status: InspectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Inspection {
    pub id: InspectionId,
    pub site_id: SiteId,
    pub date: String,
    pub observations: String,
    pub status: InspectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Inspection {
    pub fn new(id: InspectionId, site_id: SiteId, fields: NewInspection) -> Self {
        let NewInspection {
            date,
            observations,
            status,
            location,
            photo,
        } = fields;
        Self {
            id,
            site_id,
            date,
            observations,
            status,
            location,
            photo,
        }
    }

    pub fn belongs_to(&self, site_id: &SiteId) -> bool {
        &self.site_id == site_id
    }
}
