use serde::{Deserialize, Serialize};

use super::{Point, SiteId};

/// Caller-supplied fields of a site, before an id is assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSite {
    pub name: String,
    pub responsible: String,
    pub start_date: String,
    pub expected_end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A stored construction site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub responsible: String,
    pub start_date: String,
    pub expected_end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Site {
    pub fn new(id: SiteId, fields: NewSite) -> Self {
        let NewSite {
            name,
            responsible,
            start_date,
            expected_end_date,
            description,
            location,
            photo,
        } = fields;
        Self {
            id,
            name,
            responsible,
            start_date,
            expected_end_date,
            description,
            location,
            photo,
        }
    }
}
