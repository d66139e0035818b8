use serde::{Deserialize, Serialize};

use super::Site;

/// One row of the site listing: the site plus figures derived from its
/// inspections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub site: Site,
    pub inspection_count: usize,
    pub has_active_inspection: bool,
}
