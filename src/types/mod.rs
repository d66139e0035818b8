mod id;
mod inspection;
mod point;
mod site;
mod status;
mod summary;

pub use id::{InspectionId, SiteId};
pub use inspection::{Inspection, NewInspection};
pub use point::Point;
pub use site::{NewSite, Site};
pub use status::{InspectionStatus, StatusParseError};
pub use summary::SiteSummary;
