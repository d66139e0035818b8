use crate::types::{Inspection, Site, SiteSummary};

/// Joins every site with its inspections. Sites keep their storage order.
pub fn summarize(sites: Vec<Site>, inspections: &[Inspection]) -> Vec<SiteSummary> {
    sites
        .into_iter()
        .map(|site| {
            let (inspection_count, has_active_inspection) = inspections
                .iter()
                .filter(|inspection| inspection.belongs_to(&site.id))
                .fold((0, false), |(count, active), inspection| {
                    (count + 1, active || inspection.status.is_active())
                });
            SiteSummary {
                site,
                inspection_count,
                has_active_inspection,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InspectionId, InspectionStatus, NewInspection, NewSite, SiteId};

    fn site(id: &str) -> Site {
        Site::new(
            SiteId::from(id),
            NewSite {
                name: id.to_uppercase(),
                responsible: "Alice".into(),
                start_date: "2024-01-01".into(),
                expected_end_date: "2024-12-31".into(),
                description: String::new(),
                location: None,
                photo: None,
            },
        )
    }

    fn inspection(id: &str, site_id: &str, status: InspectionStatus) -> Inspection {
        Inspection::new(
            InspectionId::from(id),
            SiteId::from(site_id),
            NewInspection {
                date: "2024-02-01".into(),
                observations: String::new(),
                status,
                location: None,
                photo: None,
            },
        )
    }

    #[test]
    fn counts_and_active_flag_per_site() {
        let sites = vec![site("a"), site("b"), site("c")];
        let inspections = vec![
            inspection("1", "a", InspectionStatus::Delayed),
            inspection("2", "a", InspectionStatus::Stopped),
            inspection("3", "b", InspectionStatus::Stopped),
            inspection("4", "orphan", InspectionStatus::OnSchedule),
        ];

        let rows = summarize(sites, &inspections);
        let flat: Vec<_> = rows
            .iter()
            .map(|r| (r.site.id.as_str(), r.inspection_count, r.has_active_inspection))
            .collect();
        assert_eq!(flat, vec![("a", 2, true), ("b", 1, false), ("c", 0, false)]);
    }

    #[test]
    fn no_sites_no_rows() {
        let inspections = vec![inspection("1", "a", InspectionStatus::OnSchedule)];
        assert!(summarize(Vec::new(), &inspections).is_empty());
    }
}
