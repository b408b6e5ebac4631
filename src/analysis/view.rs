// src/analysis/view.rs
use crate::analysis::filter::SiteSelection;
use crate::data::{LaunchRecord, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
}

// Labeled counts for the proportion chart. Groups with zero qualifying
// records are absent rather than present with a zero count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProportionView {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl ProportionView {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

// Direct projection of the filtered subset for point-plotting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterView {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

pub fn build_proportion_view(subset: &[LaunchRecord], selection: &SiteSelection) -> ProportionView {
    match selection {
        SiteSelection::AllSites => ProportionView {
            title: "Total Success Launches by Site".to_string(),
            slices: count_by(
                subset.iter().filter(|record| record.outcome.is_success()),
                |record| record.site.clone(),
            ),
        },
        SiteSelection::Site(site) => ProportionView {
            title: format!("Total Launch Outcomes for site: {}", site),
            slices: count_by(subset.iter(), |record| record.outcome.label().to_string()),
        },
    }
}

pub fn build_scatter_view(subset: &[LaunchRecord], selection: &SiteSelection) -> ScatterView {
    ScatterView {
        title: format!("Payload vs. Success for {}", selection.label()),
        points: subset.iter()
            .map(|record| ScatterPoint {
                payload_kg: record.payload_mass_kg,
                outcome: record.outcome,
                booster_category: record.booster_category.clone(),
            })
            .collect(),
    }
}

// Counts in first-observed order so a given subset always renders the same.
fn count_by<'a, I, F>(records: I, key: F) -> Vec<Slice>
where
    I: Iterator<Item = &'a LaunchRecord>,
    F: Fn(&LaunchRecord) -> String,
{
    let mut slices: Vec<Slice> = Vec::new();
    for record in records {
        let label = key(record);
        match slices.iter_mut().find(|slice| slice.label == label) {
            Some(slice) => slice.count += 1,
            None => slices.push(Slice { label, count: 1 }),
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::{filter_by_payload, filter_by_site};
    use crate::data::Outcome;

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteA", 1500.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("SiteB", 3000.0, Outcome::Success, "v1.1"),
        ]
    }

    #[test]
    fn all_sites_counts_successes_by_site() {
        let records = sample_records();
        let subset = filter_by_site(&records, &SiteSelection::AllSites);
        let view = build_proportion_view(&subset, &SiteSelection::AllSites);

        assert_eq!(view.title, "Total Success Launches by Site");
        assert_eq!(view.slices, vec![
            Slice { label: "SiteA".to_string(), count: 1 },
            Slice { label: "SiteB".to_string(), count: 1 },
        ]);
    }

    #[test]
    fn single_site_counts_by_outcome() {
        let records = sample_records();
        let selection = SiteSelection::Site("SiteA".to_string());
        let subset = filter_by_site(&records, &selection);
        let view = build_proportion_view(&subset, &selection);

        assert_eq!(view.title, "Total Launch Outcomes for site: SiteA");
        assert_eq!(view.slices, vec![
            Slice { label: "Success".to_string(), count: 1 },
            Slice { label: "Failure".to_string(), count: 1 },
        ]);
    }

    #[test]
    fn sites_without_successes_are_absent() {
        let mut records = sample_records();
        records.push(LaunchRecord::new("SiteC", 800.0, Outcome::Failure, "v1.0"));

        let view = build_proportion_view(&records, &SiteSelection::AllSites);
        assert!(view.slices.iter().all(|slice| slice.label != "SiteC"));
    }

    #[test]
    fn proportion_counts_sum_to_qualifying_records() {
        let records = sample_records();

        let all_view = build_proportion_view(&records, &SiteSelection::AllSites);
        let successes = records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(all_view.total(), successes);

        let selection = SiteSelection::Site("SiteA".to_string());
        let subset = filter_by_site(&records, &selection);
        let site_view = build_proportion_view(&subset, &selection);
        assert_eq!(site_view.total(), subset.len());
    }

    #[test]
    fn scatter_view_projects_each_record() {
        let records = sample_records();
        let subset = filter_by_payload(&records, 1000.0, 4000.0);
        let view = build_scatter_view(&subset, &SiteSelection::AllSites);

        assert_eq!(view.title, "Payload vs. Success for All Sites");
        assert_eq!(view.points.len(), 2);
        assert_eq!(view.points[0].payload_kg, 1500.0);
        assert_eq!(view.points[0].outcome, Outcome::Failure);
        assert_eq!(view.points[1].payload_kg, 3000.0);
        assert_eq!(view.points[1].booster_category, "v1.1");
    }

    #[test]
    fn scatter_title_names_the_selected_site() {
        let selection = SiteSelection::Site("SiteB".to_string());
        let view = build_scatter_view(&[], &selection);
        assert_eq!(view.title, "Payload vs. Success for SiteB");
    }

    #[test]
    fn empty_subset_yields_empty_views() {
        let records = sample_records();
        let subset = filter_by_payload(&records, 5000.0, 6000.0);

        let scatter = build_scatter_view(&subset, &SiteSelection::AllSites);
        assert!(scatter.points.is_empty());

        let proportion = build_proportion_view(&subset, &SiteSelection::AllSites);
        assert!(proportion.slices.is_empty());
    }
}
