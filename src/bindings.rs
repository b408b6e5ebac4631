// src/bindings.rs
use crate::analysis::{
    build_proportion_view, build_scatter_view, filter_by_payload, filter_by_site,
    FilterState, ProportionView, ScatterView,
};
use crate::data::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SiteSelector,
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputId {
    ProportionChart,
    ScatterChart,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    Proportion(ProportionView),
    Scatter(ScatterView),
}

type Compute = fn(&Dataset, &FilterState) -> ChartContent;

// One output chart, the controls that invalidate it, and the pure
// recomputation that rebuilds it from (dataset, filters).
pub struct Binding {
    pub output: OutputId,
    pub triggers: &'static [ControlId],
    compute: Compute,
}

// The site filter is the only input here: the payload range deliberately
// does not reach the proportion chart.
fn compute_proportion(dataset: &Dataset, filters: &FilterState) -> ChartContent {
    let subset = filter_by_site(dataset.records(), &filters.site);
    ChartContent::Proportion(build_proportion_view(&subset, &filters.site))
}

fn compute_scatter(dataset: &Dataset, filters: &FilterState) -> ChartContent {
    let (low, high) = filters.payload_range;
    let by_payload = filter_by_payload(dataset.records(), low, high);
    let subset = filter_by_site(&by_payload, &filters.site);
    ChartContent::Scatter(build_scatter_view(&subset, &filters.site))
}

// Registry mapping control changes to chart recomputations. Rebuilt from
// scratch whenever the dataset is replaced.
pub struct Dispatcher {
    bindings: Vec<Binding>,
}

impl Dispatcher {
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                Binding {
                    output: OutputId::ProportionChart,
                    triggers: &[ControlId::SiteSelector],
                    compute: compute_proportion,
                },
                Binding {
                    output: OutputId::ScatterChart,
                    triggers: &[ControlId::SiteSelector, ControlId::PayloadSlider],
                    compute: compute_scatter,
                },
            ],
        }
    }

    pub fn triggered_by(&self, control: ControlId) -> Vec<OutputId> {
        self.bindings.iter()
            .filter(|binding| binding.triggers.contains(&control))
            .map(|binding| binding.output)
            .collect()
    }

    // Synchronously recompute every chart bound to the changed control and
    // replace its displayed content.
    pub fn dispatch(
        &self,
        changed: ControlId,
        dataset: &Dataset,
        filters: &FilterState,
        display: &mut Display,
    ) {
        for binding in self.bindings.iter().filter(|b| b.triggers.contains(&changed)) {
            display.replace((binding.compute)(dataset, filters));
        }
    }

    // Startup and dataset-reload path: recompute everything.
    pub fn refresh_all(&self, dataset: &Dataset, filters: &FilterState, display: &mut Display) {
        for binding in &self.bindings {
            display.replace((binding.compute)(dataset, filters));
        }
    }
}

// The rendering surface's current content, replaced per dispatch.
#[derive(Debug, Clone, Default)]
pub struct Display {
    pub proportion: ProportionView,
    pub scatter: ScatterView,
}

impl Display {
    pub fn replace(&mut self, content: ChartContent) {
        match content {
            ChartContent::Proportion(view) => self.proportion = view,
            ChartContent::Scatter(view) => self.scatter = view,
        }
    }
}
