use crate::dto::{CostBar, StatsView, TypeSlice, TYPE_PALETTE};
use crate::repositories::FleetRepository;
use crate::services::{cost_by_month, saturating_cost_sum, type_distribution, GroupOrder};
use crate::utils::format::format_money;

pub struct StatsController<'a> {
    repository: &'a FleetRepository,
    order: GroupOrder,
}

impl<'a> StatsController<'a> {
    pub fn new(repository: &'a FleetRepository, order: GroupOrder) -> Self {
        Self { repository, order }
    }

    pub fn view(&self) -> StatsView {
        let interventions = self.repository.interventions();

        let cost_bars: Vec<CostBar> = cost_by_month(interventions, self.order)
            .into_iter()
            .map(|group| CostBar {
                month: group.month.to_string(),
                cost: group.cost,
                cost_label: format_money(group.cost),
            })
            .collect();

        let type_slices = type_distribution(interventions, self.order)
            .into_iter()
            .enumerate()
            .map(|(index, group)| TypeSlice {
                intervention_type: group.intervention_type,
                count: group.count,
                color: TYPE_PALETTE[index % TYPE_PALETTE.len()],
            })
            .collect();

        let total_cost = saturating_cost_sum(cost_bars.iter().map(|bar| bar.cost));

        StatsView {
            title: "Analytics".to_string(),
            subtitle: "Financial and operational insights.".to_string(),
            cost_bars,
            type_slices,
            total_cost_label: format_money(total_cost),
            total_interventions: interventions.len(),
        }
    }
}
