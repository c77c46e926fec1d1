use serde_json::Value;

/// Column order of the output table.
pub const COLUMNS: [&str; 30] = [
    "Year",
    "name",
    "rank",
    "order",
    "Revenues ($M)",
    "Revenue Percent Change",
    "Profits ($M)",
    "Profits Percent Change",
    "Assets ($M)",
    "Headquarters City",
    "Headquarters State",
    "Change in Rank",
    "Gained in Rank",
    "Dropped in Rank",
    "Years on Global 500 List",
    "Newcomer to the Global 500",
    "Profitable",
    "Female CEO",
    "Growth in Jobs",
    "Sector",
    "Fastest Growing Companies",
    "Change the World",
    "World's Most Admired Companies",
    "Fortune 500",
    "Best Companies",
    "Non-U.S. Companies",
    "Employees",
    "Industry",
    "Country / Territory",
    "slug",
];

/// One company in one year's ranking. Values are kept as they came from the
/// page; a field the page didn't carry is `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub year: u16,
    pub name: Value,
    pub rank: Value,
    pub order: Value,
    pub revenues: Value,
    pub revenue_percent_change: Value,
    pub profits: Value,
    pub profits_percent_change: Value,
    pub assets: Value,
    pub headquarters_city: Value,
    pub headquarters_state: Value,
    pub change_in_rank: Value,
    pub gained_in_rank: Value,
    pub dropped_in_rank: Value,
    pub years_on_list: Value,
    pub newcomer: Value,
    pub profitable: Value,
    pub female_ceo: Value,
    pub growth_in_jobs: Value,
    pub sector: Value,
    pub fastest_growing: Value,
    pub change_the_world: Value,
    pub most_admired: Value,
    pub fortune_500: Value,
    pub best_companies: Value,
    pub non_us: Value,
    pub employees: Value,
    pub industry: Value,
    pub country: Value,
    pub slug: Value,
}

impl CompanyRecord {
    /// Cells in `COLUMNS` order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(COLUMNS.len());
        row.push(self.year.to_string());
        row.extend(
            [
                &self.name,
                &self.rank,
                &self.order,
                &self.revenues,
                &self.revenue_percent_change,
                &self.profits,
                &self.profits_percent_change,
                &self.assets,
                &self.headquarters_city,
                &self.headquarters_state,
                &self.change_in_rank,
                &self.gained_in_rank,
                &self.dropped_in_rank,
                &self.years_on_list,
                &self.newcomer,
                &self.profitable,
                &self.female_ceo,
                &self.growth_in_jobs,
                &self.sector,
                &self.fastest_growing,
                &self.change_the_world,
                &self.most_admired,
                &self.fortune_500,
                &self.best_companies,
                &self.non_us,
                &self.employees,
                &self.industry,
                &self.country,
                &self.slug,
            ]
            .into_iter()
            .map(render_cell),
        );
        row
    }
}

pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}
