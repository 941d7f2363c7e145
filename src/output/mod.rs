mod charts;
mod summary;
pub mod svg;

pub use charts::{
    CATEGORY_CHART_FILE, YEAR_CHART_FILE, YearCounts, category_chart_svg,
    render_category_distribution, render_year_histogram, year_chart_svg,
};
pub use summary::{JsonSummary, SummaryFormatter, TextSummary};
