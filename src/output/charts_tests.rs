use tempfile::TempDir;

use super::*;
use crate::classifier::Category;

mod year_counts_tests {
    use super::*;

    #[test]
    fn groups_duplicate_years() {
        let counts = YearCounts::from_years(&["2020", "2020", "2021"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("2020"), 2);
        assert_eq!(counts.get("2021"), 1);
        assert_eq!(counts.get("1999"), 0);
    }

    #[test]
    fn orders_years_as_strings() {
        let counts = YearCounts::from_years(&["2", "10"]);
        let order: Vec<&str> = counts.iter().map(|(year, _)| year).collect();
        assert_eq!(order, vec!["10", "2"]);
    }

    #[test]
    fn empty_input_has_no_years() {
        let years: [&str; 0] = [];
        assert!(YearCounts::from_years(&years).is_empty());
    }
}

mod year_chart_tests {
    use super::*;

    #[test]
    fn one_bar_per_distinct_year() {
        let svg = year_chart_svg(&["2020", "2020", "2021"], &YearChartConfig::default());
        assert!(svg.contains("<title>2020: 2</title>"));
        assert!(svg.contains("<title>2021: 1</title>"));
        assert_eq!(svg.matches("fill-opacity=\"0.7\"").count(), 2);
    }

    #[test]
    fn bars_follow_lexicographic_order() {
        let svg = year_chart_svg(&["2", "10"], &YearChartConfig::default());
        let ten = svg.find("<title>10: 1</title>").unwrap();
        let two = svg.find("<title>2: 1</title>").unwrap();
        assert!(ten < two);
    }

    #[test]
    fn labels_axes_and_rotates_ticks() {
        let svg = year_chart_svg(&["2021"], &YearChartConfig::default());
        assert!(svg.contains(">Year</text>"));
        assert!(svg.contains(">Number of Papers</text>"));
        assert!(svg.contains("rotate(-45 "));
        assert!(svg.contains("stroke-dasharray=\"3 2\""));
    }

    #[test]
    fn uses_configured_size_and_color() {
        let config = YearChartConfig {
            width: 800.0,
            height: 600.0,
            bar_color: "teal".to_string(),
        };
        let svg = year_chart_svg(&["2021"], &config);
        assert!(svg.contains(r#"width="800" height="600""#));
        assert!(svg.contains(r#"fill="teal""#));
    }

    #[test]
    fn empty_years_still_draw_axes() {
        let years: [&str; 0] = [];
        let svg = year_chart_svg(&years, &YearChartConfig::default());
        assert!(svg.contains("No data available"));
        assert!(svg.contains(">Year</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

mod category_chart_tests {
    use super::*;

    fn counts() -> CategoryCounts {
        let mut counts = CategoryCounts::new();
        counts.increment(Category::Journal);
        counts.increment(Category::Journal);
        counts.increment(Category::Conference);
        counts.increment(Category::Arxiv);
        counts
    }

    #[test]
    fn bars_in_stored_order_with_positional_colors() {
        let svg = category_chart_svg(&counts(), &CategoryChartConfig::default());
        let conference = svg.find("<title>Conference: 1</title>").unwrap();
        let journal = svg.find("<title>Journal: 2</title>").unwrap();
        let arxiv = svg.find("<title>Arxiv: 1</title>").unwrap();
        assert!(conference < journal && journal < arxiv);

        let blue = svg.find(r##"fill="#0000ff" fill-opacity"##).unwrap();
        let green = svg.find(r##"fill="#008000" fill-opacity"##).unwrap();
        let red = svg.find(r##"fill="#ff0000" fill-opacity"##).unwrap();
        assert!(blue < green && green < red);
    }

    #[test]
    fn labels_category_axis() {
        let svg = category_chart_svg(&counts(), &CategoryChartConfig::default());
        assert!(svg.contains(">Category</text>"));
        assert!(svg.contains(">Number of Papers</text>"));
    }

    #[test]
    fn fallback_mapping_renders_lowercase_labels() {
        let svg = category_chart_svg(&CategoryCounts::fallback(), &CategoryChartConfig::default());
        assert!(svg.contains("<title>conference: 0</title>"));
        assert!(svg.contains("<title>arxiv: 0</title>"));
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn writes_both_files() {
        let dir = TempDir::new().unwrap();
        let year_path = dir.path().join(YEAR_CHART_FILE);
        let category_path = dir.path().join(CATEGORY_CHART_FILE);

        render_year_histogram(&["2020"], &year_path, &YearChartConfig::default()).unwrap();
        render_category_distribution(
            &CategoryCounts::new(),
            &category_path,
            &CategoryChartConfig::default(),
        )
        .unwrap();

        assert!(std::fs::read_to_string(&year_path).unwrap().contains("<svg"));
        assert!(std::fs::read_to_string(&category_path).unwrap().contains("<svg"));
    }

    #[test]
    fn rerender_overwrites_with_identical_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(YEAR_CHART_FILE);
        let years = ["2019", "2020", "2020"];

        render_year_histogram(&years, &path, &YearChartConfig::default()).unwrap();
        let first = std::fs::read(&path).unwrap();
        render_year_histogram(&years, &path, &YearChartConfig::default()).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(YEAR_CHART_FILE);
        let err = render_year_histogram(&["2020"], &path, &YearChartConfig::default()).unwrap_err();
        assert!(matches!(err, BibStatsError::FileWrite { .. }));
    }
}
