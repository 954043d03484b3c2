// File: crates/demo/src/charts.rs
// Summary: Example charts used to eyeball the economist theme.

use broadsheet_core::{Channel, Chart, Data, FieldType};
use serde_json::json;

/// Simple scatter plot: three points, pinned x domain, title + subtitle.
pub fn scatter_demo() -> Chart {
    let data = Data::from_values(json!([
        {"x": 1, "y": 2},
        {"x": 2, "y": 3},
        {"x": 3, "y": 5},
    ]))
    .expect("inline demo data is well-formed");

    Chart::new(data)
        .mark_point()
        .encode_x(
            Channel::new("x", FieldType::Quantitative)
                .with_title("axis label cnd regular")
                .with_domain(0.0, 3.1),
        )
        .encode_y(Channel::new("y", FieldType::Quantitative))
        .with_title("Simple Scatter Plot")
        .with_subtitle("Subtitle in cnd regular font")
}

/// Bar chart over three categories.
pub fn bar_demo() -> Chart {
    let data = Data::from_values(json!([
        {"category": "A", "value": 10},
        {"category": "B", "value": 15},
        {"category": "C", "value": 7},
    ]))
    .expect("inline demo data is well-formed");

    Chart::new(data)
        .mark_bar()
        .encode_x(Channel::new("category", FieldType::Nominal).with_title("Category"))
        .encode_y(Channel::new("value", FieldType::Quantitative).with_title("Value"))
        .with_title("Bar Chart with Economist Theme")
}
