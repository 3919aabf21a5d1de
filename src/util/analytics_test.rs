use super::*;

#[test]
fn format_event_without_data_is_name_only() {
    assert_eq!(format_event("page_view", &[]), "page_view");
}

#[test]
fn format_event_quotes_values_in_order() {
    assert_eq!(
        format_event("button_click", &[("button_text", "View Work"), ("button_location", "home")]),
        r#"button_click button_text="View Work" button_location="home""#
    );
}
