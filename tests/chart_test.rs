use anyhow::Result;

use evoq::chart::{
    build_codegen_prompt, extract_object_and_attribute, frame_from_table, parse_saved_files,
    strip_code_fences, wrap_with_dataframe, DataFrame,
};
use evoq::workspace::WorkspaceClient;

#[test]
fn extraction_finds_the_named_object_and_attribute() {
    let workspace = WorkspaceClient::new();
    let (object, attribute) =
        extract_object_and_attribute("plot the gold assay of thalanga_local_drillholes_dt", &workspace);

    assert_eq!(object, "thalanga_local_drillholes_dt");
    assert_eq!(attribute, "gold");
}

#[test]
fn extraction_defaults_when_nothing_matches() {
    let workspace = WorkspaceClient::new();
    let (object, attribute) = extract_object_and_attribute("plot the distribution", &workspace);

    assert_eq!(object, "thalanga_local_drillholes_dt");
    assert_eq!(attribute, "gold");
}

#[test]
fn extraction_resolves_element_shorthand() {
    let workspace = WorkspaceClient::new();
    let (object, attribute) =
        extract_object_and_attribute("histogram of cu in thalanga_local_drillholes_dt", &workspace);

    assert_eq!(object, "thalanga_local_drillholes_dt");
    assert_eq!(attribute, "copper");
}

#[test]
fn single_attribute_frame_keeps_one_column_plus_sample_ids() {
    let workspace = WorkspaceClient::new();
    let frame = frame_from_table(
        &workspace,
        "thalanga_local_drillholes_dt",
        "gold",
        "plot the histogram of gold",
    );

    assert_eq!(frame.len(), 50);
    assert_eq!(frame.column_names(), vec!["gold".to_string(), "sample_id".to_string()]);
    assert_eq!(frame.sample_ids[0], "SAMPLE_001");
}

#[test]
fn comparison_prompts_build_a_multi_attribute_frame() {
    let workspace = WorkspaceClient::new();
    let frame = frame_from_table(
        &workspace,
        "thalanga_local_drillholes_dt",
        "gold",
        "scatter plot of gold vs copper",
    );

    let names = frame.column_names();
    assert!(names.contains(&"gold".to_string()));
    assert!(names.contains(&"copper".to_string()));
    assert!(names.contains(&"zinc".to_string()));
}

#[test]
fn cleaning_drops_rows_with_bad_values() {
    let frame = DataFrame {
        sample_ids: vec!["SAMPLE_001".into(), "SAMPLE_002".into(), "SAMPLE_003".into(), "SAMPLE_004".into()],
        columns: vec![
            ("gold".into(), vec![0.5, f64::NAN, 1.2, 2.0]),
            ("copper".into(), vec![1.0, 2.0, -0.1, f64::INFINITY]),
        ],
    };

    let cleaned = frame.clean();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned.columns[0].1, vec![0.5]);
    assert_eq!(cleaned.columns[1].1, vec![1.0]);
    assert!(cleaned.sample_ids.is_empty());
}

#[test]
fn json_records_hold_rows_in_order() {
    let frame = DataFrame {
        sample_ids: vec!["SAMPLE_001".into(), "SAMPLE_002".into()],
        columns: vec![("gold".into(), vec![0.5, 1.5])],
    };

    let records: serde_json::Value = serde_json::from_str(&frame.to_json_records()).unwrap();
    assert_eq!(records[0]["gold"], 0.5);
    assert_eq!(records[1]["gold"], 1.5);
    assert_eq!(records[1]["sample_id"], "SAMPLE_002");
}

#[test]
fn fence_stripping_handles_tagged_and_bare_blocks() {
    assert_eq!(strip_code_fences("print('x')"), "print('x')");
    assert_eq!(
        strip_code_fences("Here you go:\n```python\nprint('x')\n```\nEnjoy"),
        "print('x')"
    );
    assert_eq!(strip_code_fences("```\nprint('y')\n```"), "print('y')");
}

#[test]
fn wrapped_code_rebuilds_the_frame_before_user_code() {
    let frame = DataFrame {
        sample_ids: vec!["SAMPLE_001".into()],
        columns: vec![("gold".into(), vec![0.5])],
    };
    let wrapped = wrap_with_dataframe("fig = px.histogram(df, x='gold')", &frame);

    let preamble = wrapped.find("df = pd.DataFrame(df_data)").unwrap();
    let user_code = wrapped.find("px.histogram").unwrap();
    assert!(preamble < user_code);
    assert!(wrapped.contains("import plotly.express as px"));
}

#[test]
fn saved_paths_are_parsed_from_sandbox_output() {
    let output = "Created DataFrame with 50 rows\n\
                  Chart saved as PNG: generated_charts/chart_202403.png\n\
                  Chart saved as HTML: generated_charts/chart_202403.html\n\
                  Chart type: histogram";

    let (png, html) = parse_saved_files(output);
    assert_eq!(png.as_deref(), Some("generated_charts/chart_202403.png"));
    assert_eq!(html.as_deref(), Some("generated_charts/chart_202403.html"));

    let (none_png, none_html) = parse_saved_files("no charts here");
    assert!(none_png.is_none());
    assert!(none_html.is_none());
}

#[test]
fn codegen_prompt_names_columns_and_request() -> Result<()> {
    let frame = DataFrame {
        sample_ids: Vec::new(),
        columns: vec![("gold".into(), vec![0.5, 1.5])],
    };
    let prompt = build_codegen_prompt(&frame, "histogram of gold with 15 bins", "gold");

    assert!(prompt.contains("histogram of gold with 15 bins"));
    assert!(prompt.contains("\"gold\""));
    assert!(prompt.contains("2 rows"));
    assert!(prompt.contains("without any markdown formatting"));
    Ok(())
}
