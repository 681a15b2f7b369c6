use anyhow::Result;

use evoq::workspace::{resolve_alias, WorkspaceClient};

#[tokio::test]
async fn latest_listing_has_every_object_once() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let objects = workspace.list_objects().await;

    assert_eq!(objects.len(), 6);
    assert_eq!(objects[0].name, "thalanga_local_drillholes_dt");
    assert!(objects.iter().all(|o| o.version == "latest"));

    let collections = objects.iter().filter(|o| o.object_type == "downhole-collection").count();
    assert_eq!(collections, 3);
    Ok(())
}

#[tokio::test]
async fn all_versions_listing_carries_version_history() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let objects = workspace.list_objects_all_versions().await;

    let enhanced = objects
        .iter()
        .find(|o| o.name == "thalanga_local_drillholes_e_sm")
        .expect("enhanced drillholes present");
    assert_eq!(enhanced.total_versions, 3);
    assert_eq!(enhanced.latest_version, "v3");
    assert_eq!(enhanced.versions.len(), 3);
    Ok(())
}

#[tokio::test]
async fn objects_info_mixes_hits_and_error_records() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let names = vec!["thalanga_local_drillholes_dt".to_string(), "no_such_object".to_string()];
    let infos = workspace.objects_info(&names).await;

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0]["name"], "thalanga_local_drillholes_dt");
    assert_eq!(infos[0]["assays"].as_array().unwrap().len(), 4);
    assert!(infos[0]["bounding_box"]["min_x"].is_number());

    assert!(infos[1]["error"].as_str().unwrap().contains("no_such_object"));
    assert_eq!(infos[1]["available_objects"].as_array().unwrap().len(), 6);
    Ok(())
}

#[tokio::test]
async fn attribute_descriptors_serialize_with_their_kind() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let names = vec!["surface_geology_pointset".to_string()];
    let infos = workspace.objects_info(&names).await;

    let attributes = infos[0]["attributes"].as_array().unwrap();
    assert_eq!(attributes[0]["type"], "categorical");
    assert_eq!(attributes[0]["dominant_value"], "Thalanga Formation");
    Ok(())
}

#[tokio::test]
async fn version_info_includes_quality_metrics() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let names = vec!["thalanga_local_drillholes_dt".to_string()];
    let infos = workspace.object_versions_info(&names).await;

    assert_eq!(infos[0]["total_versions"], 2);
    let v2 = &infos[0]["versions"][1];
    assert_eq!(v2["version_id"], "v2");
    assert_eq!(v2["validation_status"], "passed");
    assert!(v2["data_quality"]["completeness"].as_f64().unwrap() > 90.0);
    Ok(())
}

#[test]
fn object_ids_resolve_for_known_names_only() {
    let workspace = WorkspaceClient::new();

    let reference = workspace.resolve_object_id("exploration_drillholes_main").unwrap();
    assert_eq!(reference.object_id, "obj_id_exploration_drillholes_main");
    assert_eq!(reference.object_type, "downhole-collection");

    let missing = workspace.resolve_object_id("missing_object");
    assert!(missing.unwrap_err().contains("Unable to find object"));
}

#[tokio::test]
async fn download_returns_the_requested_attribute() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let values = workspace
        .download_table_data("thalanga_local_drillholes_dt", Some("gold"))
        .await;

    assert_eq!(values.len(), 50);
    assert_eq!(values[0], 0.125);
    Ok(())
}

#[tokio::test]
async fn download_resolves_element_aliases() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let gold = workspace
        .download_table_data("thalanga_local_drillholes_dt", Some("gold"))
        .await;
    let aliased = workspace
        .download_table_data("thalanga_local_drillholes_dt", Some("Au"))
        .await;

    assert_eq!(gold, aliased);
    assert_eq!(resolve_alias("zn"), Some("zinc"));
    assert_eq!(resolve_alias("gold"), None);
    Ok(())
}

#[tokio::test]
async fn download_falls_back_to_the_first_attribute() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let gold = workspace
        .download_table_data("thalanga_local_drillholes_dt", Some("gold"))
        .await;
    let fallback = workspace
        .download_table_data("thalanga_local_drillholes_dt", Some("platinum"))
        .await;
    let unspecified = workspace.download_table_data("thalanga_local_drillholes_dt", None).await;

    assert_eq!(gold, fallback);
    assert_eq!(gold, unspecified);
    Ok(())
}

#[tokio::test]
async fn download_of_unknown_object_is_empty() -> Result<()> {
    let workspace = WorkspaceClient::new();
    let values = workspace.download_table_data("missing_object", Some("gold")).await;
    assert!(values.is_empty());
    Ok(())
}
