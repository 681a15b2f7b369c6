//! Object listing, metadata lookup and assay download handlers.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::workspace::WorkspaceClient;

pub async fn list(all_versions: bool) -> Result<()> {
    let workspace = WorkspaceClient::new();
    if all_versions {
        for object in workspace.list_objects_all_versions().await {
            println!(
                "{} ({}) - {} versions, latest {}",
                object.name.green(),
                object.object_type,
                object.total_versions,
                object.latest_version
            );
            for version in object.versions {
                println!(
                    "  {}  {}  {}  {}",
                    version.version_id, version.created_date, version.created_by, version.description
                );
            }
        }
    } else {
        for object in workspace.list_objects().await {
            println!("{} ({})", object.name.green(), object.object_type);
            println!("  created {} by {}", object.created_date, object.created_by);
            println!("  {}", object.description);
            if let Some(assays) = object.assays {
                println!("  assays: {}", assays.join(", "));
            }
            if let Some(attributes) = object.attributes {
                println!("  attributes: {}", attributes.join(", "));
            }
        }
    }
    Ok(())
}

pub async fn describe(names: &[String]) -> Result<()> {
    let workspace = WorkspaceClient::new();
    for value in workspace.objects_info(names).await {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

pub async fn versions(names: &[String]) -> Result<()> {
    let workspace = WorkspaceClient::new();
    for value in workspace.object_versions_info(names).await {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

pub async fn download(object_name: &str, attribute: Option<&str>) -> Result<()> {
    let workspace = WorkspaceClient::new();
    let values = workspace.download_table_data(object_name, attribute).await;
    if values.is_empty() {
        bail!("no data for object '{object_name}'");
    }
    println!("{} values:", values.len());
    for chunk in values.chunks(10) {
        let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(", "));
    }
    Ok(())
}
