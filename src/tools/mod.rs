//! Built-in agent tools: declarations handed to the model plus a JSON
//! dispatcher over the workspace store, chart pipeline and RAG engine.

use anyhow::{anyhow, bail, Result};
use log::info;
use serde_json::{json, Value};

use crate::chart::ChartService;
use crate::config::Config;
use crate::llm::FunctionDeclaration;
use crate::rag::RagEngine;
use crate::workspace::WorkspaceClient;

pub struct Registry {
    workspace: WorkspaceClient,
    chart: ChartService,
    rag: RagEngine,
}

impl Registry {
    pub async fn from_config(cfg: &Config) -> Self {
        Self {
            workspace: WorkspaceClient::new(),
            chart: ChartService::from_config(cfg),
            rag: RagEngine::connect(cfg).await,
        }
    }

    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        vec![
            FunctionDeclaration {
                name: "get_list_of_objects".into(),
                description: "List the objects in the workspace (latest version of each), with creation dates and the users who created them. Use for questions like 'what objects are in the workspace?' or 'how many downhole collections do I have?'.".into(),
                parameters: json!({ "type": "object", "properties": {} }),
            },
            FunctionDeclaration {
                name: "get_list_of_objects_all_versions".into(),
                description: "List the workspace objects including the full version history of each: number of versions, creation dates, and who created them.".into(),
                parameters: json!({ "type": "object", "properties": {} }),
            },
            FunctionDeclaration {
                name: "get_objects_info".into(),
                description: "Get detailed information for one or more objects: available assays, bounding box, dimensions (length, width, depth), collections, holes and intervals. Use whenever the user asks to describe or compare objects.".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "object_names": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Object names to look up",
                        }
                    },
                    "required": ["object_names"],
                }),
            },
            FunctionDeclaration {
                name: "get_object_versions_info".into(),
                description: "Get detailed version information for one or more objects: version history, per-version changes, file sizes, data quality metrics and validation status.".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "object_names": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Object names to look up",
                        }
                    },
                    "required": ["object_names"],
                }),
            },
            FunctionDeclaration {
                name: "download_assay_data".into(),
                description: "Download the table data of a collections attribute of an object, e.g. the gold assay of thalanga_local_drillholes_dt. Returns the attribute's values.".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "object_name": { "type": "string", "description": "Name of the object" },
                        "collections_attribute": {
                            "type": "string",
                            "description": "Requested collections attribute, e.g. copper, gold, silver",
                        }
                    },
                    "required": ["object_name"],
                }),
            },
            FunctionDeclaration {
                name: "generate_chart".into(),
                description: "Generate a chart for workspace data from a natural-language request, e.g. 'plot the histogram of gold', 'create a scatter plot of gold vs copper', 'cap the plot at a maximum of 5'.".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "user_prompt": { "type": "string", "description": "The chart request" }
                    },
                    "required": ["user_prompt"],
                }),
            },
            FunctionDeclaration {
                name: "get_rag_info".into(),
                description: "Look up geological context for an object or term, e.g. the definition of downhole-collection, pointset or assay interval. Fallback when no other tool fits the question.".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "query": { "type": "string", "description": "The question needing domain context" }
                    },
                    "required": ["query"],
                }),
            },
        ]
    }

    pub async fn execute(&self, name: &str, args: &Value) -> Result<Value> {
        info!("executing tool {name}");
        match name {
            "get_list_of_objects" => Ok(serde_json::to_value(self.workspace.list_objects().await)?),
            "get_list_of_objects_all_versions" => {
                Ok(serde_json::to_value(self.workspace.list_objects_all_versions().await)?)
            }
            "get_objects_info" => {
                let names = string_list(args, "object_names")?;
                Ok(Value::Array(self.workspace.objects_info(&names).await))
            }
            "get_object_versions_info" => {
                let names = string_list(args, "object_names")?;
                Ok(Value::Array(self.workspace.object_versions_info(&names).await))
            }
            "download_assay_data" => {
                let object_name = string_arg(args, "object_name")?;
                let attribute = args.get("collections_attribute").and_then(Value::as_str);
                let values = self.workspace.download_table_data(&object_name, attribute).await;
                Ok(json!(values))
            }
            "generate_chart" => {
                let prompt = string_arg(args, "user_prompt")?;
                Ok(serde_json::to_value(self.chart.generate(&prompt).await)?)
            }
            "get_rag_info" => {
                let query = string_arg(args, "query")?;
                Ok(Value::String(self.rag.answer(&query).await?))
            }
            _ => bail!("tool not found: {name}"),
        }
    }
}

fn string_arg(args: &Value, key: &str) -> Result<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("missing string argument '{key}'"))
}

fn string_list(args: &Value, key: &str) -> Result<Vec<String>> {
    let list = args
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("missing list argument '{key}'"))?;
    Ok(list.iter().filter_map(Value::as_str).map(str::to_string).collect())
}
