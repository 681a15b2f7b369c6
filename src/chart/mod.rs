//! Natural-language chart generation: prompt parsing, frame assembly,
//! code generation and secure execution through the remote sandbox.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::execution::CodeExecutor;
use crate::llm::{GeminiClient, GenerationConfig};
use crate::workspace::{resolve_alias, WorkspaceClient};

/// Words in a chart request implying a multi-attribute comparison.
const COMPARISON_WORDS: &[&str] = &["vs", "versus", "against", "correlation", "scatter"];

/// In-memory stand-in for the tabular frame handed to the generated code.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    pub sample_ids: Vec<String>,
    pub columns: Vec<(String, Vec<f64>)>,
}

impl DataFrame {
    pub fn len(&self) -> usize {
        self.columns.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 || self.columns.is_empty()
    }

    /// All column names, sample ids included, in frame order.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.columns.iter().map(|(n, _)| n.clone()).collect();
        if !self.sample_ids.is_empty() {
            names.push("sample_id".to_string());
        }
        names
    }

    /// Numeric-only copy with every row containing a non-finite or
    /// negative value dropped. Sample ids do not survive cleaning.
    pub fn clean(&self) -> DataFrame {
        let keep: Vec<usize> = (0..self.len())
            .filter(|&row| {
                self.columns
                    .iter()
                    .all(|(_, values)| values[row].is_finite() && values[row] >= 0.0)
            })
            .collect();

        DataFrame {
            sample_ids: Vec::new(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| {
                    (name.clone(), keep.iter().map(|&row| values[row]).collect())
                })
                .collect(),
        }
    }

    /// JSON records in row order, ready to rebuild the frame remotely.
    pub fn to_json_records(&self) -> String {
        let records: Vec<Value> = (0..self.len())
            .map(|row| {
                let mut record = serde_json::Map::new();
                for (name, values) in &self.columns {
                    record.insert(name.clone(), json!(values[row]));
                }
                if let Some(id) = self.sample_ids.get(row) {
                    record.insert("sample_id".to_string(), json!(id));
                }
                Value::Object(record)
            })
            .collect();
        Value::Array(records).to_string()
    }
}

/// Picks the object and attribute a chart request talks about. Falls back
/// to the first known object/attribute when the prompt names neither.
pub fn extract_object_and_attribute(prompt: &str, workspace: &WorkspaceClient) -> (String, String) {
    let prompt_lower = prompt.to_lowercase();
    let known = workspace.known_table_objects();

    let object_name = known
        .iter()
        .find(|name| prompt_lower.contains(&name.to_lowercase()))
        .copied()
        .unwrap_or(known[0]);

    let mut attribute_name = None;
    if let Some(table) = workspace.table(object_name) {
        for name in table.attribute_names() {
            if prompt_lower.contains(name) {
                attribute_name = Some(name.to_string());
                break;
            }
        }
        if attribute_name.is_none() {
            for alias in ["au", "ag", "cu", "pb", "zn", "fe"] {
                if prompt_lower.contains(alias) {
                    if let Some(real) = resolve_alias(alias) {
                        if table.get(real).is_some() {
                            attribute_name = Some(real.to_string());
                            break;
                        }
                    }
                }
            }
        }
        if attribute_name.is_none() {
            attribute_name = table.first().map(|a| a.name.to_string());
        }
    }

    (object_name.to_string(), attribute_name.unwrap_or_default())
}

/// Assembles the frame for a chart request: every attribute for comparison
/// prompts, the single requested attribute otherwise.
pub fn frame_from_table(
    workspace: &WorkspaceClient,
    object_name: &str,
    attribute_name: &str,
    prompt: &str,
) -> DataFrame {
    let Some(table) = workspace.table(object_name) else {
        return DataFrame::default();
    };

    let prompt_lower = prompt.to_lowercase();
    let multi = COMPARISON_WORDS.iter().any(|w| prompt_lower.contains(w));

    let columns: Vec<(String, Vec<f64>)> = if multi {
        table
            .attributes
            .iter()
            .map(|series| (series.name.to_string(), series.values.to_vec()))
            .collect()
    } else {
        let series = table
            .attributes
            .iter()
            .find(|s| s.name == attribute_name)
            .or_else(|| table.first());
        match series {
            Some(series) => vec![(series.name.to_string(), series.values.to_vec())],
            None => Vec::new(),
        }
    };

    let rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
    DataFrame {
        sample_ids: (1..=rows).map(|i| format!("SAMPLE_{i:03}")).collect(),
        columns,
    }
}

/// Prompt sent to the model to produce the plotting code that the sandbox
/// will run against the reconstructed frame.
pub fn build_codegen_prompt(frame: &DataFrame, user_prompt: &str, attribute_name: &str) -> String {
    let columns = frame.column_names();
    format!(
        "You are a helpful Python assistant that generates Plotly figures for geological data analysis.\n\n\
User prompt: '{user_prompt}'\n\n\
The available DataFrame columns are: {columns:?}\n\
Primary attribute focus: '{attribute_name}'\n\n\
GEOLOGICAL DATA CONTEXT:\n\
- This is geological assay data with attributes like gold, silver, copper, zinc, etc.\n\
- Values represent concentrations, grades, or measurements\n\
- Consider log scales for highly variable data like precious metal concentrations\n\n\
DATA PROVIDED:\n\
The DataFrame has {rows} rows and {cols} columns.\n\n\
TASK:\n\
Generate complete Python code that:\n\
1. Creates a Plotly figure based on the user request\n\
2. Saves the figure as both PNG and HTML files under 'generated_charts/'\n\
3. Prints the file paths of saved charts as 'Chart saved as PNG: <path>' and 'Chart saved as HTML: <path>'\n\
4. Prints a summary of the chart created\n\n\
IMPORTANT GUIDELINES:\n\
1. The DataFrame is already loaded as 'df' in the environment\n\
2. All required libraries (pandas as pd, plotly.express as px, plotly.graph_objects as go, numpy as np) are available\n\
3. Only use columns from the list above; do not invent or assume other columns\n\
4. When binning any column using `pd.cut(...)`, convert resulting intervals to strings using `.astype(str)`\n\
5. Use `clip` for modifying values (not filtering) and retain all data in the plot\n\
6. Add meaningful titles and axis labels that include units when relevant\n\
7. For histograms, use appropriate bin counts (10-30 bins typically work well)\n\
8. Create the 'generated_charts' directory if it doesn't exist and use a timestamp in filenames\n\n\
Generate the complete code without any markdown formatting - just the Python code.",
        rows = frame.len(),
        cols = columns.len(),
    )
}

/// Strips markdown code fences from model output, preferring a block
/// tagged `python`.
pub fn strip_code_fences(code: &str) -> String {
    if !code.contains("```") {
        return code.trim().to_string();
    }
    let blocks: Vec<&str> = code.split("```").collect();
    for (i, block) in blocks.iter().enumerate() {
        let trimmed = block.trim();
        if let Some(rest) = trimmed.strip_prefix("python") {
            return rest.trim().to_string();
        }
        if i > 0 && !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    code.trim().to_string()
}

/// Prepends a preamble that rebuilds the frame inside the sandbox, then
/// appends the generated code.
pub fn wrap_with_dataframe(code: &str, frame: &DataFrame) -> String {
    format!(
        "import pandas as pd\n\
import plotly.express as px\n\
import plotly.graph_objects as go\n\
import numpy as np\n\n\
# Reconstruct the dataframe\n\
df_data = {records}\n\
df = pd.DataFrame(df_data)\n\n\
{code}\n",
        records = frame.to_json_records(),
    )
}

/// Picks the saved chart paths out of the sandbox's printed output.
pub fn parse_saved_files(output: &str) -> (Option<String>, Option<String>) {
    let mut png = None;
    let mut html = None;
    for line in output.lines() {
        if let Some(rest) = line.split("Chart saved as PNG:").nth(1) {
            png = Some(rest.trim().to_string());
        } else if let Some(rest) = line.split("Chart saved as HTML:").nth(1) {
            html = Some(rest.trim().to_string());
        }
    }
    (png, html)
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOutcome {
    pub success: bool,
    pub message: String,
    pub object_name: String,
    pub attribute_name: String,
    pub user_request: String,
    pub columns_used: Vec<String>,
    pub data_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct ChartService {
    workspace: WorkspaceClient,
    llm: Option<GeminiClient>,
    executor: CodeExecutor,
    model: String,
    output_dir: PathBuf,
}

impl ChartService {
    pub fn from_config(cfg: &Config) -> Self {
        let llm = match GeminiClient::from_config(cfg) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("chart code generation unavailable: {e}");
                None
            }
        };
        Self {
            workspace: WorkspaceClient::new(),
            llm,
            executor: CodeExecutor::from_config(cfg),
            model: cfg.get("TEXT_MODEL").unwrap_or_else(|| "gemini-2.5-flash".into()),
            output_dir: cfg.chart_output_path(),
        }
    }

    pub async fn generate(&self, user_prompt: &str) -> ChartOutcome {
        info!("generating chart for prompt: {user_prompt}");
        let (object_name, attribute_name) = extract_object_and_attribute(user_prompt, &self.workspace);
        let frame = frame_from_table(&self.workspace, &object_name, &attribute_name, user_prompt);
        info!(
            "assembled frame for {object_name}.{attribute_name}: {} rows, columns {:?}",
            frame.len(),
            frame.column_names()
        );

        match self.run_pipeline(user_prompt, &attribute_name, &frame).await {
            Ok((png_path, html_path, summary_path)) => ChartOutcome {
                success: true,
                message: format!("Chart generated successfully for {object_name}.{attribute_name}!"),
                object_name,
                attribute_name,
                user_request: user_prompt.to_string(),
                columns_used: frame.column_names(),
                data_points: frame.len(),
                png_path,
                html_path,
                summary_path,
                error: None,
            },
            Err(e) => {
                error!("chart generation failed: {e}");
                ChartOutcome {
                    success: false,
                    message: format!("Error generating chart: {e}"),
                    object_name,
                    attribute_name,
                    user_request: user_prompt.to_string(),
                    columns_used: Vec::new(),
                    data_points: 0,
                    png_path: None,
                    html_path: None,
                    summary_path: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn run_pipeline(
        &self,
        user_prompt: &str,
        attribute_name: &str,
        frame: &DataFrame,
    ) -> Result<(Option<String>, Option<String>, Option<String>)> {
        let llm = self
            .llm
            .as_ref()
            .context("chart code generation requires remote service credentials")?;

        let cleaned = frame.clean();
        if cleaned.is_empty() {
            bail!("No valid data available after cleaning");
        }

        let codegen_prompt = build_codegen_prompt(&cleaned, user_prompt, attribute_name);
        let generated = llm
            .generate_text(&self.model, &codegen_prompt, GenerationConfig::text_defaults())
            .await?;
        let code = strip_code_fences(&generated);
        info!("generated chart code:\n{code}");

        let wrapped = wrap_with_dataframe(&code, &cleaned);
        let result = self.executor.execute(&wrapped).await;
        if !result.success {
            bail!("Secure code execution failed: {}", result.error);
        }

        let (png_path, html_path) = parse_saved_files(&result.output);
        let summary_path = match self.write_summary(user_prompt, &result.output) {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => {
                warn!("could not write chart summary: {e}");
                None
            }
        };
        Ok((png_path, html_path, summary_path))
    }

    /// Writes the sandbox output next to the charts, named after the
    /// request, for later inspection.
    fn write_summary(&self, user_prompt: &str, output: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let safe: String = user_prompt
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
            .collect();
        let safe: String = safe.trim_end().replace(' ', "_").chars().take(50).collect();
        let path = self.output_dir.join(format!("chart_{timestamp}_{safe}.txt"));
        fs::write(&path, output)?;
        Ok(path)
    }
}
