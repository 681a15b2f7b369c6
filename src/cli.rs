use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "evoq", about = "Geoscience workspace AI agent", version)]
#[command(group(ArgGroup::new("mode").args(["list_objects", "all_versions", "describe", "versions", "download", "chart", "ask", "exec"]).multiple(false)))]
#[command(group(ArgGroup::new("md_switch").args(["md", "no_md"]).multiple(false)))]
pub struct Cli {
    /// The question, chart request or code to run, depending on mode.
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Large language model to use for answers.
    #[arg(long)]
    pub model: Option<String>,

    /// Randomness of generated output.
    #[arg(long, default_value_t = 0.0, value_parser = clap::value_parser!(f32))]
    pub temperature: f32,

    /// Limits highest probable tokens (words).
    #[arg(long = "top-p", default_value_t = 1.0, value_parser = clap::value_parser!(f32))]
    pub top_p: f32,

    /// Prettify Markdown output.
    #[arg(long)]
    pub md: bool,
    /// Disable Markdown prettifying.
    #[arg(long = "no-md")]
    pub no_md: bool,

    /// List workspace objects (latest versions only).
    #[arg(short = 'l', long = "list-objects")]
    pub list_objects: bool,

    /// List workspace objects with their full version history.
    #[arg(long = "all-versions")]
    pub all_versions: bool,

    /// Describe one or more objects (assays, bounding box, dimensions).
    /// Can be used multiple times: --describe obj1 --describe obj2
    #[arg(long = "describe", value_name = "NAME", action = clap::ArgAction::Append)]
    pub describe: Vec<String>,

    /// Show version details for one or more objects.
    #[arg(long = "versions", value_name = "NAME", action = clap::ArgAction::Append)]
    pub versions: Vec<String>,

    /// Download assay table data for an object.
    #[arg(long = "download", value_name = "OBJECT")]
    pub download: Option<String>,

    /// Collections attribute for --download (e.g. gold, cu, silver).
    #[arg(long = "attribute", value_name = "ATTR")]
    pub attribute: Option<String>,

    /// Generate a chart from a natural-language request.
    #[arg(short = 'c', long)]
    pub chart: bool,

    /// Ask a domain question against the workspace corpus.
    #[arg(short = 'a', long)]
    pub ask: bool,

    /// Execute code in the remote sandbox and print the result.
    #[arg(short = 'e', long)]
    pub exec: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
