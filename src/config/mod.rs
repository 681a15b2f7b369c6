use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .evoqrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.parse::<f64>().ok())
    }

    pub fn chart_output_path(&self) -> PathBuf {
        PathBuf::from(self.get("CHART_OUTPUT_PATH").unwrap())
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or EVOQ_*/GOOGLE_* for forward-compat
    const KEYS: &[&str] = &[
        "PROJECT_ID",
        "LOCATION",
        "GOOGLE_API_KEY",
        "GOOGLE_ACCESS_TOKEN",
        "CODE_MODEL",
        "TEXT_MODEL",
        "REQUEST_TIMEOUT",
        "RAG_RESOURCE_ID",
        "RAG_TOP_K",
        "RAG_DISTANCE_THRESHOLD",
        "CHART_OUTPUT_PATH",
        "PRETTIFY_MARKDOWN",
        "DEFAULT_COLOR",
    ];

    KEYS.contains(&k) || k.starts_with("EVOQ_") || k.starts_with("GOOGLE_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("evoq").join(".evoqrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Remote service identity
    m.insert("PROJECT_ID".into(), "your-project-id".into());
    m.insert("LOCATION".into(), "us-central1".into());
    m.insert("CODE_MODEL".into(), "gemini-2.0-flash-001".into());
    m.insert("TEXT_MODEL".into(), "gemini-2.5-flash".into());

    // Numbers
    m.insert("REQUEST_TIMEOUT".into(), "60".into());
    m.insert("RAG_TOP_K".into(), "10".into());
    m.insert("RAG_DISTANCE_THRESHOLD".into(), "0.5".into());

    // Strings
    m.insert("RAG_RESOURCE_ID".into(), "workspace__all".into());
    m.insert("CHART_OUTPUT_PATH".into(), "generated_charts".into());
    m.insert("DEFAULT_COLOR".into(), "magenta".into());

    // Bools as strings
    m.insert("PRETTIFY_MARKDOWN".into(), "true".into());

    m
}
