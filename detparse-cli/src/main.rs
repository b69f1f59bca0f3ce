use clap::Parser;
use detparse::{
    parse_detections, NetworkDims, ParseConfig, PixelDetection, TensorLayout, TensorView,
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_IOU_THRESHOLD, DEFAULT_NUM_CLASSES,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "DetParse CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LayoutConfig {
    AnchorFree,
    AnchorBased,
}

impl From<LayoutConfig> for TensorLayout {
    fn from(value: LayoutConfig) -> Self {
        match value {
            LayoutConfig::AnchorFree => TensorLayout::AnchorFree,
            LayoutConfig::AnchorBased => TensorLayout::AnchorBased,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NetworkConfigJson {
    width: u32,
    height: u32,
}

fn default_num_classes() -> usize {
    DEFAULT_NUM_CLASSES
}

fn default_confidence_threshold() -> f32 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_iou_threshold() -> f32 {
    DEFAULT_IOU_THRESHOLD
}

#[derive(Debug, Deserialize)]
struct Config {
    /// Path to a JSON file holding the flat float output tensor.
    tensor_path: String,
    #[serde(default)]
    output_path: Option<String>,
    /// Tensor layout; deliberately has no default.
    layout: LayoutConfig,
    network: NetworkConfigJson,
    #[serde(default = "default_num_classes")]
    num_classes: usize,
    #[serde(default = "default_confidence_threshold")]
    confidence_threshold: f32,
    #[serde(default = "default_iou_threshold")]
    iou_threshold: f32,
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    class_id: usize,
    confidence: f32,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl From<PixelDetection> for DetectionRecord {
    fn from(value: PixelDetection) -> Self {
        Self {
            class_id: value.class_id,
            confidence: value.confidence,
            left: value.left,
            top: value.top,
            width: value.width,
            height: value.height,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("detparse=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.tensor_path.is_empty() {
        return Err("tensor_path must be set in the config".into());
    }

    let tensor_text = fs::read_to_string(&config.tensor_path)?;
    let tensor: Vec<f32> = serde_json::from_str(&tensor_text)?;

    let parse_cfg = ParseConfig {
        num_classes: config.num_classes,
        confidence_threshold: config.confidence_threshold,
        iou_threshold: config.iou_threshold,
        ..ParseConfig::new(config.layout.into())
    };
    let network = NetworkDims::new(config.network.width, config.network.height);

    let layers = [TensorView::from_slice(&tensor)];
    let mut detections = Vec::new();
    parse_detections(&layers, network, &parse_cfg, &mut detections)?;

    let output = Output {
        detections: detections.into_iter().map(DetectionRecord::from).collect(),
    };
    let rendered = serde_json::to_string_pretty(&output)?;

    match &config.output_path {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
