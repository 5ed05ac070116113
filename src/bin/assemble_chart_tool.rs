use chart_config::api::{AssemblerConfig, ChartAssembler, JsonFormat};
use chart_config::core::{Chart, ChartDataset};
use chart_config::extensions::ColorPaletteHook;
use chart_config::store::{ChartRepository, InMemoryChartStore};
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: assemble_chart_tool --input <fixture.json> [--config <config.json>] [--pretty] [--palette]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    pretty: bool,
    palette: bool,
}

/// Fixture layout: one chart plus its datasets. A dataset may point at a
/// `label,value` CSV file instead of listing labels and values inline.
#[derive(Debug, Deserialize)]
struct ChartFixture {
    chart: Chart,
    #[serde(default)]
    datasets: Vec<FixtureDataset>,
}

#[derive(Debug, Deserialize)]
struct FixtureDataset {
    #[serde(flatten)]
    dataset: ChartDataset,
    #[serde(default)]
    csv: Option<PathBuf>,
}

fn main() {
    let _ = chart_config::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => AssemblerConfig::from_json_str(&read_file(path)?)
            .map_err(|err| err.to_string())?,
        None => AssemblerConfig::default(),
    };
    if args.pretty {
        config = config.with_json_format(JsonFormat::Pretty);
    }

    let fixture: ChartFixture = serde_json::from_str(&read_file(&args.input)?)
        .map_err(|err| format!("invalid json: {err}"))?;
    let base_dir = args.input.parent().unwrap_or_else(|| Path::new("."));

    let chart_id = fixture.chart.id;
    let mut store = InMemoryChartStore::new();
    store
        .save_chart(fixture.chart)
        .map_err(|err| err.to_string())?;
    for entry in fixture.datasets {
        let mut dataset = entry.dataset;
        if let Some(csv_path) = entry.csv {
            let path = base_dir.join(csv_path);
            let file = File::open(&path)
                .map_err(|err| format!("failed to open `{}`: {err}", path.display()))?;
            dataset.load_csv(file).map_err(|err| err.to_string())?;
        }
        store.save_dataset(dataset).map_err(|err| err.to_string())?;
    }

    let mut assembler = ChartAssembler::new(config);
    if args.palette {
        assembler
            .register_hook(Box::new(ColorPaletteHook::default()))
            .map_err(|err| err.to_string())?;
    }

    let output = assembler
        .assemble_from_repository(&store, chart_id)
        .map_err(|err| err.to_string())?;
    println!("{output}");
    Ok(())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut pretty = false;
    let mut palette = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--pretty" => pretty = true,
            "--palette" => palette = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        config,
        pretty,
        palette,
    })
}
