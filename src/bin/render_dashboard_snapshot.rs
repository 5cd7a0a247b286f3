use std::fs;
use std::path::{Path, PathBuf};

use progress_charts::core::{ProjectResult, XpRecord, graded_only};
use progress_charts::telemetry::init_default_tracing;
use progress_charts::{Dashboard, DashboardConfig, Document, RenderOutcome};
use serde::de::DeserializeOwned;

const USAGE: &str = "usage: render_dashboard_snapshot --xp <path> --results <path> [--width <px>] [--config <path>] --output <path>";

#[derive(Debug)]
struct CliArgs {
    xp: PathBuf,
    results: PathBuf,
    width: f64,
    config: Option<PathBuf>,
    output: PathBuf,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => DashboardConfig::from_json_str(&read(path)?).map_err(|e| e.to_string())?,
        None => DashboardConfig::default(),
    };
    let xp: Vec<XpRecord> = read_json(&args.xp)?;
    let results: Vec<ProjectResult> = graded_only(read_json(&args.results)?);

    let mut document = Document::new();
    document.add_container("xp-chart", args.width);
    document.add_container("project-chart", args.width);
    let mut dashboard = Dashboard::with_document(document, config).map_err(|e| e.to_string())?;

    report("xp-chart", &dashboard.render_line_chart(&xp, "xp-chart"));
    report(
        "project-chart",
        &dashboard.render_donut_chart(&results, "project-chart"),
    );

    let mut html = String::from("<section class=\"progress-dashboard\">\n");
    for id in ["xp-chart", "project-chart"] {
        let container = dashboard
            .document()
            .require_container(id)
            .map_err(|e| e.to_string())?;
        html.push_str(&format!(
            "  <div id=\"{id}\">{}</div>\n",
            container.to_markup()
        ));
    }
    html.push_str("</section>\n");

    fs::write(&args.output, html)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn report(container_id: &str, outcome: &RenderOutcome) {
    match outcome {
        RenderOutcome::Rendered => eprintln!("{container_id}: rendered"),
        RenderOutcome::Placeholder(reason) => eprintln!("{container_id}: placeholder ({reason})"),
        RenderOutcome::ContainerMissing => eprintln!("{container_id}: container missing"),
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = read(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("invalid json in `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut xp = None::<PathBuf>;
    let mut results = None::<PathBuf>;
    let mut width = 800.0;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--xp" => xp = Some(PathBuf::from(value("--xp")?)),
            "--results" => results = Some(PathBuf::from(value("--results")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--width" => {
                let raw = value("--width")?;
                width = raw
                    .parse()
                    .map_err(|_| format!("invalid --width `{raw}`"))?;
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        xp: xp.ok_or_else(|| USAGE.to_owned())?,
        results: results.ok_or_else(|| USAGE.to_owned())?,
        width,
        config,
        output: output.ok_or_else(|| USAGE.to_owned())?,
    })
}
