//! Headless client for the symptom catalog and prediction endpoints.

use sympred::backend::{Catalog, HttpBackend, PredictionBackend};
use sympred::config::{self, AppConfig};
use sympred::prediction::{self, PredictionResult};

fn main() {
    if let Err(err) = sympred::logging::init_stderr("warn") {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    let Options {
        backend: backend_url,
        command,
    } = options;
    match command {
        Command::InitConfig { force } => init_config(force),
        Command::Symptoms => {
            let backend = backend(backend_url.as_deref())?;
            print_catalog(backend.fetch_catalog().map_err(|err| err.to_string())?);
            Ok(())
        }
        Command::Predict { symptoms } => {
            if symptoms.is_empty() {
                return Err("Please select at least one symptom".to_string());
            }
            let backend = backend(backend_url.as_deref())?;
            let result = backend.predict(&symptoms).map_err(|err| match err {
                err if err.is_rejection() => err
                    .rejection_message()
                    .unwrap_or("Prediction failed. Please try again.")
                    .to_string(),
                err => format!("An error occurred: {err}"),
            })?;
            print_prediction(&result);
            Ok(())
        }
    }
}

fn backend(backend_url: Option<&str>) -> Result<HttpBackend, String> {
    let mut config = config::load_or_default().map_err(|err| err.to_string())?;
    apply_backend_override(&mut config, backend_url)?;
    HttpBackend::new(&config.backend).map_err(|err| err.to_string())
}

fn apply_backend_override(config: &mut AppConfig, backend: Option<&str>) -> Result<(), String> {
    if let Some(url) = backend {
        config.backend.base_url = url.to_string();
        config.validate().map_err(|err| err.to_string())?;
    }
    Ok(())
}

fn init_config(force: bool) -> Result<(), String> {
    let path = config::config_path().map_err(|err| err.to_string())?;
    if path.exists() && !force {
        return Err(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        ));
    }
    config::save_to_path(&AppConfig::default(), &path).map_err(|err| err.to_string())?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_catalog(catalog: Catalog) {
    match catalog {
        Catalog::Symptoms(ids) if !ids.is_empty() => {
            let width = ids.iter().map(String::len).max().unwrap_or(0);
            for id in &ids {
                println!("{id:<width$}  {}", prediction::symptom_label(id));
            }
        }
        Catalog::Symptoms(_) | Catalog::Missing => println!("Backend returned no symptoms."),
    }
}

fn print_prediction(result: &PredictionResult) {
    println!("Prediction:          {}", result.label);
    println!("Risk level:          {}", result.risk_tier().level_text());
    println!(
        "Diabetes probability: {}",
        prediction::format_percent(result.diabetes_probability)
    );
    println!(
        "Healthy probability:  {}",
        prediction::format_percent(result.healthy_probability)
    );
    println!(
        "Confidence:           {}",
        prediction::format_percent(result.confidence)
    );
    println!("Symptoms analyzed:    {}", result.symptoms_count);
    if !result.message.is_empty() {
        println!();
        println!("{}", result.message);
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Symptoms,
    Predict { symptoms: Vec<String> },
    InitConfig { force: bool },
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    backend: Option<String>,
    command: Command,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut backend = None;
    let mut command: Option<String> = None;
    let mut rest = Vec::new();
    let mut force = false;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--backend" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--backend requires a value".to_string())?;
                backend = Some(value.to_string());
            }
            "--force" => force = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {flag}\n\n{}", help_text()));
            }
            value if command.is_none() => command = Some(value.to_string()),
            value => rest.push(value.to_string()),
        }
        idx += 1;
    }
    if command.as_deref() != Some("predict")
        && let Some(extra) = rest.first()
    {
        return Err(format!("Unexpected argument: {extra}"));
    }
    let command = match command.as_deref() {
        Some("symptoms") => Command::Symptoms,
        Some("predict") => Command::Predict { symptoms: rest },
        Some("init-config") => Command::InitConfig { force },
        Some(other) => return Err(format!("Unknown command: {other}\n\n{}", help_text())),
        None => return Err(help_text()),
    };
    if force && !matches!(command, Command::InitConfig { .. }) {
        return Err("--force only applies to init-config".to_string());
    }
    Ok(Some(Options { backend, command }))
}

fn help_text() -> String {
    [
        "sympred-cli",
        "",
        "Query the symptom prediction backend from the command line.",
        "",
        "Usage:",
        "  sympred-cli [--backend <url>] symptoms",
        "  sympred-cli [--backend <url>] predict <symptom>...",
        "  sympred-cli init-config [--force]",
        "",
        "Options:",
        "  --backend <url>  Override the configured backend base URL.",
        "  --force          Overwrite an existing config file.",
        "  -h, --help       Show this help text.",
    ]
    .join("\n")
}
