use serde::Serialize;
use snail::{InputData, SnailOptions, StartPosition};
use std::io::{Read, Write};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Snail(snail::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Snail(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<snail::Error> for CliError {
    fn from(value: snail::Error) -> Self {
        Self::Snail(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    pretty: bool,
    options_json: Option<String>,
    start_position: Option<StartPosition>,
    clockwise: Option<bool>,
    positive_coordinates: bool,
    value_field: Option<String>,
}

fn usage() -> &'static str {
    "snail-cli\n\
\n\
USAGE:\n\
  snail-cli [--start top|left|bottom|right] [--clockwise|--counter-clockwise] [--positive] [--value-field <name>] [--options <json>] [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON object whose first property holds the item array, e.g. {\"items\": [{\"value\": 3}]}.\n\
  - --options takes a JSON object ({\"startPosition\", \"clockwise\", \"positiveCoordinates\", \"valueField\"});\n\
    individual flags override it.\n\
  - The layout is printed as JSON ({\"dataToPlot\": [...], \"dimensions\": {...}}); use --out to write a file.\n\
  - Set RUST_LOG=snail=debug to trace the packer.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--clockwise" => args.clockwise = Some(true),
            "--counter-clockwise" => args.clockwise = Some(false),
            "--positive" => args.positive_coordinates = true,
            "--start" => {
                let Some(start) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.start_position = Some(
                    start
                        .parse::<StartPosition>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--value-field" => {
                let Some(field) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if field.trim().is_empty() {
                    return Err(CliError::Usage(usage()));
                }
                args.value_field = Some(field.clone());
            }
            "--options" => {
                let Some(json) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.options_json = Some(json.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn build_options(args: &Args) -> Result<SnailOptions, CliError> {
    let mut options = match args.options_json.as_deref() {
        Some(json) => SnailOptions::from_json_str(json)?,
        None => SnailOptions::default(),
    };
    if let Some(start) = args.start_position {
        options.start_position = start;
    }
    if let Some(clockwise) = args.clockwise {
        options.clockwise = clockwise;
    }
    if args.positive_coordinates {
        options.positive_coordinates = true;
    }
    if let Some(field) = &args.value_field {
        options.value_field = field.clone();
    }
    Ok(options)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None | Some("-") => {
            std::io::stdout().lock().write_all(text.as_bytes())?;
        }
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let options = build_options(&args)?;
    let text = read_input(args.input.as_deref())?;
    let layout = snail::generate(&InputData::Json(text), &options)?;
    tracing::info!(
        circles = layout.data_to_plot.len(),
        width = layout.dimensions.width(),
        height = layout.dimensions.height(),
        "layout complete"
    );
    write_json(&layout, args.pretty, args.out.as_deref())
}

fn main() {
    env_logger::init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Snail(snail::Error::GeometryContract { .. })) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
