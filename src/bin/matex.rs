//! MaTeX CLI - Convert expressions, vectors and matrices to LaTeX

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use matex::{
    export, math_to_latex, BracketSet, Config, ConvertibleValue, ExportOptions, TextFormat,
    WriteMode,
};
#[cfg(feature = "cli")]
use std::io::{self, IsTerminal, Read};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "matex")]
#[command(version)]
#[command(about = "MaTeX - Convert expressions, vectors and matrices to LaTeX", long_about = None)]
struct Cli {
    /// Expression or equation chain (reads from stdin if nothing is given)
    expression: Option<String>,

    /// Render a vector instead, e.g. "1,2,3"
    #[arg(long, conflicts_with_all = ["expression", "matrix"])]
    vector: Option<String>,

    /// Render a matrix instead, rows separated by ';', e.g. "1,2;3,4"
    #[arg(long, conflicts_with = "expression")]
    matrix: Option<String>,

    /// Pretty print the output
    #[arg(short, long)]
    pretty: bool,

    /// Export to this file (inside the save location) instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// How the output file is modified
    #[arg(short, long, value_enum, default_value_t = Mode::Override)]
    mode: Mode,

    /// Wrapping template of the output file
    #[arg(short, long, value_enum, default_value_t = Format::Tex)]
    format: Format,

    /// Emit \begin{document} (tex-document format)
    #[arg(long)]
    begin: bool,

    /// Emit \end{document} (tex-document format)
    #[arg(long)]
    end: bool,

    /// Directory output files are written to
    #[arg(short, long)]
    save_location: Option<String>,

    /// TOML config file with defaults
    #[arg(short, long)]
    config: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Replace the whole file
    Override,
    /// Insert right after \begin{document}
    InsertAfterBegin,
    /// Insert right before \end{document}
    InsertBeforeEnd,
}

#[cfg(feature = "cli")]
impl From<Mode> for WriteMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Override => WriteMode::Override,
            Mode::InsertAfterBegin => WriteMode::InsertAfterDocumentStart,
            Mode::InsertBeforeEnd => WriteMode::InsertBeforeDocumentEnd,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain text (.txt)
    Plain,
    /// Markdown (.md)
    Markdown,
    /// Bare LaTeX fragment (.tex)
    Tex,
    /// LaTeX with document markers (.tex)
    TexDocument,
}

#[cfg(feature = "cli")]
impl From<Format> for TextFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => TextFormat::Plain,
            Format::Markdown => TextFormat::Markdown,
            Format::Tex => TextFormat::TexFragment,
            Format::TexDocument => TextFormat::TexDocument,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<(), String> {
    let config = build_config(&cli)?;

    let value = if let Some(ref text) = cli.vector {
        ConvertibleValue::Vector(parse_numbers(text)?)
    } else if let Some(ref text) = cli.matrix {
        let rows = text
            .split(';')
            .map(parse_numbers)
            .collect::<Result<Vec<_>, _>>()?;
        ConvertibleValue::Matrix(rows)
    } else {
        let expression = match cli.expression {
            Some(ref expression) => expression.clone(),
            None => read_stdin()?,
        };
        ConvertibleValue::Scalar(expression.trim().to_string())
    };

    let latex = math_to_latex(&value, &config).map_err(|e| e.to_string())?;

    match cli.output {
        Some(ref filename) => {
            let mut options = ExportOptions::new(cli.mode.into(), cli.format.into());
            if cli.begin || cli.end {
                let mut brackets = BracketSet::empty();
                brackets.set(BracketSet::BEGIN, cli.begin);
                brackets.set(BracketSet::END, cli.end);
                options = options.with_brackets(brackets);
            }
            let content =
                export(&latex, filename, &options, &config).map_err(|e| e.to_string())?;
            let path = matex::export::target_path(filename, options.format, &config);
            eprintln!(
                "✓ Output written to: {} ({} bytes)",
                path.display(),
                content.len()
            );
        }
        None => println!("{}", latex),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match cli.config {
        Some(ref path) => matex::utils::load_config(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    // Flags win over the config file
    if cli.pretty {
        config.pretty_printing = true;
    }
    if let Some(ref dir) = cli.save_location {
        config = config.with_save_location(dir);
    }
    Ok(config)
}

#[cfg(feature = "cli")]
fn parse_numbers(text: &str) -> Result<Vec<f64>, String> {
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .map_err(|_| format!("invalid number '{}'", item))
        })
        .collect()
}

#[cfg(feature = "cli")]
fn read_stdin() -> Result<String, String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("no expression given".to_string());
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    std::process::exit(1);
}
