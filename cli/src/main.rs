//! minuta CLI - DOCX template filling tool

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use minuta::{FieldValues, Minuta, TemplateStore};

#[derive(Parser)]
#[command(name = "minuta")]
#[command(version)]
#[command(about = "Fill DOCX templates with placeholder values", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List eligible templates in the templates directory
    List {
        /// Templates directory
        #[arg(long, value_name = "DIR", default_value = "templates")]
        dir: PathBuf,
    },

    /// Show the placeholder fields discovered in a template
    Fields {
        /// Input template file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render a template as HTML with highlighted placeholders
    Preview {
        /// Input template file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Placeholder highlight color
        #[arg(long, value_name = "COLOR", default_value = "#FFFF00")]
        highlight: String,
    },

    /// Fill a template and write the generated document
    Fill {
        /// Input template file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Field value as NAME=VALUE (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// JSON file with a name→value object
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,

        /// Output directory for the generated document
        #[arg(long, value_name = "DIR", default_value = "generated")]
        out_dir: PathBuf,

        /// Keep the literal [Name] text for fields without a value
        #[arg(long)]
        keep_missing: bool,

        /// Proceed even when some fields have no (non-empty) value
        #[arg(long)]
        allow_missing: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List { dir } => list_templates(dir),
        Commands::Fields { input } => show_fields(input),
        Commands::Preview {
            input,
            output,
            highlight,
        } => preview(input, output, highlight),
        Commands::Fill {
            input,
            set,
            values,
            out_dir,
            keep_missing,
            allow_missing,
        } => fill(input, set, values, out_dir, keep_missing, allow_missing),
    }
}

fn list_templates(dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let store = TemplateStore::with_dirs(&dir, PathBuf::from("generated"));
    let templates = match store.list_templates() {
        Ok(templates) => templates,
        Err(e) => {
            // A missing or unreadable directory just means nothing to offer.
            eprintln!(
                "{} cannot read {}: {}",
                "warning:".yellow().bold(),
                dir.display(),
                e
            );
            Vec::new()
        }
    };

    if templates.is_empty() {
        println!("No templates found in {}", dir.display());
        return Ok(());
    }

    for template in templates {
        if let Some(name) = template.file_name().and_then(|n| n.to_str()) {
            println!("{}", name);
        }
    }
    Ok(())
}

fn show_fields(input: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let template = Minuta::new().open(&input)?;
    let fields = template.fields();

    if fields.is_empty() {
        println!("No placeholder fields in {}", input.display());
        return Ok(());
    }

    for field in fields {
        println!("{}", field);
    }
    Ok(())
}

fn preview(
    input: PathBuf,
    output: Option<PathBuf>,
    highlight: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = Minuta::new().with_highlight_color(highlight).open(&input)?;
    let html = template.to_html()?;

    match output {
        Some(path) => {
            fs::write(&path, html)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn fill(
    input: PathBuf,
    set: Vec<String>,
    values_file: Option<PathBuf>,
    out_dir: PathBuf,
    keep_missing: bool,
    allow_missing: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Minuta::new().with_output_dir(out_dir);
    if keep_missing {
        builder = builder.keep_missing_fields();
    }
    let template = builder.open(&input)?;

    let mut values: FieldValues = HashMap::new();
    if let Some(path) = values_file {
        let file_values: HashMap<String, String> = serde_json::from_str(&fs::read_to_string(path)?)?;
        values.extend(file_values);
    }
    for pair in set {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("invalid --set value (expected NAME=VALUE): {}", pair))?;
        values.insert(name.trim().to_string(), value.to_string());
    }

    // Same gate as a form submit: every discovered field needs a value.
    let unfilled: Vec<String> = template
        .fields()
        .into_iter()
        .filter(|field| values.get(field).map_or(true, |v| v.trim().is_empty()))
        .collect();
    if !unfilled.is_empty() && !allow_missing {
        return Err(format!(
            "missing values for: {} (use --allow-missing to proceed)",
            unfilled.join(", ")
        )
        .into());
    }

    let path = template.fill_to_file(&values)?;
    println!("{} {}", "Generated".green().bold(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fill_flags() {
        let cli = Cli::parse_from([
            "minuta",
            "fill",
            "contrato.docx",
            "--set",
            "Nome=Ana",
            "--keep-missing",
        ]);
        match cli.command {
            Commands::Fill {
                input,
                set,
                keep_missing,
                allow_missing,
                ..
            } => {
                assert_eq!(input, PathBuf::from("contrato.docx"));
                assert_eq!(set, vec!["Nome=Ana"]);
                assert!(keep_missing);
                assert!(!allow_missing);
            }
            _ => panic!("expected fill command"),
        }
    }
}
