//! Command-line front end for confdoc.
use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use confdoc::{
    ConfdocError,
    config::{CONFIG_FILE_NAME, ToolConfig},
    generator::DocsGenerator,
    model::{ModelFile, TypeModel},
    tracing_config,
};

#[derive(Parser)]
#[command(name = "confdoc")]
#[command(about = "Generate configuration documentation from annotated types")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write documentation for every annotated type, or one type
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Directory relative output paths are resolved against
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Project name reported in diagnostics
        #[arg(long)]
        project_name: Option<String>,

        /// Only generate this type
        #[arg(long = "type")]
        type_name: Option<String>,
    },
    /// List the annotated types
    List {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the JSON Schema of the model file format
    Schema,
    /// Render one type's documentation to stdout without writing files
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// Type to render
        #[arg(long = "type")]
        type_name: String,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Model files (JSON or TOML)
    #[arg(short, long = "model")]
    models: Vec<PathBuf>,

    /// Tool configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    tracing_config::init()?;

    match cli.command {
        Commands::Generate {
            input,
            project_dir,
            project_name,
            type_name,
        } => {
            let config = load_config(input.config.as_deref())?;
            let mut generator = build_generator(&input, &config)?;

            if let Some(dir) = project_dir.or(config.project_dir) {
                generator = generator.with_project_dir(dir);
            }
            if let Some(name) = project_name.or(config.project_name) {
                generator = generator.with_project_name(name);
            }

            let report = match type_name {
                Some(name) => generator.generate_type(&name)?,
                None => generator.generate_all(),
            };

            for path in &report.written {
                println!("{}", path.display());
            }
            println!(
                "Generated {} files ({} warnings)",
                report.written.len(),
                report.diagnostics.iter().filter(|d| d.is_warning()).count()
            );
        }
        Commands::List { input } => {
            let config = load_config(input.config.as_deref())?;
            let generator = build_generator(&input, &config)?;
            println!("Documented types:");
            for name in generator.list_documented_types() {
                println!("  - {name}");
            }
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(ModelFile);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Preview { input, type_name } => {
            let config = load_config(input.config.as_deref())?;
            let generator = build_generator(&input, &config)?;
            let id = generator
                .model()
                .find(&type_name)
                .ok_or_else(|| ConfdocError::UnknownType(type_name.clone()))?;

            let mut diagnostics = Vec::new();
            let mut files = 0;
            for options in generator.passes_for(id, &mut diagnostics) {
                for file in generator.render_pass(id, &options, &mut diagnostics) {
                    println!("==> {} <==", file.path.display());
                    println!("{}", file.contents);
                    files += 1;
                }
            }
            println!(
                "Previewed {files} files ({} warnings)",
                diagnostics.iter().filter(|d| d.is_warning()).count()
            );
        }
    }

    Ok(())
}

/// Loads the explicit config file, else `confdoc.toml` in the current
/// directory when present, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<ToolConfig, ConfdocError> {
    match explicit {
        Some(path) => ToolConfig::load(path),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.is_file() {
                ToolConfig::load(default_path)
            } else {
                Ok(ToolConfig::default())
            }
        }
    }
}

fn build_generator(input: &InputArgs, config: &ToolConfig) -> Result<DocsGenerator, ConfdocError> {
    let models = if input.models.is_empty() {
        &config.models
    } else {
        &input.models
    };

    if models.is_empty() {
        return Err(ConfdocError::ConfigValidation {
            component: "models".to_string(),
            details: "no model files given; pass --model or list them in confdoc.toml".to_string(),
        });
    }

    let model = TypeModel::load(models.as_slice())?;
    Ok(DocsGenerator::new(model).with_reserved_namespaces(config.reserved_namespaces.clone()))
}
