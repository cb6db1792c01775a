//! RO-Crate Metadata CLI
//!
//! Command-line tool for validating, normalizing and bootstrapping
//! RO-Crate metadata documents.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map};

use rocrate_metadata::{
    build_document, find_root_entity_id, read_metadata_obj, to_canonical_string, write_metadata,
    CrateProfile, MetadataError, MetadataSource, ROOT_ENTITY_ID,
};

#[derive(Parser)]
#[command(name = "rocrate-metadata")]
#[command(about = "Validate and generate RO-Crate metadata documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a document has a valid metadata descriptor and root entity
    Validate(ValidateArgs),
    /// Rewrite a metadata document in canonical form
    Normalize(NormalizeArgs),
    /// Write a minimal metadata file for a new crate
    Init(InitArgs),
}

#[derive(Args)]
struct ValidateArgs {
    /// Metadata file, crate directory, zip archive, or URL
    source: String,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Metadata file, crate directory, zip archive, or URL
    source: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InitArgs {
    /// Directory in which to create the metadata file
    directory: PathBuf,

    /// Use the legacy 1.0 profile
    #[arg(long)]
    legacy: bool,

    /// Name for the root dataset
    #[arg(long)]
    name: Option<String>,
}

fn run_validate(args: ValidateArgs) -> Result<(), MetadataError> {
    let source = MetadataSource::detect(&args.source);
    let (_context, entities) = source.read()?;
    let (descriptor_id, root_id) = find_root_entity_id(&entities)?;
    println!("descriptor: {}", descriptor_id);
    println!("root: {}", root_id);
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<(), MetadataError> {
    let source = MetadataSource::detect(&args.source);
    let (name, document) = source.load()?;

    // Validate before re-emitting
    let (_context, entities) = read_metadata_obj(document.clone(), &name)?;
    find_root_entity_id(&entities)?;

    match args.output {
        Some(path) => {
            write_metadata(&path, &document)?;
            eprintln!("Wrote canonical metadata to {}", path.display());
        }
        None => println!("{}", to_canonical_string(&document)?),
    }
    Ok(())
}

fn run_init(args: InitArgs) -> Result<(), MetadataError> {
    let profile = if args.legacy {
        CrateProfile::V1_0
    } else {
        CrateProfile::V1_1
    };

    let mut root = json!({
        "@id": ROOT_ENTITY_ID,
        "@type": "Dataset"
    });
    if let Some(name) = args.name {
        if let Some(obj) = root.as_object_mut() {
            obj.insert("name".to_string(), json!(name));
        }
    }

    let graph = vec![profile.descriptor_properties(), root];
    let document = build_document(profile, graph, &Map::new());
    let path = args.directory.join(profile.basename());
    write_metadata(&path, &document)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Normalize(args) => run_normalize(args),
        Commands::Init(args) => run_init(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
