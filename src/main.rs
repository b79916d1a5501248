use clap::Parser;
use tagtally::application::{init, ConfigService, CountTagsService, ListDocumentsService};
use tagtally::cli::{format_document_list, format_tag_counts, format_type_list, Cli, Commands};
use tagtally::error::TagTallyError;
use tagtally::infrastructure::{ContentRepository, FileSystemRepository};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Use the explicit --root if given, otherwise discover the content root
fn repository(root: Option<PathBuf>) -> Result<FileSystemRepository, TagTallyError> {
    match root {
        Some(path) => Ok(FileSystemRepository::new(path)),
        None => FileSystemRepository::discover(),
    }
}

/// Resolve the content type argument, falling back to the configured default
fn resolve_type(
    repo: &FileSystemRepository,
    content_type: Option<String>,
) -> Result<String, TagTallyError> {
    if let Some(type_name) = content_type {
        return Ok(type_name);
    }

    let config = repo.load_config()?;
    config.default_type.ok_or_else(|| {
        TagTallyError::Config(
            "No content type given and no default_type configured. \
            Pass a type or set one with 'tagtally config default_type <type>'."
                .to_string(),
        )
    })
}

fn print_block(output: &str) {
    println!("{}", output.trim_end_matches('\n'));
}

fn run(cli: Cli) -> Result<(), TagTallyError> {
    match cli.command {
        Commands::Init { path, content_dir } => init::init(&path, content_dir.as_deref()),
        Commands::Tags { content_type } => {
            let repo = repository(cli.root)?;
            let content_type = resolve_type(&repo, content_type)?;

            let counts = CountTagsService::new(repo).execute(&content_type)?;
            print_block(&format_tag_counts(&counts));
            Ok(())
        }
        Commands::List {
            content_type,
            drafts,
        } => {
            let repo = repository(cli.root)?;
            let content_type = resolve_type(&repo, content_type)?;

            let documents = ListDocumentsService::new(repo).execute(&content_type, drafts)?;
            print_block(&format_document_list(&documents));
            Ok(())
        }
        Commands::Types => {
            let repo = repository(cli.root)?;
            let config = repo.load_config()?;

            let types = repo.list_content_types(&config)?;
            print_block(&format_type_list(&types));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = repository(cli.root)?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("content_dir = {}", config.content_dir);
                println!("extensions = {}", config.extensions.join(","));
                println!(
                    "default_type = {}",
                    config.default_type.unwrap_or_default()
                );
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagtally config [--list | <key> [<value>]]");
                println!("Valid keys: content_dir, extensions, default_type");
                Ok(())
            }
        }
    }
}
