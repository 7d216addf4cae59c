use clap::Parser;
use console::Term;
use memex::api::{CmdResult, NewDocument};
use memex::commands::helpers::parse_explicit_list;
use memex::error::{MemexError, Result};
use memex::init::{MemexContext, initialize};
use memex::model::Section;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands, TaxaCommands, YfmCommands};
use cli::print::{Symbols, print_messages, print_outputs, print_taxa};
use cli::prompt;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    ctx: MemexContext,
    cwd: PathBuf,
    symbols: Symbols,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let cwd = std::env::current_dir()?;
    let ctx = initialize(&cwd, cli.root.as_deref(), cli.tz.as_deref())?;
    let mut app = AppContext {
        ctx,
        cwd,
        symbols: Symbols::default(),
    };
    print_messages(&app.ctx.warnings, &app.symbols);

    let result = match cli.command {
        Commands::Init { force } => app.ctx.api.init(force)?,
        Commands::New {
            slug,
            interactive,
            folder,
            cats,
            tags,
            force,
            no_backup,
        } => {
            let request = NewArgs {
                slug,
                interactive,
                folder,
                cats,
                tags,
                force,
                no_backup,
            };
            handle_new(&app, request)?
        }
        Commands::Yfm { action } => match action {
            YfmCommands::Touch { paths } => app.ctx.api.touch(&app.files(&paths))?,
            YfmCommands::Fmt { paths } => app.ctx.api.fmt(&app.files(&paths))?,
        },
        Commands::Taxa { action } => match action {
            TaxaCommands::List { section } => app.ctx.api.list_taxa(section.into())?,
            TaxaCommands::Add { section, values } => {
                app.ctx.api.add_taxa(section.into(), &values)?
            }
            TaxaCommands::Rm { section, values } => {
                app.ctx.api.remove_taxa(section.into(), &values)?
            }
        },
        Commands::Clean { files, write } => {
            let files = app.files(&files);
            app.ctx.api.clean(&files, write)?
        }
    };

    finish(&app, result)
}

impl AppContext {
    fn files(&self, raw: &[String]) -> Vec<PathBuf> {
        cli::resolve_files(&self.cwd, self.ctx.api.paths(), raw)
    }
}

fn finish(app: &AppContext, result: CmdResult) -> Result<()> {
    print_taxa(&result.taxa);
    print_outputs(&result.outputs);
    print_messages(&result.messages, &app.symbols);
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

struct NewArgs {
    slug: String,
    interactive: bool,
    folder: Option<String>,
    cats: Option<String>,
    tags: Option<String>,
    force: bool,
    no_backup: bool,
}

fn handle_new(app: &AppContext, args: NewArgs) -> Result<CmdResult> {
    // Bad JSON fails before any prompt or file access
    let explicit_cats = parse_explicit_list(args.cats.as_deref())?;
    let explicit_tags = parse_explicit_list(args.tags.as_deref())?;

    let (folder, picked_cats, picked_tags) = if args.interactive {
        let term = Term::stderr();
        let folder = pick_folder(app, &term, args.folder.as_deref())?;
        let cats = match explicit_cats {
            Some(_) => None,
            None => {
                let inferred = app.ctx.api.infer_categories(&folder);
                pick_values(app, &term, Section::Categories, &inferred)?
            }
        };
        let tags = match explicit_tags {
            Some(_) => None,
            None => pick_values(app, &term, Section::Tags, &[])?,
        };
        (folder, cats, tags)
    } else {
        let folder = args.folder.ok_or_else(|| {
            MemexError::Api("--folder is required unless --interactive is given".to_string())
        })?;
        (folder, None, None)
    };

    app.ctx.api.new_document(NewDocument {
        slug: args.slug,
        folder,
        categories: explicit_cats.or(picked_cats),
        tags: explicit_tags.or(picked_tags),
        force: args.force,
        no_backup: args.no_backup,
    })
}

fn pick_folder(app: &AppContext, term: &Term, preferred: Option<&str>) -> Result<String> {
    let folders = app.ctx.api.folders()?;
    if folders.is_empty() {
        let docs = app.ctx.api.paths().docs_dir();
        return Err(MemexError::Api(format!(
            "No folders under {}",
            docs.display()
        )));
    }
    let default = preferred
        .and_then(|p| folders.iter().position(|f| f == p))
        .unwrap_or(0);
    let index = prompt::select_one(term, "Folder", &folders, default)?;
    Ok(folders[index].clone())
}

/// Multi-select over a taxonomy section. `None` when there is nothing to offer.
fn pick_values(
    app: &AppContext,
    term: &Term,
    section: Section,
    prechecked: &[String],
) -> Result<Option<Vec<String>>> {
    let listed = app.ctx.api.list_taxa(section)?;
    let mut options: Vec<String> = listed.taxa.into_iter().map(|(key, _)| key).collect();
    for value in prechecked {
        if !options.contains(value) {
            options.push(value.clone());
        }
    }
    if options.is_empty() {
        return Ok(None);
    }

    let checked: Vec<usize> = prechecked
        .iter()
        .filter_map(|v| options.iter().position(|o| o == v))
        .collect();
    let title = match section {
        Section::Categories => "Categories",
        Section::Tags => "Tags",
    };
    let picked = prompt::select_many(term, title, &options, &checked)?;
    Ok(Some(picked.into_iter().map(|i| options[i].clone()).collect()))
}
