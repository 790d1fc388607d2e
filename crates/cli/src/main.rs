// ABOUTME: CLI for extracting movie metadata and mapping it onto admin forms with reelcopy.
// ABOUTME: Reads pages from URL or file/stdin and prints JSON, copy renderings or filled HTML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use reelcopy_content::{
    ContentScript, ControllerBuilder, FieldMapping, JsonFileStore, MappingController, Page,
    Response, SemanticKey, StorageScope,
};
use reelcopy_scout::{load_table_file, CopyFormat, Extractor, MovieRecord};
use tracing_subscriber::EnvFilter;

/// Copy movie metadata from a movie info page into a publishing form.
#[derive(Parser, Debug)]
#[command(name = "reelcopy")]
#[command(about = "Extract movie metadata and fill admin forms with it", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a movie record and print the getMovieInfo reply as JSON.
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Output compact JSON instead of pretty.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },

    /// Render an extracted record in one of the copy formats.
    Copy {
        #[command(flatten)]
        source: SourceArgs,

        /// title, content, excerpt, tags, featured-image, youtube-embed or custom-mapping.
        #[arg(long)]
        format: CopyFormat,
    },

    /// Map a movie record onto an admin form, save the mapping and fill the form.
    Fill {
        #[command(flatten)]
        dest: DestArgs,

        /// JSON file holding the movie record.
        #[arg(long)]
        movie: PathBuf,

        /// Destination of one field, as key=identifier. Unset keys keep the stored mapping.
        #[arg(long = "map", value_parser = parse_choice)]
        choices: Vec<(SemanticKey, String)>,
    },

    /// Answer one protocol request read from stdin against a page.
    Message {
        #[command(flatten)]
        dest: DestArgs,
    },
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Page URL (http/https) or local file path. Use "-" to read from stdin.
    target: String,

    /// Page URL used for recognition and relative links; defaults to the target.
    #[arg(long)]
    url: Option<String>,

    /// Extra URL substring identifying a source page (repeatable).
    #[arg(long = "source-pattern")]
    source_patterns: Vec<String>,

    /// JSON file replacing the builtin field table.
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct DestArgs {
    /// HTML file of the destination page.
    #[arg(long)]
    page: PathBuf,

    /// URL of the destination page.
    #[arg(long)]
    url: String,

    /// Mapping storage file; defaults to the platform data directory.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Keep one mapping per destination site instead of one per profile.
    #[arg(long, default_value_t = false)]
    per_origin: bool,

    /// Where to write the resulting page HTML.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Extract { source, compact } => {
            let reply = extract_reply(&source)?;
            if compact {
                println!("{}", serde_json::to_string(&reply)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            }
            if !reply.success {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Copy { source, format } => {
            let reply = extract_reply(&source)?;
            let record = match reply.data {
                Some(record) if reply.success => record,
                _ => bail!(reply.error.unwrap_or_else(|| "no movie data".to_string())),
            };
            println!("{}", format.render(&record));
            Ok(())
        }
        Command::Fill {
            dest,
            movie,
            choices,
        } => {
            let text = fs::read_to_string(&movie)
                .with_context(|| format!("reading {}", movie.display()))?;
            let record: MovieRecord = serde_json::from_str(&text)?;
            runtime()?.block_on(fill(&dest, record, &choices))
        }
        Command::Message { dest } => {
            let mut request = String::new();
            io::stdin().read_to_string(&mut request)?;
            runtime()?.block_on(message(&dest, &request))
        }
    }
}

fn extract_reply(source: &SourceArgs) -> Result<Response> {
    let url = source.url.clone().unwrap_or_else(|| source.target.clone());
    let extractor = build_extractor(source)?;
    let bytes = load_bytes(&source.target)?;
    let page = Page::new(url, &String::from_utf8_lossy(&bytes));
    Ok(match extractor.extract(page.url(), page.document()) {
        Ok(record) => Response::with_data(record),
        Err(err) => Response::failure(err.to_string()),
    })
}

fn build_extractor(source: &SourceArgs) -> Result<Extractor> {
    let mut builder = Extractor::builder();
    if !source.source_patterns.is_empty() {
        let mut patterns = reelcopy_scout::PageRecognizer::source_defaults()
            .patterns()
            .to_vec();
        patterns.extend(source.source_patterns.iter().cloned());
        builder = builder.source_patterns(patterns);
    }
    if let Some(path) = &source.table {
        builder = builder.table(load_table_file(path)?);
    }
    Ok(builder.build())
}

async fn fill(dest: &DestArgs, record: MovieRecord, choices: &[(SemanticKey, String)]) -> Result<()> {
    let mut page = load_page(dest)?;
    let mut controller = build_controller(dest)?;

    if let Err(err) = controller.load_saved(&dest.url).await {
        tracing::warn!(error = %err, "ignoring unreadable stored mapping");
    }
    controller.present(&mut page, record)?;
    for (key, identifier) in choices {
        controller.choose(&mut page, *key, identifier)?;
    }

    let outcome = controller.save(&mut page).await?;
    controller.flush_notices(&mut page);

    eprintln!("filled: {}", key_list(&outcome.report.filled));
    if !outcome.report.skipped.is_empty() {
        eprintln!("skipped: {}", key_list(&outcome.report.skipped));
    }
    if outcome.mapping == FieldMapping::default() {
        eprintln!("no fields mapped; pass --map key=identifier");
    }
    write_page(dest, &page)
}

async fn message(dest: &DestArgs, request: &str) -> Result<()> {
    let mut page = load_page(dest)?;
    let mut script = ContentScript::new(Extractor::default(), build_controller(dest)?);
    let reply = script
        .handle_json(&mut page, request)
        .await
        .context("invalid request")?;
    println!("{}", serde_json::to_string(&reply)?);
    if dest.output.is_some() {
        write_page(dest, &page)?;
    }
    Ok(())
}

fn build_controller(dest: &DestArgs) -> Result<MappingController<JsonFileStore>> {
    let path = match &dest.store {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };
    tracing::debug!(path = %path.display(), "using mapping store");
    let scope = if dest.per_origin {
        StorageScope::Origin
    } else {
        StorageScope::Profile
    };
    Ok(ControllerBuilder::new()
        .scope(scope)
        .build(JsonFileStore::new(path)))
}

fn default_store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "reelcopy")
        .ok_or_else(|| anyhow!("no home directory; pass --store"))?;
    Ok(dirs.data_dir().join("storage.json"))
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn load_page(dest: &DestArgs) -> Result<Page> {
    let html = fs::read_to_string(&dest.page)
        .with_context(|| format!("reading {}", dest.page.display()))?;
    Ok(Page::new(dest.url.clone(), &html))
}

fn write_page(dest: &DestArgs, page: &Page) -> Result<()> {
    let html = page.html();
    match &dest.output {
        Some(path) => write_file(path, &html),
        None => {
            io::stdout().write_all(html.as_bytes())?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

fn key_list(keys: &[SemanticKey]) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_choice(s: &str) -> Result<(SemanticKey, String), String> {
    let (key, identifier) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=identifier, got {:?}", s))?;
    Ok((key.trim().parse()?, identifier.trim().to_string()))
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        let bytes = resp.bytes()?;
        return Ok(bytes.to_vec());
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
