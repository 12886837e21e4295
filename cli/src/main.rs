//! ungdocs CLI - Google Docs JSON to paginated Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ungdocs::convert::{ConvertOptions, ConvertedDocument, DocumentConverter};
use ungdocs::render::{self, FrontMatter, JsonFormat, RenderOptions};
use ungdocs::{parse_file_with_options, ParseOptions};

#[derive(Parser)]
#[command(name = "ungdocs")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Google Docs JSON into paginated Markdown", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document into one Markdown file per page plus JSON
    Convert {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Folder path of the document, e.g. "Docs/Guides"
        #[arg(long, env = "UNGDOCS_BREADCRUMB")]
        breadcrumb: Option<String>,
    },

    /// Print Markdown for every page or a single page
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only render this page (0-based)
        #[arg(long)]
        page: Option<usize>,

        /// Omit the YAML front matter
        #[arg(long)]
        no_frontmatter: bool,

        /// Folder path of the document, e.g. "Docs/Guides"
        #[arg(long, env = "UNGDOCS_BREADCRUMB")]
        breadcrumb: Option<String>,
    },

    /// Convert a document to JSON
    Json {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Folder path of the document, e.g. "Docs/Guides"
        #[arg(long, env = "UNGDOCS_BREADCRUMB")]
        breadcrumb: Option<String>,
    },

    /// Show document information
    Info {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Folder path of the document, e.g. "Docs/Guides"
        #[arg(long, env = "UNGDOCS_BREADCRUMB")]
        breadcrumb: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            breadcrumb,
        }) => cmd_convert(&input, output.as_deref(), breadcrumb.as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            page,
            no_frontmatter,
            breadcrumb,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            page,
            !no_frontmatter,
            breadcrumb.as_deref(),
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
            breadcrumb,
        }) => cmd_json(&input, output.as_deref(), compact, breadcrumb.as_deref()),
        Some(Commands::Info { input, breadcrumb }) => cmd_info(&input, breadcrumb.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), None)
            } else {
                println!("{}", "Usage: ungdocs <FILE> [OUTPUT]".yellow());
                println!("       ungdocs --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_breadcrumb(breadcrumb: Option<&str>) -> Vec<String> {
    breadcrumb
        .map(|b| {
            b.split('/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn load(input: &Path, breadcrumb: Option<&str>) -> Result<ConvertedDocument, Box<dyn std::error::Error>> {
    // Lenient so one malformed block does not lose the whole document
    let doc = parse_file_with_options(input, ParseOptions::new().lenient())?;
    let breadcrumb = parse_breadcrumb(breadcrumb);
    log::debug!("Converting {} with breadcrumb {:?}", input.display(), breadcrumb);
    let options = ConvertOptions::new().with_breadcrumb(breadcrumb);
    Ok(DocumentConverter::new(options).convert(&doc)?)
}

fn page_file_name(index: usize, slug: &str) -> String {
    if slug.is_empty() {
        format!("{:02}-page.md", index)
    } else {
        format!("{:02}-{}.md", index, slug)
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    breadcrumb: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Converting document...");
    let converted = load(input, breadcrumb)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let render_options = RenderOptions::new();
    let mut files = Vec::with_capacity(converted.pages.len());
    for (index, page) in converted.pages.iter().enumerate() {
        let markdown = render::render_page(page, &FrontMatter::new(), &render_options)?;
        let name = page_file_name(index, &page.slug);
        fs::write(output_dir.join(&name), &markdown)?;
        files.push(name);
    }
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = render::to_json(&converted, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    let toc = serde_json::to_string_pretty(&converted.toc)?;
    fs::write(output_dir.join("toc.json"), &toc)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for name in &files {
        println!("  {} {}", "├─".dimmed(), name);
    }
    println!("  {} content.json", "├─".dimmed());
    println!("  {} toc.json", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    page: Option<usize>,
    frontmatter: bool,
    breadcrumb: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let converted = load(input, breadcrumb)?;
    let render_options = RenderOptions::new().with_frontmatter(frontmatter);

    let pages: Vec<_> = match page {
        Some(index) => {
            let page = converted.page(index).ok_or_else(|| {
                format!(
                    "Page {} out of range ({} pages)",
                    index,
                    converted.page_count()
                )
            })?;
            vec![page]
        }
        None => converted.pages.iter().collect(),
    };

    let mut rendered = Vec::with_capacity(pages.len());
    for page in pages {
        rendered.push(render::render_page(page, &FrontMatter::new(), &render_options)?);
    }
    let markdown = rendered.join("\n");

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", markdown);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    breadcrumb: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let converted = load(input, breadcrumb)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&converted, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, breadcrumb: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let converted = load(input, breadcrumb)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), converted.title);
    println!("{}: {}", "Pages".bold(), converted.page_count());

    println!();
    println!("{}", "Table of Contents".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for entry in &converted.toc {
        println!("{} {}", "•".green(), entry.title);
        for item in &entry.items {
            println!("    {} {}", "-".dimmed(), item.text);
        }
    }

    let stats = &converted.stats;
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Quotes".bold(), stats.quote_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "ungdocs".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Docs JSON to paginated Markdown converter");
    println!();
    println!("License: MIT");
}
