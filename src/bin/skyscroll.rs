use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skyscroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print generated decorative elements as JSON.
    Field(FieldArgs),
    /// Print the visual parameters of one section as JSON.
    State(StateArgs),
    /// Render one section as SVG or PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FieldArgs {
    /// static, twinkle, shooting, cloud or crater.
    #[arg(long)]
    category: skyscroll::FieldCategory,

    /// Number of elements to generate.
    #[arg(long)]
    count: usize,

    /// Print only the 64-bit fingerprint of the full field built with this count.
    #[arg(long, default_value_t = false)]
    fingerprint: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct PageArgs {
    /// Section list JSON (defaults to the built-in sections).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Section index (0-based).
    #[arg(long, default_value_t = 0)]
    section: usize,

    /// Scroll progress through the section, clamped to [0, 1].
    #[arg(long, default_value_t = 0.0)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct StateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Seconds since the section became active.
    #[arg(long, default_value_t = 10.0)]
    time: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Seconds since the section became active.
    #[arg(long, default_value_t = 10.0)]
    time: f64,

    /// Output path; `.png` is rasterized, anything else gets SVG.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Field(args) => cmd_field(args),
        Command::State(args) => cmd_state(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_field(args: FieldArgs) -> anyhow::Result<()> {
    if args.fingerprint {
        let mut counts = skyscroll::FieldCounts::default();
        match args.category {
            skyscroll::FieldCategory::Static => counts.static_stars = args.count,
            skyscroll::FieldCategory::Twinkle => counts.twinkling_stars = args.count,
            skyscroll::FieldCategory::Shooting => counts.shooting_stars = args.count,
            skyscroll::FieldCategory::Cloud => counts.clouds = args.count,
            skyscroll::FieldCategory::Crater => counts.craters = args.count,
        }
        let field = skyscroll::StarField::generate(&counts);
        println!("{:016x}", field.fingerprint());
        return Ok(());
    }

    let stdout = std::io::stdout().lock();
    match args.category {
        skyscroll::FieldCategory::Shooting => {
            serde_json::to_writer_pretty(stdout, &skyscroll::generate_shooting_stars(args.count))
        }
        skyscroll::FieldCategory::Cloud => {
            serde_json::to_writer_pretty(stdout, &skyscroll::generate_clouds(args.count))
        }
        skyscroll::FieldCategory::Crater => {
            serde_json::to_writer_pretty(stdout, &skyscroll::generate_craters(args.count))
        }
        category => serde_json::to_writer_pretty(stdout, &skyscroll::generate(category, args.count)),
    }
    .context("write field JSON")?;
    println!();
    Ok(())
}

fn open_page(args: &PageArgs, activated_at_s: f64) -> anyhow::Result<skyscroll::PageController> {
    let content = match &args.content {
        Some(p) => skyscroll::SiteContent::from_path(p)
            .with_context(|| format!("load content '{}'", p.display()))?,
        None => skyscroll::SiteContent::default(),
    };
    let config = match &args.config {
        Some(p) => skyscroll::SiteConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => skyscroll::SiteConfig::default(),
    };

    let mut page = skyscroll::PageController::new(content, config)?;
    page.scroll_to(
        args.section,
        skyscroll::ScrollProgress::new(args.progress),
        activated_at_s,
    )?;
    Ok(page)
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let page = open_page(&args.page, 0.0)?;
    let params = page.visual_state(args.page.section, args.time)?;
    serde_json::to_writer_pretty(std::io::stdout().lock(), &params)
        .context("write state JSON")?;
    println!();
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let page = open_page(&args.page, 0.0)?;
    let section = args.page.section;

    if is_png(&args.out) {
        let frame = skyscroll::render_section_frame(&page, section, args.time)?;
        skyscroll::write_png(&frame, &args.out)?;
    } else {
        let svg = skyscroll::render_section_svg(&page, section, args.time)?;
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
