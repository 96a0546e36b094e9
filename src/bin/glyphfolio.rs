use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use glyphfolio::{App, BlockKind, Millis, Page, Point, SiteConfig, WallClock};

#[derive(Parser, Debug)]
#[command(name = "glyphfolio", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mount the page and print its HTML.
    Render(RenderArgs),
    /// Move the pointer over one welcome line and print per-glyph weights.
    Hover(HoverArgs),
    /// Mount the navbar and print the clock after each tick.
    Clock(ClockArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Site config JSON; defaults to the stock page.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed wall-clock instant (`YYYY-MM-DDTHH:MM:SS`); system time if omitted.
    #[arg(long)]
    at: Option<String>,

    /// Write HTML here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HoverArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which welcome line to hover.
    #[arg(long, value_enum)]
    block: BlockChoice,

    /// Pointer x in px, relative to the line's left edge.
    #[arg(long)]
    x: f64,

    /// How long to let tweens run before sampling.
    #[arg(long, default_value_t = 250)]
    settle_ms: u64,
}

#[derive(Parser, Debug)]
struct ClockArgs {
    #[arg(long)]
    at: Option<String>,

    /// Number of one-second ticks to print after the initial value.
    #[arg(long, default_value_t = 3)]
    ticks: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlockChoice {
    Subtitle,
    Title,
}

impl From<BlockChoice> for BlockKind {
    fn from(c: BlockChoice) -> Self {
        match c {
            BlockChoice::Subtitle => Self::Subtitle,
            BlockChoice::Title => Self::Title,
        }
    }
}

#[derive(serde::Serialize)]
struct GlyphWeight {
    ch: char,
    weight: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Hover(args) => cmd_hover(args),
        Command::Clock(args) => cmd_clock(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(p) => {
            SiteConfig::load(p).with_context(|| format!("load site config '{}'", p.display()))
        }
        None => Ok(SiteConfig::default()),
    }
}

fn wall_clock(at: Option<&str>) -> anyhow::Result<WallClock> {
    match at {
        Some(s) => Ok(WallClock::Fixed(
            glyphfolio::parse_instant(s).with_context(|| "parse --at")?,
        )),
        None => Ok(WallClock::System),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mut page = Page::new(wall_clock(args.at.as_deref())?);
    let mut app = App::new(&cfg);
    app.mount_in(&mut page);
    let html = app.html(&page).context("app did not mount")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, html)
                .with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn cmd_hover(args: HoverArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mut page = Page::new(WallClock::System);
    let mut app = App::new(&cfg);
    app.mount_in(&mut page);

    let block = app
        .welcome
        .block(args.block.into())
        .context("welcome section is not mounted")?;
    let container = block.container().context("block has no container")?;
    let line = page
        .doc()
        .rect(container)
        .context("block has not been laid out")?;
    let glyphs = block.glyphs().to_vec();

    page.pointer_move(Point::new(line.x0 + args.x, line.center().y));
    page.advance(Millis(args.settle_ms));

    let doc = page.doc();
    let weights: Vec<GlyphWeight> = glyphs
        .iter()
        .map(|&g| GlyphWeight {
            ch: doc.text(g).and_then(|t| t.chars().next()).unwrap_or(' '),
            weight: doc.weight(g).unwrap_or_default(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&weights)?);
    Ok(())
}

fn cmd_clock(args: ClockArgs) -> anyhow::Result<()> {
    let cfg = SiteConfig::default();
    let mut page = Page::new(wall_clock(args.at.as_deref())?);
    let mut app = App::new(&cfg);
    app.mount_in(&mut page);

    let show = |page: &Page| -> anyhow::Result<()> {
        let text = app
            .navbar
            .displayed_time(page)
            .context("navbar clock is not mounted")?;
        println!("{text}");
        Ok(())
    };

    show(&page)?;
    for _ in 0..args.ticks {
        page.advance(glyphfolio::TICK);
        show(&page)?;
    }
    Ok(())
}
