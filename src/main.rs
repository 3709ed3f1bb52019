use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use portfolio::config::{Config, Direction, Wrap};
use portfolio::constants::*;
use portfolio::content::Content;
use portfolio::engine::Engine;
use portfolio::page::PortfolioEngine;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Portfolio page with a testimonials carousel")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML content file with profile, testimonials, skills and social links
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory image paths in the content are resolved against
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    #[arg(long, value_enum)]
    wrap: Option<Wrap>,

    #[arg(long, value_enum)]
    direction: Option<Direction>,

    /// Randomize testimonial order
    #[arg(long)]
    shuffle: bool,

    /// Window size, e.g. 1280x720
    #[arg(long, value_parser = parse_size)]
    windowed_size: Option<(i32, i32)>,
}

impl Cli {
    /// Command line flags win over the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(interval) = self.interval_ms {
            config.carousel.interval_ms = interval;
        }
        if let Some(wrap) = self.wrap {
            config.carousel.wrap = wrap;
        }
        if let Some(direction) = self.direction {
            config.carousel.direction = direction;
        }
        if let Some((width, height)) = self.windowed_size {
            config.window.width = width;
            config.window.height = height;
        }
    }
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: i32 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let h: i32 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if w <= 0 || h <= 0 {
        return Err(format!("window size must be positive, got {w}x{h}"));
    }
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let content = match &cli.content {
        Some(path) => Content::load(path).unwrap_or_else(|e| {
            // The page still opens, the carousel shows its retry placeholder
            error!(error = %e, "failed to load content, starting without testimonials");
            Content { testimonials: Vec::new(), ..Content::default() }
        }),
        None => Content::default(),
    };

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    let mut engine = PortfolioEngine::new(config, content, cli.content.clone(), cli.assets.clone(), cli.shuffle);
    if !engine.initialize(&mut rl, &thread) {
        return Err(anyhow!("nothing to show"));
    }
    info!("entering main loop");

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Cap dt after stalls such as window drags
        let dt = rl.get_frame_time().min(4.0 * FRAME_TIME);

        engine.handle_input(&mut rl, &thread);
        if !engine.render_frame(dt, &mut rl, &thread, &mut framebuffer) {
            break;
        }

        // Scale the framebuffer to the window, flipped since render textures are stored upside down
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    engine.shutdown();
    Ok(())
}
