//! Umbra CLI
//!
//! Inspect shadow plans for a style file and render them to PNG.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use umbra_core::{Color, DrawPrimitive};
use umbra_layout::{DisplayMetrics, ShadowAttributes, ShadowLayout};
use umbra_paint::PixmapRenderer;
use umbra_shadow::ShadowStyle;

#[derive(Parser)]
#[command(name = "umbra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Umbra shadow geometry tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the primitives that paint the shadow
    Plan {
        #[command(flatten)]
        view: ViewArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the padding the shadow reserves
    Padding {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Rasterize the shadow to a PNG file
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Output path
        #[arg(short, long, default_value = "shadow.png")]
        output: PathBuf,

        /// Background color (#RGB, #RRGGBB or #AARRGGBB)
        #[arg(long)]
        background: Option<String>,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Shadow attribute file (TOML)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// View width in device pixels
    #[arg(long, default_value = "200")]
    width: f32,

    /// View height in device pixels
    #[arg(long, default_value = "100")]
    height: f32,

    /// Screen density used for dp values
    #[arg(long, default_value = "1.0")]
    density: f32,

    /// Fail on malformed attributes instead of using defaults
    #[arg(long)]
    strict: bool,
}

impl ViewArgs {
    fn load_style(&self) -> Result<ShadowStyle> {
        let Some(path) = &self.style else {
            return Ok(ShadowStyle::default());
        };
        load_attributes(path, &DisplayMetrics::new(self.density), self.strict)
    }

    fn layout(&self) -> Result<ShadowLayout> {
        let mut view = ShadowLayout::new(self.load_style()?);
        view.measure();
        view.on_size_changed(self.width, self.height);
        Ok(view)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Plan { view, json } => cmd_plan(&view, json),
        Commands::Padding { view } => cmd_padding(&view),
        Commands::Render {
            view,
            output,
            background,
        } => cmd_render(&view, &output, background.as_deref()),
    }
}

fn load_attributes(path: &Path, metrics: &DisplayMetrics, strict: bool) -> Result<ShadowStyle> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let attributes = ShadowAttributes::from_toml_str(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if strict {
        attributes
            .try_resolve(metrics)
            .with_context(|| format!("Invalid shadow attributes in {}", path.display()))
    } else {
        Ok(attributes.resolve(metrics))
    }
}

fn cmd_plan(view: &ViewArgs, json: bool) -> Result<()> {
    let layout = view.layout()?;
    let primitives = layout.primitives();

    if json {
        let output = serde_json::to_string_pretty(primitives.as_slice())
            .context("Failed to serialize primitives")?;
        println!("{}", output);
        return Ok(());
    }

    info!(
        "{} primitives for {}x{}",
        primitives.len(),
        view.width,
        view.height
    );
    for primitive in &primitives {
        println!("{}", describe(primitive));
    }
    Ok(())
}

fn cmd_padding(view: &ViewArgs) -> Result<()> {
    let padding = view.layout()?.padding();
    println!(
        "left={} top={} right={} bottom={}",
        padding.left, padding.top, padding.right, padding.bottom
    );
    Ok(())
}

fn cmd_render(view: &ViewArgs, output: &Path, background: Option<&str>) -> Result<()> {
    let mut layout = view.layout()?;

    let width = view.width.max(0.0).ceil() as u32;
    let height = view.height.max(0.0).ceil() as u32;
    let mut renderer = PixmapRenderer::new(width, height)
        .with_context(|| format!("Cannot render a {}x{} view", view.width, view.height))?;

    if let Some(background) = background {
        let color = Color::parse_hex(background).context("Invalid background color")?;
        renderer.clear(color);
    }

    let drawn = layout.paint(&mut renderer);
    renderer.save_png(output)?;

    info!("Rendered {} primitives to {}", drawn, output.display());
    Ok(())
}

fn describe(primitive: &DrawPrimitive) -> String {
    let stops: Vec<String> = primitive
        .stops()
        .iter()
        .map(|stop| format!("#{:08X}@{}", stop.color.to_argb(), stop.offset))
        .collect();
    let [left, top, right, bottom] = primitive.bounds().to_ltrb();

    match primitive {
        DrawPrimitive::GradientRect { start, end, .. } => format!(
            "rect ({}, {}, {}, {}) axis ({}, {}) -> ({}, {}) [{}]",
            left,
            top,
            right,
            bottom,
            start.x,
            start.y,
            end.x,
            end.y,
            stops.join(", ")
        ),
        DrawPrimitive::GradientArc {
            center,
            radius,
            start_angle,
            sweep_angle,
            ..
        } => format!(
            "arc center ({}, {}) radius {} from {} sweep {} in ({}, {}, {}, {}) [{}]",
            center.x,
            center.y,
            radius,
            start_angle,
            sweep_angle,
            left,
            top,
            right,
            bottom,
            stops.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use umbra_core::{ColorStops, Point, Rect};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_view_args_defaults() {
        let cli = Cli::parse_from(["umbra", "padding"]);
        let Commands::Padding { view } = cli.command else {
            panic!("expected padding command");
        };
        assert_eq!((view.width, view.height, view.density), (200.0, 100.0, 1.0));
        assert_eq!(view.load_style().unwrap(), ShadowStyle::default());
    }

    #[test]
    fn test_describe_rect() {
        let strip = DrawPrimitive::GradientRect {
            bounds: Rect::from_ltrb(0.0, 10.0, 10.0, 90.0),
            start: Point::new(10.0, 0.0),
            end: Point::ZERO,
            stops: ColorStops::edge(Color::BLACK),
        };
        assert_eq!(
            describe(&strip),
            "rect (0, 10, 10, 90) axis (10, 0) -> (0, 0) [#FF000000@0, #00FFFFFF@1]"
        );
    }
}
