use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use panelfit_core::{placements, FitReport, FitRequest, Fitter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panelfit")]
#[command(about = "Roof Panel Fitter - Estimate how many panels fit on a rectangular roof", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the best panel layout for a roof
    Fit {
        /// Dimensions: ROOF_WIDTH ROOF_HEIGHT PANEL_WIDTH PANEL_HEIGHT
        #[arg(
            value_name = "DIM",
            num_args = 4,
            required_unless_present = "input",
            conflicts_with = "input"
        )]
        dims: Vec<f64>,

        /// Request file (YAML or JSON) instead of inline dimensions
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the fit report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate SVG visualization from a fit report
    Generate {
        /// Input report file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fit {
            dims,
            input,
            output,
        } => {
            fit_command(dims, input, output)?;
        }
        Commands::Generate { input, output } => {
            generate_command(input, output)?;
        }
    }

    Ok(())
}

fn fit_command(dims: Vec<f64>, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let request: FitRequest = match input {
        Some(path) => {
            println!("{}", "🔍 Loading request...".bright_blue());
            let content = std::fs::read_to_string(&path)?;
            if path.extension().and_then(|s| s.to_str()) == Some("yaml")
                || path.extension().and_then(|s| s.to_str()) == Some("yml")
            {
                serde_yaml::from_str(&content)?
            } else {
                serde_json::from_str(&content)?
            }
        }
        None => FitRequest {
            roof_width: dims[0],
            roof_height: dims[1],
            panel_width: dims[2],
            panel_height: dims[3],
        },
    };

    println!(
        "  Roof: {} × {}",
        request.roof_width.to_string().bright_white().bold(),
        request.roof_height.to_string().bright_white().bold()
    );
    println!(
        "  Panel: {} × {}",
        request.panel_width.to_string().bright_white().bold(),
        request.panel_height.to_string().bright_white().bold()
    );
    println!();

    println!("{}", "🚀 Computing layout...".bright_blue());

    let fitter = Fitter::new(request)?;
    let result = fitter.compute();

    println!();
    println!("{}", "✅ Done!".bright_green().bold());
    println!();

    println!("{}", "📊 Results:".bright_yellow().bold());
    println!(
        "  Panels: {}",
        result.panel_count.to_string().bright_white().bold()
    );
    println!("  Layout: {}", result.label.bright_white());
    println!("  Detail: {}", result.explanation);
    println!();

    let report = FitReport { request, result };
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(output_path) = output {
        std::fs::write(&output_path, json)?;
        println!(
            "💾 Saved report to {}",
            output_path.display().to_string().bright_white()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn generate_command(input: PathBuf, output: PathBuf) -> Result<()> {
    println!("{}", "🔍 Loading report...".bright_blue());

    let content = std::fs::read_to_string(&input)?;
    let report: FitReport = serde_json::from_str(&content)?;

    println!("{}", "🎨 Generating SVG...".bright_blue());

    let svg = render_svg(&report)?;
    std::fs::write(&output, svg)?;

    println!();
    println!(
        "{} Saved SVG to {}",
        "✅".bright_green(),
        output.display().to_string().bright_white()
    );

    Ok(())
}

fn render_svg(report: &FitReport) -> Result<String> {
    use std::fmt::Write;

    let mut svg = String::new();
    let view_width = 800.0;
    let view_height = 600.0;
    let margin = 40.0;

    let request = &report.request;

    // Scale the roof to fit the viewport, preserving aspect ratio.
    let scale = if request.roof_width > 0.0 && request.roof_height > 0.0 {
        ((view_width - 2.0 * margin) / request.roof_width)
            .min((view_height - 2.0 * margin) / request.roof_height)
    } else {
        1.0
    };

    let roof_width = request.roof_width.max(0.0) * scale;
    let roof_height = request.roof_height.max(0.0) * scale;
    let offset_x = (view_width - roof_width) / 2.0;
    let offset_y = (view_height - roof_height) / 2.0;

    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        view_width, view_height, view_width, view_height
    )?;
    writeln!(
        &mut svg,
        r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##
    )?;

    writeln!(
        &mut svg,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#e5e7eb" stroke="#374151" stroke-width="2"/>"##,
        offset_x, offset_y, roof_width, roof_height
    )?;
    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="14" fill="#374151">Roof: {} × {}</text>"##,
        offset_x,
        offset_y - 10.0,
        request.roof_width,
        request.roof_height
    )?;

    if report.result.panel_count == 0 {
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="18" fill="#ef4444" text-anchor="middle">{}</text>"##,
            view_width / 2.0,
            view_height / 2.0,
            report.result.label
        )?;
        writeln!(&mut svg, "</svg>")?;
        return Ok(svg);
    }

    for (index, placement) in placements(&report.result).iter().enumerate() {
        let x = offset_x + placement.x * scale;
        let y = offset_y + placement.y * scale;
        let width = placement.width * scale;
        let height = placement.height * scale;

        let (fill, stroke) = if placement.rotated {
            ("#10b981", "#059669")
        } else {
            ("#3b82f6", "#1e40af")
        };

        writeln!(
            &mut svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            x, y, width, height, fill, stroke
        )?;
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#fff" text-anchor="middle">{}</text>"##,
            x + width / 2.0,
            y + height / 2.0 + 4.0,
            index + 1
        )?;
    }

    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#666">Panels: {} | {}</text>"##,
        margin,
        view_height - margin / 2.0,
        report.result.panel_count,
        report.result.label
    )?;

    writeln!(&mut svg, "</svg>")?;

    Ok(svg)
}
