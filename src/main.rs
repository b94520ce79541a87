use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use lineclip::{Viewport, cartesian::Point, render, scene::Scene};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the scene description; read from stdin when missing
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where to write the SVG picture of the scene
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.)]
    height: f64,

    /// Zoom factor
    #[arg(short, long, default_value_t = 1.)]
    scale: f64,

    /// Horizontal pan offset in pixels
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    offset_x: f64,

    /// Vertical pan offset in pixels
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    offset_y: f64,
}

fn read_input(path: Option<&PathBuf>) -> eyre::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .wrap_err("cannot read the standard input")?;
            Ok(input)
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Cli::parse();

    let viewport = Viewport::new(args.width, args.height)?
        .zoomed(args.scale)?
        .with_offset(Point {
            x: args.offset_x,
            y: args.offset_y,
        });

    let scene: Scene = read_input(args.input.as_ref())?.parse()?;

    for (segment, clipped) in scene.results() {
        match clipped {
            Some(clipped) => println!(
                "{} {} {} {}",
                clipped.from.x, clipped.from.y, clipped.to.x, clipped.to.y
            ),
            None => {
                log::info!("segment {segment:?} is fully outside the window");
                println!("rejected");
            }
        }
    }

    if let Some(output) = args.output {
        render::save(&output, &scene, &viewport)?;
        log::info!("scene written into {}", output.display());
    }

    Ok(())
}
