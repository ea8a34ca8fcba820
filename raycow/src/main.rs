#[macro_use]
extern crate log;

use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use env_logger::Env;
use structopt::StructOpt;

use raycow_core::plugins::{has_matching_extension, ImageFormatSupportPlugin};
use raycow_core::utils::print_intro;
use ppm_support::PPMFormatSupportPlugin;

use raycow::render::{basic::BasicRender, multithreaded::MultithreadedRender, render::{Render, RenderError}};
use raycow::scenes::{demo::DemoSceneProvider, provider::SceneProvider};

const DEFAULT_LOGGING_LEVEL: &str = "info";

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, parse(from_os_str), default_value = "result.ppm")]
    pub output: PathBuf,
    #[structopt(long, default_value = "400")]
    pub width: usize,
    #[structopt(long, default_value = "200")]
    pub height: usize,
    /// Horizontal field of view in radians, defaults to pi / 3
    #[structopt(long)]
    pub fov: Option<f64>,
    /// Render rows in parallel
    #[structopt(long)]
    pub threads: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let opts = Opt::from_args();
    print_intro();

    if let Err(err) = render_scene(&opts) {
        error!("failed to render scene: {}", err);
        process::exit(1);
    }

    info!("done");
}

fn render_scene(opts: &Opt) -> Result<(), RenderError> {
    let output_format_support = PPMFormatSupportPlugin::new();
    if !has_matching_extension(&output_format_support, &opts.output) {
        warn!("output file {} does not have the .{} extension", opts.output.display(), output_format_support.file_extension());
    }

    let scene_provider = DemoSceneProvider::new();
    let render: Box<dyn Render> = if opts.threads {
        Box::new(MultithreadedRender::new())
    } else {
        Box::new(BasicRender::new())
    };

    let world = scene_provider.world()?;
    let camera = scene_provider.camera(opts.width, opts.height, opts.fov.unwrap_or(PI / 3.0))?;

    info!("rendering {}x{} image", opts.width, opts.height);
    let image = render.render_image(&world, &camera)?;

    info!("saving rendered image as {} to {}", output_format_support.format_name(), opts.output.display());
    let mut output = BufWriter::new(File::create(&opts.output)?);
    output_format_support.writer().write(&image, &mut output)?;

    Ok(())
}
