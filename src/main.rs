// rfold - A fold/turn corner card widget for Wayland
// Shows a card whose bottom-right corner peels back under the pointer

mod cli;
mod geometry;
mod raster;
mod style;
mod text;
mod wayland;
mod wgpu_renderer;
mod widget;

use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args = cli::parse_args();

    info!(
        "Starting rfold at {}x{} (GPU: {})",
        args.width,
        args.height,
        args.use_gpu()
    );

    let style = args.style();
    wayland::run(style, args.width, args.height, args.use_gpu())
}
