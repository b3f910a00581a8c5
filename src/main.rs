use clap::Parser;

mod app;
mod assets;
mod camera;
mod conv;
mod event;
mod texture_cache;
mod throttle;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "blockyard", about = "Interactive 3D tile placement sandbox")]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: i32,
    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: i32,
    /// Tiles per grid side
    #[arg(long, default_value_t = 20)]
    pub grid: u32,
    /// Assets root (defaults to CLI -> BLOCKYARD_ASSETS -> search nearby dirs)
    #[arg(long)]
    pub assets: Option<String>,
    /// Log filter override, e.g. "info,events=trace"
    #[arg(long)]
    pub log: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut logb =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(f) = &args.log {
        logb.parse_filters(f);
    }
    logb.init();

    if let Err(e) = run(&args) {
        log::error!("fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Blockyard")
        .build();
    rl.set_target_fps(60);

    let mut app = App::new(&mut rl, &thread, args)?;
    log::info!(
        "ready: {}x{} grid, {} catalog entries",
        args.grid,
        args.grid,
        app.gs.catalog.entries().len()
    );

    // The frame loop runs until the window closes or the app requests quit.
    while !rl.window_should_close() && !app.should_quit {
        app.step(&mut rl);
        app.render(&mut rl, &thread);
    }
    log::info!(
        "shutting down after tick {} ({} events still queued)",
        app.queue.now,
        app.queue.pending()
    );
    Ok(())
}
