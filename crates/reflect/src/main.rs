use reflect_core::init_logging;

mod app;
mod commands;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Logging is quiet unless --verbose
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if let Err(e) = commands::run_command(&matches).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
