use log::LevelFilter;

fn main() {
    // initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = iconset::require_renderer() {
        println!("Error: {}", e);
        println!("{}", iconset::REBUILD_HINT);
        std::process::exit(1);
    }

    #[cfg(feature = "render")]
    std::process::exit(match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {:?}", e);
            1
        }
    });
}

#[cfg(feature = "render")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    iconset::GeneratorBuilder::new().build().run(&mut out)?;
    iconset::write_summary(&mut out)?;

    Ok(())
}
