fn main() {
    #[cfg(feature = "cli")]
    geodelta::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("geodelta: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
