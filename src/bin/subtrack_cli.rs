fn main() {
    subtrack_core::init();
    if let Err(err) = subtrack_core::cli::run_cli() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
