fn main() {
    if let Err(err) = txenc::cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
