fn main() {
    if let Err(e) = hostedit::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
