fn main() {
    if let Err(e) = logic_capture_analyser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
