mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("cmd switch error: {}", e);
        std::process::exit(2);
    }
}
