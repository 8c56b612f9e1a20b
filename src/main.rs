fn main() {
    if let Err(err) = field_guesser::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
