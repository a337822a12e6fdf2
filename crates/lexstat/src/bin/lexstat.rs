fn main() {
    if let Err(err) = lexstat::run() {
        eprintln!("{}", lexstat::format_error(&err));
        std::process::exit(1);
    }
}
