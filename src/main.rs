fn main() {
    if let Err(err) = memo_calendar::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
