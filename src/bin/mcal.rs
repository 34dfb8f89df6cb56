//! Short binary name (`mcal`) that forwards to the `memo_calendar` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = memo_calendar::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
