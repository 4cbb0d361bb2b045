use miette::Result;

/// Main entry point for the train-counter CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    train_counter::run()
}
