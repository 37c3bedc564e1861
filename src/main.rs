use miette::Result;

/// Main entry point for the hotel-cycles CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    hotel_cycles::run()
}
