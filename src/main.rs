fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the calculator application
    glass_calculator::run_app()
}
