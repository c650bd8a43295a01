use phonebook::cli::run_app;
use phonebook::errors::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();
    run_app()
}
