mod cli;
mod demo;
mod infra;
mod render;

use admissions::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
