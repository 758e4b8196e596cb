mod cli;
mod demo;
mod evaluate;
mod infra;
mod render;
mod routes;
mod server;

use loan_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
