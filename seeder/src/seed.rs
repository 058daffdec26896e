use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use services::service::AppError;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// One seeding step. Returns how many rows it wrote.
pub trait Seeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<usize, AppError>> + Send + 'a>>;
}

/// Runs a seeder and prints a one-line status. Exits the process on failure.
pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
    {
        Ok(Ok(written)) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {} {}", "done".green(), format!("{written} new").cyan(), time_str);
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            eprintln!("  {}", err.to_string().red());
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}
