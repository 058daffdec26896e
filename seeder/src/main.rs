use crate::seed::{Seeder, run_seeder};
use crate::seeds::{course::CourseSeeder, review::ReviewSeeder};
use colored::Colorize;
use util::config::AppConfig;

mod seed;
mod seeds;

const DEMO_REVIEWS_PER_COURSE: usize = 8;

/// Seeds the sample catalogue. `seeder demo` also adds random reviews
/// (development only).
#[tokio::main]
async fn main() {
    let demo = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("demo") => true,
        Some(other) => {
            eprintln!("{} {}", "Unknown argument:".red(), other);
            eprintln!("Usage: seeder [demo]");
            std::process::exit(2);
        }
    };

    if demo && !AppConfig::global().is_development() {
        eprintln!("{}", "Refusing to seed demo reviews in production".red());
        std::process::exit(1);
    }

    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "Failed to connect to database:".red(), err);
            std::process::exit(1);
        }
    };

    let mut seeders: Vec<(Box<dyn Seeder + Send + Sync>, &str)> =
        vec![(Box::new(CourseSeeder), "Course")];
    if demo {
        seeders.push((
            Box::new(ReviewSeeder {
                per_course: DEMO_REVIEWS_PER_COURSE,
            }),
            "Review",
        ));
    }

    for (seeder, name) in seeders {
        run_seeder(&*seeder, name, &db).await;
    }
}
