use std::{env, fs, path::Path};
use util::config::AppConfig;

mod runner;

#[tokio::main]
async fn main() {
    let (db_path, url) = {
        let config = AppConfig::global();
        (config.database_path.clone(), config.database_url())
    };
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
        Some(other) => {
            eprintln!("Unknown command `{other}`. Usage: migration [clean|fresh]");
            std::process::exit(2);
        }
        None => {
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(err) => {
            eprintln!("Failed to delete DB file {}: {}", db_path.display(), err);
            std::process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if path.starts_with("sqlite:") {
        return;
    }
    if let Some(parent) = Path::new(path).parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {}", parent.display(), err);
            std::process::exit(1);
        }
    }
}
