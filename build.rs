use std::env;
use std::fs;
use std::path::Path;

/// Variables the app reads through `option_env!` (see `src/config.rs`).
const FORWARDED_KEYS: &[&str] = &[
    "SPACE_CARGO_ENVIRONMENT",
    "SPACE_CARGO_ENABLE_LOGGING",
    "SPACE_CARGO_LOGIN_DELAY_MS",
    "SPACE_CARGO_SUBMIT_DELAY_MS",
    "SPACE_CARGO_SUCCESS_REDIRECT_MS",
    "SPACE_CARGO_AR_INIT_DELAY_MS",
    "SPACE_CARGO_DEMO_USERNAME",
    "SPACE_CARGO_DEMO_PASSWORD",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !FORWARDED_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown key {} in .env", key);
                        continue;
                    }

                    // The real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
