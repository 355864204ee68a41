#[tokio::main]
async fn main() {
    if let Err(e) = textcrypt::cli::main::run_cli().await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
