use clap::Parser;
use git_publish::{git_publish_main, GitPublishCli};
use std::process::exit;

#[tokio::main]
async fn main() {
    println!(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION")
    ));
    let _ = dotenv::dotenv();
    let args = GitPublishCli::parse();
    env_logger::builder()
        .filter_level(args.log_level())
        .format_target(false)
        .format_timestamp(None)
        .init();
    match git_publish_main(args).await {
        Ok(code) => {
            exit(code);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
}
