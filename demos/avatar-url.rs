use libravatar::{avatar_url, AvatarOptions};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut https = false;
    let mut size = None;
    let mut identity = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--https" => https = true,
            _ if arg.starts_with("--size=") => {
                size = arg["--size=".len()..].parse::<u16>().ok();
            }
            _ => identity = Some(arg),
        }
    }
    let identity = match identity {
        Some(identity) => identity,
        None => {
            println!("Usage: avatar-url [--https] [--size=N] <email|openid>");
            return;
        }
    };

    let mut options = if identity.contains("://") {
        AvatarOptions::from_openid(identity)
    } else {
        AvatarOptions::from_email(identity)
    };
    options = options.with_https(https);
    if let Some(size) = size {
        options = options.with_size(size);
    }

    match avatar_url(&options).await {
        Ok(url) => println!("{}", url),
        Err(err) => eprintln!("Error: {}", err),
    }
}
