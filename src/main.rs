use env_logger::{Env, Target};
use wokwatch::Config;

#[tokio::main]
async fn main() -> Result<(), wokwatch::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let mut engine = wokwatch::engine(Config::default())?;
    engine.start().await
}
