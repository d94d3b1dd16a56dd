use std::io;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    streamhist::pipeline::run(stdin.lock(), &mut out).context("processing standard input")?;
    Ok(())
}
