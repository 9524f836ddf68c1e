use anyhow::Context;
use charswap::{Config, LineSource, Session, StreamSource, Terminal};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config: Config = argh::from_env();
    let session_config = config.session_config().context("invalid options")?;

    let source: Box<dyn LineSource> = if config.use_terminal() {
        debug!("reading input through the line editor");
        Box::new(Terminal::new().context("cannot set up the terminal")?)
    } else {
        debug!("reading input as a plain stream");
        Box::new(StreamSource::new(std::io::stdin().lock()))
    };

    let mut session = Session::new(source, session_config);
    let outcome = session
        .run(&mut std::io::stdout())
        .context("session failed")?;
    info!("session ended: {outcome:?}");
    Ok(())
}
