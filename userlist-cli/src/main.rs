mod command;

use tracing_subscriber::EnvFilter;

#[derive(Debug, argh::FromArgs)]
#[argh(description = "a cli to list users with their latest post")]
struct Options {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    List(self::command::list::Options),
    Search(self::command::search::Options),
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let options = argh::from_env();
    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    tokio_rt.block_on(async_main(options))
}

async fn async_main(options: Options) -> anyhow::Result<()> {
    match options.subcommand {
        Subcommand::List(options) => self::command::list::exec(options).await,
        Subcommand::Search(options) => self::command::search::exec(options).await,
    }
}
