use anyhow::Context;
use std::io::Write;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use url::Url;
use userlist::Client;
use userlist::UserList;
use userlist::View;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "search",
    description = "search users by name, reading one search term per line from stdin"
)]
pub struct Options {
    #[argh(
        switch,
        long = "legacy-filter",
        description = "do not lower-case the search term before matching"
    )]
    pub legacy_filter: bool,

    #[argh(option, long = "users-url", description = "the url to get users from")]
    pub users_url: Option<Url>,

    #[argh(option, long = "posts-url", description = "the url to get posts from")]
    pub posts_url: Option<Url>,
}

pub async fn exec(options: Options) -> anyhow::Result<()> {
    let config = super::load_config(options.users_url, options.posts_url)?;
    let client = Client::with_config(config);
    let mut list = UserList::with_filter_mode(client, super::filter_mode(options.legacy_filter));

    let mut views = list.subscribe();
    let renderer = tokio::spawn(async move {
        // Ends once the list is dropped.
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            render(&view)?;
        }
        anyhow::Ok(())
    });

    list.load().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        list.set_filter(line);
    }

    drop(list);
    renderer.await.context("failed to join renderer")?
}

fn render(view: &View) -> anyhow::Result<()> {
    if view.has_error() {
        super::print_load_errors(view);
        eprintln!("Some data could not be loaded, results may be incomplete.");
    }

    let mut stdout = std::io::stdout().lock();
    super::write_records(&mut stdout, &view.records)?;
    writeln!(stdout, "-- {} users --", view.records.len())?;

    Ok(())
}
