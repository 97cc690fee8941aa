use anyhow::ensure;
use url::Url;
use userlist::Client;
use userlist::UserList;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "list",
    description = "list users with their latest post"
)]
pub struct Options {
    #[argh(
        option,
        short = 'f',
        description = "only show users whose name contains this"
    )]
    pub filter: Option<String>,

    #[argh(switch, description = "print the records as json")]
    pub json: bool,

    #[argh(
        switch,
        long = "legacy-filter",
        description = "do not lower-case the filter term before matching"
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

    list.load().await;
    if let Some(filter) = options.filter {
        list.set_filter(filter);
    }

    let view = list.view();
    super::print_load_errors(&view);
    ensure!(!view.has_error(), "could not load users and posts");

    if options.json {
        let json = serde_json::to_string_pretty(&*view.records)?;
        println!("{json}");
    } else {
        super::write_records(std::io::stdout().lock(), &view.records)?;
    }

    Ok(())
}
