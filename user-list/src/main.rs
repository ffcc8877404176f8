use clap::Parser;
use tracing::debug;
use user_list::{Config, HttpLoader, UserList};
use users_core::UsersClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "parsed command line arguments");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let loader = HttpLoader::new(UsersClient::new(&config.base_url))?;
        let mut view = UserList::mount(loader);
        println!("{}", view.render());

        view.settled().await;
        println!("{}", view.render());
        view.unmount().await;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
