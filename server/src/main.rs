use std::sync::Arc;

use clap::Parser;
use todo_core::TodoStore;
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "todo-server")]
#[command(about = "Serve an in-memory todo list over HTTP")]
struct Args {
    /// Address or hostname to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,
}

impl Args {
    /// Bind `--bind`/`--port`, resolving hostnames and bare IPv6 addresses.
    async fn listen(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.bind.as_str(), self.port)).await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server::logging::init();

    let args = Args::parse();
    let listener = args.listen().await?;

    todo_server::run(listener, Arc::new(TodoStore::new())).await?;
    Ok(())
}
