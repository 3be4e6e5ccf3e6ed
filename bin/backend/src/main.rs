//! Judging Server Binary
//!
//! Serves scenarios and grades answers over HTTP.
//! Listens on `--bind` or BIND_ADDR (default 127.0.0.1:8000).
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gtl_core::log();
    gtl_core::kys();
    gtl_server::run(gtl_server::Config::parse()).await
}
