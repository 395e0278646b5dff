use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Read posts and manage their comments from the terminal"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "POSTS_API_URL",
    default_value = "http://localhost:8080",
    help = "Base URL of the posts API"
  )]
  pub(crate) api_url: String,
  #[arg(
    long,
    env = "POSTS_LOG_FILE",
    value_name = "PATH",
    help = "Write logs to this file, filtered by RUST_LOG"
  )]
  pub(crate) log_file: Option<PathBuf>,
  #[arg(long, value_name = "ID", help = "Open this post instead of the list")]
  pub(crate) post: Option<u64>,
  #[arg(
    long,
    env = "POSTS_WEB_URL",
    default_value = "http://localhost:3000",
    help = "Base URL of the web front end, used for editing posts"
  )]
  pub(crate) web_url: String,
}
