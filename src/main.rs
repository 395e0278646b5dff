use {
  alert_view::AlertView,
  anyhow::Context,
  api_error::ApiError,
  app::App,
  arguments::Arguments,
  chrono::NaiveDateTime,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::{Comment, WriteComment},
  comment_form::CommentForm,
  comment_store::{CommentStore, CommentsDisplay},
  confirm_view::ConfirmView,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  detail_view::DetailView,
  effect::Effect,
  env_logger::{Env, Target},
  event::Event,
  help_view::HelpView,
  list_view::ListView,
  log::{debug, info, warn},
  mode::Mode,
  post::Post,
  post_store::PostStore,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  reqwest::{Method, StatusCode},
  rs_data::RsData,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet, VecDeque},
    fs::File,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  utils::{centered_area, format_timestamp, wrap_text},
};

mod alert_view;
mod api_error;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_form;
mod comment_store;
mod confirm_view;
mod detail_view;
mod effect;
mod event;
mod help_view;
mod list_view;
mod mode;
mod post;
mod post_store;
mod rs_data;
mod state;
mod utils;

const LIST_STATUS: &str =
  "↑/k up • ↓/j down • enter open • r reload • q/esc quit • ? help";

const DETAIL_STATUS: &str = "↑/k ↓/j select • c comment • x delete comment • d delete post • e edit • esc back • ? help";

const COMMENT_INPUT_STATUS: &str = "type your comment • enter submit • esc stop";

const ALERT_TITLE: &str = "Notice";
const ALERT_HINT: &str = "Press enter to continue";

const CONFIRM_TITLE: &str = "Confirm";
const CONFIRM_HINT: &str = "y/enter yes • n/esc no";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const POSTS_TITLE: &str = "Posts";
const POST_TITLE: &str = "Post";
const FORM_TITLE: &str = "Write comment";
const COMMENTS_TITLE: &str = "Comments";

const POST_CONTROLS: &str = "d delete • e edit";
const COMMENT_PLACEHOLDER: &str = "Press c to write a comment";

const LOADING_POSTS: &str = "Loading posts...";
const LOADING_POST: &str = "Loading post...";
const LOADING_COMMENTS: &str = "Loading comments...";

const NO_POSTS: &str = "No posts yet.";
const NO_COMMENTS: &str = "No comments yet.";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Posts:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first item
  end     jump to last item
  enter   open the selected post
  r       reload the list
  q       quit
  esc     quit from the list

Post:
  ↑ / k   select previous comment
  ↓ / j   select next comment
  c       write a comment (enter submits, esc stops)
  x       delete the selected comment
  d       delete this post
  e       edit this post in your browser
  esc     return to the list
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(path: &Path) -> Result {
  let file = File::create(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  env_logger::Builder::from_env(Env::default().default_filter_or("info"))
    .target(Target::Pipe(Box::new(file)))
    .init();

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  if let Some(path) = &arguments.log_file {
    initialize_logging(path)?;
  }

  info!("using api at {}", arguments.api_url);

  let client = Client::new(&arguments.api_url);

  let state = State::new(arguments.web_url);

  let mut terminal =
    initialize_terminal().context("could not initialize terminal")?;

  let mut app = App::new(client, state);

  let result = app.run(&mut terminal, arguments.post);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
