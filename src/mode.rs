use super::*;

pub(crate) enum Mode {
  Detail(DetailView),
  List(Option<ListView<Post>>),
}

impl Mode {
  pub(crate) fn handle_key(&self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    let shared = match key.code {
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      _ => Command::None,
    };

    if shared != Command::None {
      return shared;
    }

    match self {
      Mode::List(_) => match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Enter => Command::OpenPost,
        KeyCode::Char('r' | 'R') => Command::Reload,
        _ => Command::None,
      },
      Mode::Detail(_) => match key.code {
        KeyCode::Esc => Command::ClosePost,
        KeyCode::Char('c' | 'i') | KeyCode::Enter => Command::StartComment,
        KeyCode::Char('x') | KeyCode::Delete => Command::RequestDeleteComment,
        KeyCode::Char('d') => Command::RequestDeletePost,
        KeyCode::Char('e') => Command::OpenEdit,
        _ => Command::None,
      },
    }
  }

  pub(crate) fn move_selection(&mut self, delta: isize) {
    match self {
      Mode::Detail(view) => {
        if let Some(comments) = view.comments.comments_mut() {
          comments.move_by(delta);
        }
      }
      Mode::List(Some(posts)) => posts.move_by(delta),
      Mode::List(None) => {}
    }
  }

  pub(crate) fn select_index(&mut self, index: usize) {
    match self {
      Mode::Detail(view) => {
        if let Some(comments) = view.comments.comments_mut() {
          comments.set_selected(index);
        }
      }
      Mode::List(Some(posts)) => posts.set_selected(index),
      Mode::List(None) => {}
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    match self {
      Mode::Detail(view) => {
        if let Some(comments) = view.comments.comments_mut() {
          comments.set_offset(offset);
        }
      }
      Mode::List(Some(posts)) => posts.set_offset(offset),
      Mode::List(None) => {}
    }
  }
}
