use super::*;

/// Blocking notifications. Each message stays on screen until dismissed;
/// messages raised meanwhile queue up behind it.
#[derive(Default)]
pub(crate) struct AlertView {
  queue: VecDeque<String>,
}

impl AlertView {
  pub(crate) fn current(&self) -> Option<&str> {
    self.queue.front().map(String::as_str)
  }

  pub(crate) fn dismiss(&mut self) {
    self.queue.pop_front();
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let Some(message) = self.current() else {
      return;
    };

    let width = usize::from(frame.area().width.saturating_sub(8)).max(1);

    let text = wrap_text(message, width.min(60)).join("\n");

    let area = centered_area(frame.area(), &format!("{text}\n\n{ALERT_HINT}"));

    frame.render_widget(Clear, area);

    let lines = text
      .lines()
      .map(|line| Line::from(line.to_string()))
      .chain([
        Line::from(""),
        Line::from(Span::styled(
          ALERT_HINT,
          Style::default().fg(Color::DarkGray),
        )),
      ])
      .collect::<Vec<_>>();

    let alert = Paragraph::new(lines)
      .block(
        Block::default()
          .title(ALERT_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Yellow)),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(alert, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Command::DismissAlert
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    !self.queue.is_empty()
  }

  pub(crate) fn push(&mut self, message: String) {
    self.queue.push_back(message);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alerts_are_shown_in_arrival_order() {
    let mut alert = AlertView::default();
    assert!(!alert.is_visible());

    alert.push("first".to_string());
    alert.push("second".to_string());

    assert_eq!(alert.current(), Some("first"));

    alert.dismiss();
    assert_eq!(alert.current(), Some("second"));

    alert.dismiss();
    assert!(!alert.is_visible());
  }

  #[test]
  fn only_dismiss_keys_close_the_alert() {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(
      AlertView::handle_key(key(KeyCode::Enter)),
      Command::DismissAlert
    );

    assert_eq!(AlertView::handle_key(key(KeyCode::Char('q'))), Command::None);
  }
}
