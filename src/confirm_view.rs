use super::*;

/// Asks before a destructive command runs. Only the confirmed command is
/// dispatched; declining drops it.
pub(crate) struct ConfirmView {
  command: Command,
  prompt: String,
}

impl ConfirmView {
  pub(crate) fn command(&self) -> Command {
    self.command
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let text = format!("{}\n\n{CONFIRM_HINT}", self.prompt());

    let area = centered_area(frame.area(), &text);

    frame.render_widget(Clear, area);

    let confirm = Paragraph::new(vec![
      Line::from(self.prompt().to_string()),
      Line::from(""),
      Line::from(Span::styled(
        CONFIRM_HINT,
        Style::default().fg(Color::DarkGray),
      )),
    ])
    .block(
      Block::default()
        .title(CONFIRM_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(confirm, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('y' | 'Y') | KeyCode::Enter => Command::Confirm,
      KeyCode::Char('n' | 'N') | KeyCode::Esc => Command::CancelConfirm,
      _ => Command::None,
    }
  }

  pub(crate) fn new(prompt: String, command: Command) -> Self {
    Self { command, prompt }
  }

  pub(crate) fn prompt(&self) -> &str {
    &self.prompt
  }
}
