use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(
    comment: &Comment,
    available_width: u16,
    deleting: bool,
  ) -> ListItem {
    let prefix_width = BASE_INDENT.chars().count();
    let wrap_width =
      usize::from(available_width).saturating_sub(prefix_width).max(1);

    let mut lines = wrap_text(&comment.header(), wrap_width)
      .into_iter()
      .map(|line| {
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(line, Style::default().fg(Color::White)),
        ])
      })
      .collect::<Vec<_>>();

    let detail = if deleting {
      Some("deleting...".to_string())
    } else {
      comment.detail()
    };

    if let Some(detail) = detail {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn draw(state: &mut State, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([Constraint::Min(0), Constraint::Length(1)])
      .split(frame.area());

    let (offset, list_height) = match state.mode_mut() {
      Mode::List(posts) => Self::draw_list(posts.as_ref(), frame, layout[0]),
      Mode::Detail(view) => Self::draw_detail(view, frame, layout[0]),
    };

    state.set_list_height(list_height);

    if let Some(offset) = offset {
      state.mode_mut().set_offset(offset);
    }

    let status = Paragraph::new(state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[1]);

    state.help().draw(frame);

    if let Some(confirm) = state.confirm_view() {
      confirm.draw(frame);
    }

    state.alerts().draw(frame);
  }

  fn draw_detail(
    view: &DetailView,
    frame: &mut Frame,
    area: Rect,
  ) -> (Option<usize>, usize) {
    let sections = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Min(0),
      ])
      .split(area);

    let post_block = Block::default().title(POST_TITLE).borders(Borders::ALL);

    let post = match view.post.post() {
      None => Paragraph::new(LOADING_POST),
      Some(post) => {
        let mut lines = vec![
          Line::from(vec![
            Span::styled(
              format!("#{} ", post.id),
              Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
              post.title.clone(),
              Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            ),
          ]),
          Line::from(""),
        ];

        lines.extend(
          post
            .content
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(|line| Line::from(line.to_string())),
        );

        let controls = if view.post.is_deleting() {
          "deleting..."
        } else {
          POST_CONTROLS
        };

        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
          controls,
          Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).wrap(Wrap { trim: false })
      }
    };

    frame.render_widget(post.block(post_block), sections[0]);

    let form = &view.form;

    let form_block = Block::default()
      .title(format!(
        "{FORM_TITLE} ({}/{})",
        form.char_count(),
        CommentForm::max_chars()
      ))
      .borders(Borders::ALL)
      .border_style(if form.is_editing() {
        Style::default().fg(Color::Cyan)
      } else {
        Style::default()
      });

    let form_text = if form.is_editing() {
      Line::from(format!("{}▏", form.buffer()))
    } else if form.buffer().is_empty() {
      Line::from(Span::styled(
        COMMENT_PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
      ))
    } else {
      Line::from(form.buffer().to_string())
    };

    frame.render_widget(
      Paragraph::new(form_text)
        .block(form_block)
        .wrap(Wrap { trim: false }),
      sections[1],
    );

    let comments_block =
      Block::default().title(COMMENTS_TITLE).borders(Borders::ALL);

    let list_area = sections[2];
    let list_height = usize::from(list_area.height.saturating_sub(2));

    let comments = match view.comments.display() {
      CommentsDisplay::Loading => {
        frame.render_widget(
          Paragraph::new(LOADING_COMMENTS).block(comments_block),
          list_area,
        );

        return (None, list_height);
      }
      CommentsDisplay::Empty => {
        frame.render_widget(
          Paragraph::new(NO_COMMENTS).block(comments_block),
          list_area,
        );

        return (None, list_height);
      }
      CommentsDisplay::Populated(comments) => comments,
    };

    let width = list_area.width.saturating_sub(2);

    let items = comments
      .items()
      .iter()
      .map(|comment| {
        Self::comment_list_item(
          comment,
          width,
          view.comments.is_deleting(comment.id),
        )
      })
      .collect::<Vec<_>>();

    let mut list_state = ListState::default()
      .with_selected(comments.selected_index())
      .with_offset(comments.offset());

    let list = List::new(items)
      .block(comments_block)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, list_area, &mut list_state);

    (Some(list_state.offset()), list_height)
  }

  fn draw_list(
    posts: Option<&ListView<Post>>,
    frame: &mut Frame,
    area: Rect,
  ) -> (Option<usize>, usize) {
    let block = Block::default().title(POSTS_TITLE).borders(Borders::ALL);

    let list_height = usize::from(area.height.saturating_sub(2));

    let posts = match posts {
      None => {
        frame.render_widget(Paragraph::new(LOADING_POSTS).block(block), area);
        return (None, list_height);
      }
      Some(posts) if posts.is_empty() => {
        frame.render_widget(Paragraph::new(NO_POSTS).block(block), area);
        return (None, list_height);
      }
      Some(posts) => posts,
    };

    let items = posts
      .items()
      .iter()
      .map(|post| {
        ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            format!("#{:<5}", post.id),
            Style::default().fg(Color::DarkGray),
          ),
          Span::styled(post.title.clone(), Style::default().fg(Color::White)),
        ]))
      })
      .collect::<Vec<_>>();

    let mut list_state = ListState::default()
      .with_selected(posts.selected_index())
      .with_offset(posts.offset());

    let list = List::new(items)
      .block(block)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    (Some(list_state.offset()), list_height)
  }

  fn execute_effect(&mut self, effect: Effect) {
    let client = self.client.clone();

    match effect {
      Effect::FetchPosts { request_id } => self.spawn(async move {
        Event::Posts {
          request_id,
          result: client.list_posts().await,
        }
      }),
      Effect::FetchPost {
        post_id,
        request_id,
      } => self.spawn(async move {
        Event::Post {
          request_id,
          result: client.fetch_post(post_id).await,
        }
      }),
      Effect::DeletePost {
        post_id,
        request_id,
      } => self.spawn(async move {
        Event::PostDeleted {
          request_id,
          result: client.delete_post(post_id).await,
        }
      }),
      Effect::FetchComments {
        post_id,
        request_id,
      } => self.spawn(async move {
        Event::Comments {
          request_id,
          result: client.fetch_comments(post_id).await,
        }
      }),
      Effect::WriteComment {
        content,
        post_id,
        request_id,
      } => self.spawn(async move {
        Event::CommentWritten {
          request_id,
          result: client.write_comment(post_id, &content).await,
        }
      }),
      Effect::DeleteComment {
        comment_id,
        post_id,
        request_id,
      } => self.spawn(async move {
        Event::CommentDeleted {
          request_id,
          result: client.delete_comment(post_id, comment_id).await,
        }
      }),
      Effect::OpenUrl { url } => {
        if let Err(error) = webbrowser::open(&url) {
          warn!("could not open {url}: {error}");
          self.state.alert(format!("Could not open link: {error}"));
        } else {
          info!("opened {url}");
        }
      }
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    initial_post: Option<u64>,
  ) -> Result {
    for effect in self.state.mount(initial_post) {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| Self::draw(&mut self.state, frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.alert_is_visible() {
        AlertView::handle_key(key)
      } else if let Some(command) = self.state.confirm_command(key) {
        command
      } else if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.comment_input_command(key) {
        command
      } else {
        self.state.mode_mut().handle_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  /// Runs `task` on the runtime and feeds its event back to the UI loop. A
  /// send error means the loop has exited and nobody is left to notify.
  fn spawn<F>(&self, task: F)
  where
    F: Future<Output = Event> + Send + 'static,
  {
    let sender = self.event_tx.clone();

    self.handle.spawn(async move {
      let _ = sender.send(task.await);
    });
  }
}
