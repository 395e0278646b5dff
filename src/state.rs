use super::*;

pub(crate) struct State {
  alerts: AlertView,
  confirm: Option<ConfirmView>,
  help: HelpView,
  last_opened: Option<u64>,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_posts: Option<u64>,
  web_base_url: String,
}

impl State {
  pub(crate) fn alert(&mut self, message: String) {
    self.alerts.push(message);
  }

  pub(crate) fn alert_is_visible(&self) -> bool {
    self.alerts.is_visible()
  }

  pub(crate) fn alerts(&self) -> &AlertView {
    &self.alerts
  }

  fn allocate_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    request_id
  }

  fn cancel_comment(&mut self) {
    if let Mode::Detail(view) = &mut self.mode {
      view.form.cancel();
      self.set_message(DETAIL_STATUS);
    }
  }

  fn close_post(&mut self) {
    if let Mode::Detail(view) = &self.mode {
      self.last_opened = Some(view.post_id());
      self.open_list();
    }
  }

  pub(crate) fn comment_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    let Mode::Detail(view) = &mut self.mode else {
      return None;
    };

    if !view.form.is_editing() {
      return None;
    }

    Some(match key.code {
      KeyCode::Esc => Command::CancelComment,
      KeyCode::Enter => Command::SubmitComment,
      KeyCode::Backspace => {
        view.form.pop();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if !(modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER))
        {
          view.form.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    })
  }

  fn confirm(&mut self) -> bool {
    match self.confirm.take() {
      Some(view) => self.execute(view.command()),
      None => false,
    }
  }

  pub(crate) fn confirm_command(&self, key: KeyEvent) -> Option<Command> {
    self
      .confirm
      .as_ref()
      .map(|_| ConfirmView::handle_key(key))
  }

  pub(crate) fn confirm_view(&self) -> Option<&ConfirmView> {
    self.confirm.as_ref()
  }

  fn delete_comment(&mut self, comment_id: u64) {
    let request_id = self.allocate_request_id();

    let Mode::Detail(view) = &mut self.mode else {
      return;
    };

    let effect = view.comments.delete(comment_id, request_id);

    self.pending_effects.push(effect);

    self.set_message(format!("Deleting comment {comment_id}..."));
  }

  fn delete_post(&mut self) {
    let request_id = self.allocate_request_id();

    let Mode::Detail(view) = &mut self.mode else {
      return;
    };

    let post_id = view.post_id();

    let effect = view.post.delete(request_id);

    self.pending_effects.push(effect);

    self.set_message(format!("Deleting post {post_id}..."));
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let should_exit = self.execute(command);

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn execute(&mut self, command: Command) -> bool {
    match command {
      Command::Quit => return true,
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::DismissAlert => self.alerts.dismiss(),
      Command::Confirm => return self.confirm(),
      Command::CancelConfirm => self.confirm = None,
      Command::SelectNext => self.mode.move_selection(1),
      Command::SelectPrevious => self.mode.move_selection(-1),
      Command::PageDown => {
        let jump = self.page_jump();
        self.mode.move_selection(jump);
      }
      Command::PageUp => {
        let jump = self.page_jump();
        self.mode.move_selection(-jump);
      }
      Command::SelectFirst => self.mode.select_index(0),
      Command::SelectLast => self.mode.select_index(usize::MAX),
      Command::OpenPost => self.open_selected_post(),
      Command::ClosePost => self.close_post(),
      Command::Reload => self.reload_posts(),
      Command::RequestDeletePost => self.request_delete_post(),
      Command::DeletePost => self.delete_post(),
      Command::RequestDeleteComment => self.request_delete_comment(),
      Command::DeleteComment { comment_id } => self.delete_comment(comment_id),
      Command::StartComment => self.start_comment(),
      Command::CancelComment => self.cancel_comment(),
      Command::SubmitComment => self.submit_comment(),
      Command::OpenEdit => self.open_edit(),
      Command::None => {}
    }

    false
  }

  fn finish_comment_deleted(
    &mut self,
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  ) {
    let Mode::Detail(view) = &mut self.mode else {
      debug!("ignoring comment deletion {request_id} for a closed post");
      return;
    };

    let Some(outcome) = view.comments.finish_delete(request_id, result) else {
      debug!("ignoring unexpected comment deletion {request_id}");
      return;
    };

    self.set_message(DETAIL_STATUS);

    match outcome {
      Ok(data) => {
        info!("comment deleted: {}", data.msg);
        self.alert(data.msg);
      }
      Err(error) => {
        warn!("could not delete comment: {error}");
        self.alert(error.to_string());
      }
    }
  }

  fn finish_comment_written(
    &mut self,
    request_id: u64,
    result: Result<RsData<Comment>, ApiError>,
  ) {
    let Mode::Detail(view) = &mut self.mode else {
      debug!("ignoring comment write {request_id} for a closed post");
      return;
    };

    let Some(outcome) = view.comments.finish_write(request_id, result) else {
      debug!("ignoring unexpected comment write {request_id}");
      return;
    };

    match outcome {
      Ok(data) => {
        view.form.clear();
        info!("comment written: {}", data.msg);
        self.set_message(DETAIL_STATUS);
        self.alert(data.msg);
      }
      Err(error) => {
        warn!("could not write comment: {error}");
        self.set_message(DETAIL_STATUS);
        self.alert(error.to_string());
      }
    }
  }

  fn finish_comments(
    &mut self,
    request_id: u64,
    result: Result<Vec<Comment>, ApiError>,
  ) {
    let Mode::Detail(view) = &mut self.mode else {
      debug!("ignoring comments {request_id} for a closed post");
      return;
    };

    let post_id = view.post_id();

    match view.comments.finish_load(request_id, result) {
      None => debug!("ignoring unexpected comments {request_id}"),
      Some(Ok(())) => {}
      Some(Err(error)) => {
        warn!("could not load comments for post {post_id}: {error}");
        self.alert(error.to_string());
      }
    }
  }

  fn finish_post(&mut self, request_id: u64, result: Result<Post, ApiError>) {
    let Mode::Detail(view) = &mut self.mode else {
      debug!("ignoring post {request_id} for a closed view");
      return;
    };

    let post_id = view.post_id();

    match view.post.finish_load(request_id, result) {
      None => debug!("ignoring unexpected post {request_id}"),
      Some(Ok(())) => {}
      Some(Err(error)) => {
        warn!("could not load post {post_id}: {error}");
        self.alert(error.to_string());
      }
    }
  }

  fn finish_post_deleted(
    &mut self,
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  ) {
    let Mode::Detail(view) = &mut self.mode else {
      debug!("ignoring post deletion {request_id} for a closed view");
      return;
    };

    let post_id = view.post_id();

    let Some(outcome) = view.post.finish_delete(request_id, result) else {
      debug!("ignoring unexpected post deletion {request_id}");
      return;
    };

    match outcome {
      Ok(data) => {
        info!("post {post_id} deleted: {}", data.msg);
        self.alert(data.msg);
        self.last_opened = None;
        self.open_list();
      }
      Err(error) => {
        warn!("could not delete post {post_id}: {error}");
        self.set_message(DETAIL_STATUS);
        self.alert(error.to_string());
      }
    }
  }

  fn finish_posts(
    &mut self,
    request_id: u64,
    result: Result<Vec<Post>, ApiError>,
  ) {
    if self.pending_posts != Some(request_id) {
      debug!("ignoring stale post list {request_id}");
      return;
    }

    self.pending_posts = None;

    let Mode::List(slot) = &mut self.mode else {
      return;
    };

    match result {
      Ok(posts) => {
        let mut view = ListView::new(posts);

        if let Some(post_id) = self.last_opened.take()
          && let Some(index) = view.position(|post| post.id == post_id)
        {
          view.set_selected(index);
        }

        *slot = Some(view);
      }
      Err(error) => {
        warn!("could not load posts: {error}");
        self.alert(error.to_string());
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Posts { request_id, result } => {
        self.finish_posts(request_id, result);
      }
      Event::Post { request_id, result } => {
        self.finish_post(request_id, result);
      }
      Event::PostDeleted { request_id, result } => {
        self.finish_post_deleted(request_id, result);
      }
      Event::Comments { request_id, result } => {
        self.finish_comments(request_id, result);
      }
      Event::CommentWritten { request_id, result } => {
        self.finish_comment_written(request_id, result);
      }
      Event::CommentDeleted { request_id, result } => {
        self.finish_comment_deleted(request_id, result);
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn load_posts(&mut self) {
    let request_id = self.allocate_request_id();

    self.pending_posts = Some(request_id);

    self.pending_effects.push(Effect::FetchPosts { request_id });
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  /// Issues the requests of the first screen: the given post, or the list.
  pub(crate) fn mount(&mut self, initial_post: Option<u64>) -> Vec<Effect> {
    match initial_post {
      Some(post_id) => self.open_post(post_id),
      None => self.load_posts(),
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn new(web_base_url: String) -> Self {
    Self {
      alerts: AlertView::default(),
      confirm: None,
      help: HelpView::new(),
      last_opened: None,
      list_height: 0,
      message: LIST_STATUS.into(),
      mode: Mode::List(None),
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_posts: None,
      web_base_url,
    }
  }

  fn open_edit(&mut self) {
    if let Mode::Detail(view) = &self.mode
      && let Some(post) = view.post.post()
    {
      self.pending_effects.push(Effect::OpenUrl {
        url: post.edit_url(&self.web_base_url),
      });
    }
  }

  fn open_list(&mut self) {
    self.mode = Mode::List(None);
    self.set_message(LIST_STATUS);
    self.load_posts();
  }

  fn open_post(&mut self, post_id: u64) {
    self.pending_posts = None;

    let mut view = DetailView::new(post_id);

    let post_request = self.allocate_request_id();
    let comments_request = self.allocate_request_id();

    self.pending_effects.push(view.post.load(post_request));
    self.pending_effects.push(view.comments.load(comments_request));

    self.mode = Mode::Detail(view);

    self.set_message(DETAIL_STATUS);
  }

  fn open_selected_post(&mut self) {
    let Mode::List(Some(posts)) = &self.mode else {
      return;
    };

    if let Some(post_id) = posts.selected_item().map(|post| post.id) {
      self.open_post(post_id);
    }
  }

  fn page_jump(&self) -> isize {
    isize::try_from(self.list_height.saturating_sub(1).max(1))
      .unwrap_or(isize::MAX)
  }

  fn reload_posts(&mut self) {
    let Mode::List(posts) = &self.mode else {
      return;
    };

    self.last_opened = posts
      .as_ref()
      .and_then(ListView::selected_item)
      .map(|post| post.id);

    self.load_posts();
  }

  fn request_delete_comment(&mut self) {
    let Mode::Detail(view) = &self.mode else {
      return;
    };

    let Some(comment_id) = view.comments.selected().map(|comment| comment.id)
    else {
      return;
    };

    if view.comments.is_deleting(comment_id) {
      return;
    }

    self.confirm = Some(ConfirmView::new(
      format!("Delete comment {comment_id}?"),
      Command::DeleteComment { comment_id },
    ));
  }

  fn request_delete_post(&mut self) {
    let Mode::Detail(view) = &self.mode else {
      return;
    };

    let Some(post_id) = view.post.post().map(|post| post.id) else {
      return;
    };

    if view.post.is_deleting() {
      return;
    }

    self.confirm = Some(ConfirmView::new(
      format!("Delete post {post_id}?"),
      Command::DeletePost,
    ));
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  fn set_message(&mut self, message: impl Into<String>) {
    if !self.help.is_visible() {
      self.message = message.into();
    }
  }

  fn start_comment(&mut self) {
    if let Mode::Detail(view) = &mut self.mode {
      view.form.start();
      self.set_message(COMMENT_INPUT_STATUS);
    }
  }

  fn submit_comment(&mut self) {
    let request_id = self.allocate_request_id();

    let Mode::Detail(view) = &mut self.mode else {
      return;
    };

    match view.form.submit() {
      Ok(content) => {
        let effect = view.comments.write(content, request_id);
        self.pending_effects.push(effect);
        self.set_message("Posting comment...");
      }
      Err(error) => self.alert(error.to_string()),
    }
  }
}
