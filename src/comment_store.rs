use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PendingComment {
  Delete { comment_id: u64 },
  Load,
  Write,
}

pub(crate) enum CommentsDisplay<'a> {
  Empty,
  Loading,
  Populated(&'a ListView<Comment>),
}

/// Holds the comments of one post and reconciles them with mutation
/// responses instead of refetching.
pub(crate) struct CommentStore {
  comments: Option<ListView<Comment>>,
  pending: HashMap<u64, PendingComment>,
  post_id: u64,
}

impl CommentStore {
  pub(crate) fn comments(&self) -> Option<&ListView<Comment>> {
    self.comments.as_ref()
  }

  pub(crate) fn comments_mut(&mut self) -> Option<&mut ListView<Comment>> {
    self.comments.as_mut()
  }

  pub(crate) fn delete(&mut self, comment_id: u64, request_id: u64) -> Effect {
    self
      .pending
      .insert(request_id, PendingComment::Delete { comment_id });

    Effect::DeleteComment {
      comment_id,
      post_id: self.post_id,
      request_id,
    }
  }

  pub(crate) fn display(&self) -> CommentsDisplay {
    match &self.comments {
      None => CommentsDisplay::Loading,
      Some(view) if view.is_empty() => CommentsDisplay::Empty,
      Some(view) => CommentsDisplay::Populated(view),
    }
  }

  pub(crate) fn finish_delete(
    &mut self,
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  ) -> Option<Result<RsData<Value>, ApiError>> {
    let Some(PendingComment::Delete { comment_id }) =
      self.take_pending(request_id, |pending| {
        matches!(pending, PendingComment::Delete { .. })
      })
    else {
      return None;
    };

    if result.is_ok()
      && let Some(view) = self.comments.as_mut()
    {
      view.retain(|comment| comment.id != comment_id);
    }

    Some(result)
  }

  pub(crate) fn finish_load(
    &mut self,
    request_id: u64,
    result: Result<Vec<Comment>, ApiError>,
  ) -> Option<Result<(), ApiError>> {
    self.take_pending(request_id, |pending| *pending == PendingComment::Load)?;

    Some(result.map(|mut comments| {
      let mut seen = HashSet::new();

      comments.retain(|comment| seen.insert(comment.id));

      self.comments = Some(ListView::new(comments));
    }))
  }

  pub(crate) fn finish_write(
    &mut self,
    request_id: u64,
    result: Result<RsData<Comment>, ApiError>,
  ) -> Option<Result<RsData<Comment>, ApiError>> {
    self.take_pending(request_id, |pending| *pending == PendingComment::Write)?;

    if let Ok(data) = &result
      && let Some(comment) = &data.data
      && let Some(view) = self.comments.as_mut()
      && view.position(|existing| existing.id == comment.id).is_none()
    {
      view.push(comment.clone());
    }

    Some(result)
  }

  pub(crate) fn is_deleting(&self, comment_id: u64) -> bool {
    self
      .pending
      .values()
      .any(|pending| *pending == PendingComment::Delete { comment_id })
  }

  pub(crate) fn load(&mut self, request_id: u64) -> Effect {
    self.pending.insert(request_id, PendingComment::Load);

    Effect::FetchComments {
      post_id: self.post_id,
      request_id,
    }
  }

  pub(crate) fn new(post_id: u64) -> Self {
    Self {
      comments: None,
      pending: HashMap::new(),
      post_id,
    }
  }

  pub(crate) fn selected(&self) -> Option<&Comment> {
    self.comments().and_then(ListView::selected_item)
  }

  fn take_pending<F>(
    &mut self,
    request_id: u64,
    expected: F,
  ) -> Option<PendingComment>
  where
    F: FnOnce(&PendingComment) -> bool,
  {
    if !self.pending.get(&request_id).is_some_and(expected) {
      return None;
    }

    self.pending.remove(&request_id)
  }

  pub(crate) fn write(&mut self, content: String, request_id: u64) -> Effect {
    self.pending.insert(request_id, PendingComment::Write);

    Effect::WriteComment {
      content,
      post_id: self.post_id,
      request_id,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: u64, content: &str) -> Comment {
    Comment {
      content: content.to_string(),
      create_date: None,
      id,
      modify_date: None,
    }
  }

  fn ok<T>(msg: &str, data: Option<T>) -> Result<RsData<T>, ApiError> {
    Ok(RsData {
      data,
      msg: msg.to_string(),
      result_code: None,
    })
  }

  fn ids(store: &CommentStore) -> Vec<u64> {
    store
      .comments()
      .map(|view| view.items().iter().map(|comment| comment.id).collect())
      .unwrap_or_default()
  }

  fn loaded(comments: Vec<Comment>) -> CommentStore {
    let mut store = CommentStore::new(1);
    store.load(0);
    store.finish_load(0, Ok(comments)).unwrap().unwrap();
    store
  }

  #[test]
  fn starts_loading_and_reports_empty_after_load() {
    let mut store = CommentStore::new(1);

    assert!(matches!(store.display(), CommentsDisplay::Loading));

    store.load(0);
    store.finish_load(0, Ok(Vec::new()));

    assert!(matches!(store.display(), CommentsDisplay::Empty));
  }

  #[test]
  fn load_keeps_server_order_and_drops_duplicate_ids() {
    let store = loaded(vec![
      comment(3, "c"),
      comment(1, "a"),
      comment(3, "again"),
      comment(2, "b"),
    ]);

    assert_eq!(ids(&store), [3, 1, 2]);
    assert!(matches!(store.display(), CommentsDisplay::Populated(_)));
  }

  #[test]
  fn failed_load_stays_loading() {
    let mut store = CommentStore::new(1);
    store.load(0);

    let outcome = store.finish_load(
      0,
      Err(ApiError::Application {
        msg: "boom".to_string(),
        result_code: "500".to_string(),
      }),
    );

    assert!(matches!(outcome, Some(Err(_))));
    assert!(matches!(store.display(), CommentsDisplay::Loading));
  }

  #[test]
  fn write_appends_created_comment() {
    let mut store = loaded(vec![comment(1, "a"), comment(2, "b")]);

    match store.write("hello".to_string(), 5) {
      Effect::WriteComment {
        content,
        post_id,
        request_id,
      } => {
        assert_eq!(content, "hello");
        assert_eq!(post_id, 1);
        assert_eq!(request_id, 5);
      }
      _ => panic!("unexpected effect variant"),
    }

    let outcome = store
      .finish_write(5, ok("ok", Some(comment(7, "hello"))))
      .unwrap()
      .unwrap();

    assert_eq!(outcome.msg, "ok");
    assert_eq!(ids(&store), [1, 2, 7]);

    assert_eq!(
      store.comments().unwrap().items().last().unwrap().content,
      "hello"
    );
  }

  #[test]
  fn write_never_duplicates_an_existing_id() {
    let mut store = loaded(vec![comment(7, "hello")]);
    store.write("hello".to_string(), 5);

    store.finish_write(5, ok("ok", Some(comment(7, "hello"))));

    assert_eq!(ids(&store), [7]);
  }

  #[test]
  fn write_before_load_leaves_collection_unloaded() {
    let mut store = CommentStore::new(1);
    store.load(0);
    store.write("hello".to_string(), 1);

    assert!(store.finish_write(1, ok("ok", Some(comment(7, "hi")))).is_some());
    assert!(store.comments().is_none());
  }

  #[test]
  fn delete_removes_only_the_matching_comment() {
    let mut store = loaded(vec![comment(1, "a"), comment(2, "b"), comment(3, "c")]);

    assert!(matches!(
      store.delete(2, 9),
      Effect::DeleteComment {
        comment_id: 2,
        post_id: 1,
        request_id: 9
      }
    ));

    assert!(store.is_deleting(2));

    let outcome = store.finish_delete(9, ok("removed", None)).unwrap().unwrap();

    assert_eq!(outcome.msg, "removed");
    assert_eq!(ids(&store), [1, 3]);
    assert!(!store.is_deleting(2));

    let contents = store
      .comments()
      .unwrap()
      .items()
      .iter()
      .map(|comment| comment.content.as_str())
      .collect::<Vec<_>>();

    assert_eq!(contents, ["a", "c"]);
  }

  #[test]
  fn failed_delete_keeps_comment() {
    let mut store = loaded(vec![comment(1, "a")]);
    store.delete(1, 4);

    let outcome = store.finish_delete(
      4,
      Err(ApiError::Application {
        msg: "forbidden".to_string(),
        result_code: "403-1".to_string(),
      }),
    );

    assert!(matches!(outcome, Some(Err(_))));
    assert_eq!(ids(&store), [1]);
  }

  #[test]
  fn responses_for_other_requests_are_ignored() {
    let mut store = loaded(vec![comment(1, "a")]);
    store.delete(1, 4);

    assert!(store.finish_write(4, ok("ok", Some(comment(2, "b")))).is_none());
    assert!(store.finish_delete(5, ok("removed", None)).is_none());
    assert_eq!(ids(&store), [1]);

    assert!(store.finish_delete(4, ok("removed", None)).is_some());
    assert!(ids(&store).is_empty());
  }
}
