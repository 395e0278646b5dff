use super::*;

/// Holds the post shown by a detail screen. The post stays `None` until the
/// initial load succeeds; a failed load leaves it `None`.
pub(crate) struct PostStore {
  pending_delete: Option<u64>,
  pending_load: Option<u64>,
  post: Option<Post>,
  post_id: u64,
}

impl PostStore {
  pub(crate) fn delete(&mut self, request_id: u64) -> Effect {
    self.pending_delete = Some(request_id);

    Effect::DeletePost {
      post_id: self.post_id,
      request_id,
    }
  }

  /// Local state is left alone on success; the caller navigates away.
  pub(crate) fn finish_delete(
    &mut self,
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  ) -> Option<Result<RsData<Value>, ApiError>> {
    if self.pending_delete != Some(request_id) {
      return None;
    }

    self.pending_delete = None;

    Some(result)
  }

  pub(crate) fn finish_load(
    &mut self,
    request_id: u64,
    result: Result<Post, ApiError>,
  ) -> Option<Result<(), ApiError>> {
    if self.pending_load != Some(request_id) {
      return None;
    }

    self.pending_load = None;

    Some(result.map(|post| {
      self.post = Some(post);
    }))
  }

  pub(crate) fn is_deleting(&self) -> bool {
    self.pending_delete.is_some()
  }

  pub(crate) fn load(&mut self, request_id: u64) -> Effect {
    self.pending_load = Some(request_id);

    Effect::FetchPost {
      post_id: self.post_id,
      request_id,
    }
  }

  pub(crate) fn new(post_id: u64) -> Self {
    Self {
      pending_delete: None,
      pending_load: None,
      post: None,
      post_id,
    }
  }

  pub(crate) fn post(&self) -> Option<&Post> {
    self.post.as_ref()
  }

  pub(crate) fn post_id(&self) -> u64 {
    self.post_id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_post() -> Post {
    Post {
      content: Some("body".to_string()),
      id: 4,
      title: "Title".to_string(),
    }
  }

  fn failure() -> ApiError {
    ApiError::Application {
      msg: "missing".to_string(),
      result_code: "404-1".to_string(),
    }
  }

  #[test]
  fn load_requests_the_stored_post() {
    let mut store = PostStore::new(4);

    match store.load(1) {
      Effect::FetchPost {
        post_id,
        request_id,
      } => {
        assert_eq!(post_id, 4);
        assert_eq!(request_id, 1);
      }
      _ => panic!("unexpected effect variant"),
    }

    assert!(store.post().is_none());
  }

  #[test]
  fn successful_load_populates_post() {
    let mut store = PostStore::new(4);
    store.load(1);

    assert!(matches!(store.finish_load(1, Ok(sample_post())), Some(Ok(()))));
    assert_eq!(store.post(), Some(&sample_post()));
  }

  #[test]
  fn failed_load_stays_unloaded() {
    let mut store = PostStore::new(4);
    store.load(1);

    assert!(matches!(store.finish_load(1, Err(failure())), Some(Err(_))));
    assert!(store.post().is_none());
  }

  #[test]
  fn unexpected_responses_are_ignored() {
    let mut store = PostStore::new(4);
    store.load(1);

    assert!(store.finish_load(2, Ok(sample_post())).is_none());
    assert!(store.post().is_none());

    assert!(store.finish_load(1, Ok(sample_post())).is_some());
    assert!(store.finish_load(1, Ok(sample_post())).is_none());
  }

  #[test]
  fn delete_reports_outcome_without_touching_post() {
    let mut store = PostStore::new(4);
    store.load(1);
    store.finish_load(1, Ok(sample_post()));

    assert!(matches!(
      store.delete(2),
      Effect::DeletePost {
        post_id: 4,
        request_id: 2
      }
    ));

    assert!(store.is_deleting());

    let outcome = store.finish_delete(
      2,
      Ok(RsData {
        data: None,
        msg: "deleted".to_string(),
        result_code: None,
      }),
    );

    assert_eq!(outcome.unwrap().unwrap().msg, "deleted");
    assert!(!store.is_deleting());
    assert_eq!(store.post(), Some(&sample_post()));
  }
}
