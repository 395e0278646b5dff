use super::*;

/// One mounted post detail screen. Dropping it abandons any responses still
/// in flight for its stores.
pub(crate) struct DetailView {
  pub(crate) comments: CommentStore,
  pub(crate) form: CommentForm,
  pub(crate) post: PostStore,
}

impl DetailView {
  pub(crate) fn new(post_id: u64) -> Self {
    Self {
      comments: CommentStore::new(post_id),
      form: CommentForm::default(),
      post: PostStore::new(post_id),
    }
  }

  pub(crate) fn post_id(&self) -> u64 {
    self.post.post_id()
  }
}
