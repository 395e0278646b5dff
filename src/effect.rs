#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  DeleteComment {
    comment_id: u64,
    post_id: u64,
    request_id: u64,
  },
  DeletePost {
    post_id: u64,
    request_id: u64,
  },
  FetchComments {
    post_id: u64,
    request_id: u64,
  },
  FetchPost {
    post_id: u64,
    request_id: u64,
  },
  FetchPosts {
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
  WriteComment {
    content: String,
    post_id: u64,
    request_id: u64,
  },
}
