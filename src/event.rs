use super::*;

pub(crate) enum Event {
  CommentDeleted {
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  },
  CommentWritten {
    request_id: u64,
    result: Result<RsData<Comment>, ApiError>,
  },
  Comments {
    request_id: u64,
    result: Result<Vec<Comment>, ApiError>,
  },
  Post {
    request_id: u64,
    result: Result<Post, ApiError>,
  },
  PostDeleted {
    request_id: u64,
    result: Result<RsData<Value>, ApiError>,
  },
  Posts {
    request_id: u64,
    result: Result<Vec<Post>, ApiError>,
  },
}
