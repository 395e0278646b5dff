use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Post {
  pub(crate) content: Option<String>,
  pub(crate) id: u64,
  pub(crate) title: String,
}

impl Post {
  pub(crate) fn edit_url(&self, web_base_url: &str) -> String {
    format!("{}/posts/{}/edit", web_base_url.trim_end_matches('/'), self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_deserializes_without_content() {
    let post = serde_json::from_str::<Post>(r#"{"id": 3, "title": "Hello"}"#)
      .unwrap();

    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, None);
  }

  #[test]
  fn edit_url_ignores_trailing_slash() {
    let post = Post {
      content: None,
      id: 12,
      title: "t".to_string(),
    };

    assert_eq!(
      post.edit_url("http://localhost:3000/"),
      "http://localhost:3000/posts/12/edit"
    );
  }
}
