use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const API_PREFIX: &str = "/api/v1";

  pub(crate) async fn delete_comment(
    &self,
    post_id: u64,
    comment_id: u64,
  ) -> Result<RsData<Value>, ApiError> {
    self
      .request::<RsData<Value>, ()>(
        Method::DELETE,
        &format!("/posts/{post_id}/comments/{comment_id}"),
        None,
      )
      .await?
      .into_result()
  }

  pub(crate) async fn delete_post(
    &self,
    post_id: u64,
  ) -> Result<RsData<Value>, ApiError> {
    self
      .request::<RsData<Value>, ()>(
        Method::DELETE,
        &format!("/posts/{post_id}"),
        None,
      )
      .await?
      .into_result()
  }

  pub(crate) async fn fetch_comments(
    &self,
    post_id: u64,
  ) -> Result<Vec<Comment>, ApiError> {
    self
      .request::<_, ()>(
        Method::GET,
        &format!("/posts/{post_id}/comments"),
        None,
      )
      .await
  }

  pub(crate) async fn fetch_post(&self, post_id: u64) -> Result<Post, ApiError> {
    self
      .request::<_, ()>(Method::GET, &format!("/posts/{post_id}"), None)
      .await
  }

  pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
    self.request::<_, ()>(Method::GET, "/posts", None).await
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  async fn request<T, B>(
    &self,
    method: Method,
    path: &str,
    body: Option<&B>,
  ) -> Result<T, ApiError>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    let url = format!("{}{}{path}", self.base_url, Self::API_PREFIX);

    debug!("{method} {url}");

    let mut request = self.client.request(method.clone(), &url);

    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(|error| {
      warn!("{method} {url} failed: {error}");
      ApiError::Network(error)
    })?;

    let status = response.status();

    let bytes = response.bytes().await.map_err(ApiError::Network)?;

    if !status.is_success() {
      let error = ApiError::from_failure(status, &bytes);
      warn!("{method} {url} returned {status}: {error}");
      return Err(error);
    }

    serde_json::from_slice(&bytes).map_err(ApiError::Decode)
  }

  pub(crate) async fn write_comment(
    &self,
    post_id: u64,
    content: &str,
  ) -> Result<RsData<Comment>, ApiError> {
    self
      .request::<RsData<Comment>, _>(
        Method::POST,
        &format!("/posts/{post_id}/comments"),
        Some(&WriteComment { content }),
      )
      .await?
      .into_result()
  }
}
