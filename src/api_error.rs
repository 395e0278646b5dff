use super::*;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
  #[error("{result_code} : {msg}")]
  Application { msg: String, result_code: String },
  #[error("could not read server response: {0}")]
  Decode(#[source] serde_json::Error),
  #[error("could not reach the server: {0}")]
  Network(#[source] reqwest::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FailureBody {
  msg: Option<String>,
  result_code: Option<String>,
}

impl ApiError {
  pub(crate) fn from_failure(status: StatusCode, body: &[u8]) -> Self {
    let body = serde_json::from_slice::<FailureBody>(body).ok();

    let (result_code, msg) = body
      .map(|body| (body.result_code, body.msg))
      .unwrap_or_default();

    Self::Application {
      msg: msg.unwrap_or_else(|| {
        status
          .canonical_reason()
          .unwrap_or("request failed")
          .to_string()
      }),
      result_code: result_code.unwrap_or_else(|| status.as_u16().to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn failure_body_supplies_code_and_message() {
    let error = ApiError::from_failure(
      StatusCode::NOT_FOUND,
      br#"{"resultCode": "404-1", "msg": "Post 9 does not exist."}"#,
    );

    assert_eq!(error.to_string(), "404-1 : Post 9 does not exist.");
  }

  #[test]
  fn empty_body_falls_back_to_status() {
    let error = ApiError::from_failure(StatusCode::INTERNAL_SERVER_ERROR, b"");

    assert_eq!(error.to_string(), "500 : Internal Server Error");
  }

  #[test]
  fn partial_body_fills_missing_fields_from_status() {
    let error = ApiError::from_failure(
      StatusCode::BAD_REQUEST,
      br#"{"msg": "content is required"}"#,
    );

    match error {
      ApiError::Application { msg, result_code } => {
        assert_eq!(result_code, "400");
        assert_eq!(msg, "content is required");
      }
      other => panic!("unexpected error: {other}"),
    }
  }
}
