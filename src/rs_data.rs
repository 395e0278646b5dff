use super::*;

/// Envelope returned by the mutation endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RsData<T> {
  pub(crate) data: Option<T>,
  pub(crate) msg: String,
  pub(crate) result_code: Option<String>,
}

impl<T> RsData<T> {
  /// Result codes look like `"200-1"`; a numeric prefix of 400 or more marks
  /// a failure even when the HTTP status was a success.
  pub(crate) fn into_result(self) -> Result<Self, ApiError> {
    let status = self
      .result_code
      .as_deref()
      .and_then(|code| code.split('-').next())
      .and_then(|prefix| prefix.parse::<u16>().ok());

    match status {
      Some(status) if status >= 400 => Err(ApiError::Application {
        msg: self.msg,
        result_code: self.result_code.unwrap_or_default(),
      }),
      _ => Ok(self),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(input: &str) -> RsData<Value> {
    serde_json::from_str(input).unwrap()
  }

  #[test]
  fn message_only_envelope_is_success() {
    let data = parse(r#"{"msg": "deleted"}"#).into_result().unwrap();

    assert_eq!(data.msg, "deleted");
    assert!(data.data.is_none());
  }

  #[test]
  fn success_result_code_passes_through() {
    let data = parse(r#"{"resultCode": "201-1", "msg": "ok", "data": 1}"#)
      .into_result()
      .unwrap();

    assert_eq!(data.data, Some(Value::from(1)));
  }

  #[test]
  fn failure_result_code_is_an_application_error() {
    let error = parse(r#"{"resultCode": "403-1", "msg": "not yours"}"#)
      .into_result()
      .unwrap_err();

    assert_eq!(error.to_string(), "403-1 : not yours");
  }

  #[test]
  fn unparseable_result_code_is_not_a_failure() {
    assert!(
      parse(r#"{"resultCode": "S-1", "msg": "fine"}"#)
        .into_result()
        .is_ok()
    );
  }
}
