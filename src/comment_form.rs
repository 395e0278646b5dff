use super::*;

const COMMENT_MAX_CHARS: usize = 100;
const COMMENT_MIN_CHARS: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ValidationError {
  #[error("Please enter a comment.")]
  Empty,
  #[error("Comments must be at least {min} characters.", min = COMMENT_MIN_CHARS)]
  TooShort,
}

#[derive(Default)]
pub(crate) struct CommentForm {
  buffer: String,
  editing: bool,
}

impl CommentForm {
  pub(crate) fn buffer(&self) -> &str {
    &self.buffer
  }

  pub(crate) fn cancel(&mut self) {
    self.editing = false;
  }

  pub(crate) fn char_count(&self) -> usize {
    self.buffer.chars().count()
  }

  pub(crate) fn clear(&mut self) {
    self.buffer.clear();
  }

  pub(crate) fn is_editing(&self) -> bool {
    self.editing
  }

  pub(crate) fn max_chars() -> usize {
    COMMENT_MAX_CHARS
  }

  pub(crate) fn pop(&mut self) {
    self.buffer.pop();
  }

  /// Returns `false` when the form is already full.
  pub(crate) fn push(&mut self, ch: char) -> bool {
    if self.char_count() >= COMMENT_MAX_CHARS {
      return false;
    }

    self.buffer.push(ch);

    true
  }

  pub(crate) fn start(&mut self) {
    self.editing = true;
  }

  /// Trims the buffer in place and returns the content to send. The buffer is
  /// kept until the write succeeds.
  pub(crate) fn submit(&mut self) -> Result<String, ValidationError> {
    let trimmed = self.buffer.trim().to_string();

    self.buffer.clone_from(&trimmed);

    let content = validate_comment(&trimmed)?;

    self.editing = false;

    Ok(content.to_string())
  }
}

pub(crate) fn validate_comment(content: &str) -> Result<&str, ValidationError> {
  let content = content.trim();

  match content.chars().count() {
    0 => Err(ValidationError::Empty),
    count if count < COMMENT_MIN_CHARS => Err(ValidationError::TooShort),
    _ => Ok(content),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form_with(text: &str) -> CommentForm {
    let mut form = CommentForm::default();
    form.start();

    for ch in text.chars() {
      form.push(ch);
    }

    form
  }

  #[test]
  fn two_characters_is_the_minimum() {
    assert_eq!(validate_comment("ab"), Ok("ab"));
    assert_eq!(validate_comment("a"), Err(ValidationError::TooShort));
  }

  #[test]
  fn whitespace_only_is_empty() {
    assert_eq!(validate_comment("  "), Err(ValidationError::Empty));
    assert_eq!(validate_comment(""), Err(ValidationError::Empty));
  }

  #[test]
  fn length_is_measured_after_trimming() {
    assert_eq!(validate_comment(" a \n"), Err(ValidationError::TooShort));
    assert_eq!(validate_comment("  댓글  "), Ok("댓글"));
  }

  #[test]
  fn submit_trims_buffer_and_stops_editing() {
    let mut form = form_with("  hello  ");

    assert_eq!(form.submit(), Ok("hello".to_string()));
    assert_eq!(form.buffer(), "hello");
    assert!(!form.is_editing());
  }

  #[test]
  fn rejected_submit_keeps_editing() {
    let mut form = form_with(" a ");

    assert_eq!(form.submit(), Err(ValidationError::TooShort));
    assert_eq!(form.buffer(), "a");
    assert!(form.is_editing());
  }

  #[test]
  fn push_stops_at_maximum_length() {
    let mut form = form_with(&"x".repeat(CommentForm::max_chars()));

    assert!(!form.push('y'));
    assert_eq!(form.char_count(), CommentForm::max_chars());
  }

  #[test]
  fn validation_messages_are_user_facing() {
    assert_eq!(ValidationError::Empty.to_string(), "Please enter a comment.");

    assert_eq!(
      ValidationError::TooShort.to_string(),
      "Comments must be at least 2 characters."
    );
  }
}
