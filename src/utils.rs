use super::*;

/// Centers a box sized to fit `text` plus a border inside `area`.
pub(crate) fn centered_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text.lines().fold((0usize, 0usize), |(count, width), line| {
      (count.saturating_add(1), width.max(line.chars().count()))
    });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(4)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn format_timestamp(timestamp: NaiveDateTime) -> String {
  timestamp.format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn format_timestamp_drops_seconds() {
    let timestamp = NaiveDateTime::parse_from_str(
      "2025-01-02 03:04:05",
      "%Y-%m-%d %H:%M:%S",
    )
    .unwrap();

    assert_eq!(format_timestamp(timestamp), "2025-01-02 03:04");
  }

  #[test]
  fn centered_area_fits_text_inside_bounds() {
    let area = centered_area(Rect::new(0, 0, 40, 10), "hello\nworld!");

    assert_eq!(area, Rect::new(15, 3, 10, 4));
  }

  #[test]
  fn centered_area_is_clamped_to_small_screens() {
    let area = centered_area(Rect::new(0, 0, 6, 3), "a much longer line");

    assert!(area.width <= 6);
    assert!(area.height <= 3);
  }
}
