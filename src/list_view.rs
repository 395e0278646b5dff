pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      offset: 0,
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let target = if delta >= 0 {
      let magnitude = usize::try_from(delta).unwrap_or(usize::MAX);
      self.selected.saturating_add(magnitude)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      self.selected.saturating_sub(magnitude)
    };

    self.set_selected(target);
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.items.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn position<P>(&self, predicate: P) -> Option<usize>
  where
    P: FnMut(&T) -> bool,
  {
    self.items.iter().position(predicate)
  }

  pub(crate) fn push(&mut self, item: T) {
    self.items.push(item);
  }

  /// Keeps the selection on the same item where possible, otherwise on the
  /// item that took its place.
  pub(crate) fn retain<F>(&mut self, mut keep: F)
  where
    F: FnMut(&T) -> bool,
  {
    let mut index = 0;
    let mut removed_before = 0;
    let selected = self.selected;

    self.items.retain(|item| {
      let kept = keep(item);

      if !kept && index < selected {
        removed_before += 1;
      }

      index += 1;

      kept
    });

    self.set_selected(selected.saturating_sub(removed_before));
    self.set_offset(self.offset);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.items.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }
}
