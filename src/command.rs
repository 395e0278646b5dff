#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Command {
  CancelComment,
  CancelConfirm,
  ClosePost,
  Confirm,
  DeleteComment { comment_id: u64 },
  DeletePost,
  DismissAlert,
  HideHelp,
  None,
  OpenEdit,
  OpenPost,
  PageDown,
  PageUp,
  Quit,
  Reload,
  RequestDeleteComment,
  RequestDeletePost,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartComment,
  SubmitComment,
}
