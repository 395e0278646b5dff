use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) content: String,
  pub(crate) create_date: Option<NaiveDateTime>,
  pub(crate) id: u64,
  pub(crate) modify_date: Option<NaiveDateTime>,
}

impl Comment {
  pub(crate) fn detail(&self) -> Option<String> {
    let created = self.create_date?;

    match self.modify_date {
      Some(modified) if modified != created => Some(format!(
        "written {} • edited {}",
        format_timestamp(created),
        format_timestamp(modified)
      )),
      _ => Some(format!("written {}", format_timestamp(created))),
    }
  }

  pub(crate) fn header(&self) -> String {
    format!("{} : {}", self.id, self.content)
  }
}

#[derive(Debug, Serialize)]
pub(crate) struct WriteComment<'a> {
  pub(crate) content: &'a str,
}
